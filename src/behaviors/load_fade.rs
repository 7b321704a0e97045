use crate::config::LoadFade;
use crate::page::Page;
use crate::scheduler::Scheduler;

/// `document.readyState` once the `load` event has already been dispatched.
pub fn is_complete(ready_state: &str) -> bool {
    ready_state == "complete"
}

pub fn hide<P: Page>(page: &P, body: &P::Node) {
    page.set_style(body, "opacity", "0");
}

pub fn fade_in<P: Page, S: Scheduler>(page: &P, scheduler: &S, body: &P::Node, fade: &LoadFade) {
    let page = page.clone();
    let body = body.clone();
    let transition = fade.transition.clone();
    scheduler.after(
        fade.delay_ms,
        Box::new(move || {
            page.set_style(&body, "transition", &transition);
            page.set_style(&body, "opacity", "1");
        }),
    );
}
