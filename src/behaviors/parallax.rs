use crate::page::Page;

/// Vertical shift for the hero, or `None` once the page has scrolled a full
/// viewport. In that case the last transform written stays in place.
pub fn shift(scroll_y: f64, viewport_height: f64, speed: f64) -> Option<f64> {
    (scroll_y < viewport_height).then(|| scroll_y * speed)
}

pub fn update<P: Page>(page: &P, hero: &P::Node, speed: f64) {
    if let Some(offset) = shift(page.scroll_y(), page.viewport().height, speed) {
        page.set_style(hero, "transform", &format!("translateY({}px)", offset));
    }
}
