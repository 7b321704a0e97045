use crate::page::Page;

pub fn prepare<P: Page>(page: &P, brand: &P::Node) {
    page.set_style(brand, "cursor", "pointer");
}

pub fn scroll_home<P: Page>(page: &P) {
    page.smooth_scroll_to(0.0);
}
