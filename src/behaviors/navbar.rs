use crate::page::Page;

pub const SCROLLED_CLASS: &str = "scrolled";

/// Level-triggered: strictly above the threshold means scrolled.
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub fn update<P: Page>(page: &P, navbar: &P::Node, offset: f64, threshold: f64) {
    page.set_class(navbar, SCROLLED_CLASS, is_scrolled(offset, threshold));
}
