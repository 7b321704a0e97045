use crate::page::Page;

/// `#about` -> `about`. A bare `#` or a non-fragment href resolves to nothing.
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Where to scroll so a fixed navbar of `navbar_height` doesn't cover the target.
pub fn destination(target_top: f64, navbar_height: f64) -> f64 {
    target_top - navbar_height
}

/// Smoothly scrolls to the element the link points at. Returns the offset
/// scrolled to, or `None` when the link has no resolvable target.
pub fn follow<P: Page>(page: &P, link: &P::Node, navbar: Option<&P::Node>) -> Option<f64> {
    let href = page.attribute(link, "href")?;
    let target = page.element_by_id(fragment(&href)?)?;
    let navbar_height = navbar.map(|n| page.offset_height(n)).unwrap_or(0.0);
    let top = destination(page.offset_top(&target), navbar_height);
    page.smooth_scroll_to(top);
    Some(top)
}
