use crate::page::Page;

pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Scroll offset plus navbar height plus lookahead.
pub fn probe_position(scroll_y: f64, navbar_height: f64, lookahead: f64) -> f64 {
    scroll_y + navbar_height + lookahead
}

/// Every containing span re-applies the markers, so when spans overlap the
/// last one in document order is what remains highlighted.
pub fn active_index(spans: &[Span], position: f64) -> Option<usize> {
    spans.iter().rposition(|span| span.contains(position))
}

/// Marks the nav link whose `href` is `#<id>` of the section under the probe
/// and clears the rest. Leaves the links alone when no section contains it.
pub fn update<P: Page>(page: &P, sections: &[P::Node], links: &[P::Node], position: f64) {
    let spans: Vec<Span> = sections
        .iter()
        .map(|s| Span { top: page.offset_top(s), height: page.offset_height(s) })
        .collect();
    let Some(index) = active_index(&spans, position) else {
        return;
    };
    let wanted = format!("#{}", page.attribute(&sections[index], "id").unwrap_or_default());
    for link in links {
        let matches = page.attribute(link, "href").as_deref() == Some(wanted.as_str());
        page.set_class(link, ACTIVE_CLASS, matches);
    }
}
