//! The slice of the document the behaviors are allowed to touch.
//!
//! Behaviors never talk to `web_sys` directly; they go through [`Page`], which
//! is implemented by [`crate::dom::DomPage`] in the browser and by an in-memory
//! table in tests. Writes are fire-and-forget: a failed style or attribute write
//! simply leaves the flourish missing.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

pub trait Page: Clone + 'static {
    /// Element handle. Equality is element identity.
    type Node: Clone + PartialEq + 'static;

    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn query_in(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    fn set_class(&self, node: &Self::Node, class: &str, on: bool);
    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&self, node: &Self::Node, text: &str);

    fn offset_top(&self, node: &Self::Node) -> f64;
    fn offset_height(&self, node: &Self::Node) -> f64;

    /// Creates an empty element appended to the body.
    fn append_overlay(&self) -> Option<Self::Node>;
    fn remove(&self, node: &Self::Node);

    fn scroll_y(&self) -> f64;
    fn viewport(&self) -> Viewport;
    fn smooth_scroll_to(&self, top: f64);
}

/// Collects the matches of several selectors, keeping the first occurrence of
/// elements matched more than once.
pub fn query_unique<P: Page>(page: &P, selectors: &[String]) -> Vec<P::Node> {
    let mut nodes: Vec<P::Node> = Vec::new();
    for selector in selectors {
        for node in page.query_all(selector) {
            if !nodes.contains(&node) {
                nodes.push(node);
            }
        }
    }
    nodes
}
