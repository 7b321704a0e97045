use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::page::{Page, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Default)]
struct MockNode {
    selectors: Vec<String>,
    attributes: HashMap<String, String>,
    styles: HashMap<String, String>,
    classes: BTreeSet<String>,
    text: String,
    top: f64,
    height: f64,
    children: Vec<NodeId>,
    overlay: bool,
    removed: bool,
}

struct Dom {
    nodes: Vec<MockNode>,
    body: NodeId,
    scroll_y: f64,
    viewport: Viewport,
    scrolled_to: Vec<f64>,
}

/// In-memory document: nodes answer to the selectors they were registered with.
#[derive(Clone)]
pub struct MockPage {
    dom: Rc<RefCell<Dom>>,
}

impl Default for MockPage {
    fn default() -> Self {
        let body = MockNode { selectors: vec!["body".into()], ..MockNode::default() };
        Self {
            dom: Rc::new(RefCell::new(Dom {
                nodes: vec![body],
                body: NodeId(0),
                scroll_y: 0.0,
                viewport: Viewport { width: 1280.0, height: 800.0 },
                scrolled_to: Vec::new(),
            })),
        }
    }
}

impl MockPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, selectors: &[&str]) -> NodeId {
        let mut dom = self.dom.borrow_mut();
        dom.nodes.push(MockNode {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            ..MockNode::default()
        });
        NodeId(dom.nodes.len() - 1)
    }

    pub fn add_child(&self, parent: NodeId, selectors: &[&str]) -> NodeId {
        let child = self.add(selectors);
        self.dom.borrow_mut().nodes[parent.0].children.push(child);
        child
    }

    pub fn with_attr(&self, node: NodeId, name: &str, value: &str) -> NodeId {
        self.set_attribute(&node, name, value);
        node
    }

    pub fn with_text(&self, node: NodeId, text: &str) -> NodeId {
        self.set_text(&node, text);
        node
    }

    pub fn with_box(&self, node: NodeId, top: f64, height: f64) -> NodeId {
        let mut dom = self.dom.borrow_mut();
        dom.nodes[node.0].top = top;
        dom.nodes[node.0].height = height;
        node
    }

    pub fn set_scroll(&self, y: f64) {
        self.dom.borrow_mut().scroll_y = y;
    }

    pub fn set_viewport(&self, width: f64, height: f64) {
        self.dom.borrow_mut().viewport = Viewport { width, height };
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.dom.borrow().nodes[node.0].styles.get(property).cloned()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.dom.borrow().nodes[node.0].classes.contains(class)
    }

    pub fn scrolled_to(&self) -> Vec<f64> {
        self.dom.borrow().scrolled_to.clone()
    }

    /// Overlays still attached to the body.
    pub fn live_overlays(&self) -> Vec<NodeId> {
        let dom = self.dom.borrow();
        (0..dom.nodes.len())
            .filter(|&i| dom.nodes[i].overlay && !dom.nodes[i].removed)
            .map(NodeId)
            .collect()
    }

    pub fn overlays_created(&self) -> usize {
        self.dom.borrow().nodes.iter().filter(|n| n.overlay).count()
    }
}

impl Page for MockPage {
    type Node = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let dom = self.dom.borrow();
        (0..dom.nodes.len())
            .filter(|&i| !dom.nodes[i].removed && dom.nodes[i].selectors.iter().any(|s| s == selector))
            .map(NodeId)
            .collect()
    }

    fn query_in(&self, scope: &NodeId, selector: &str) -> Option<NodeId> {
        let dom = self.dom.borrow();
        dom.nodes[scope.0]
            .children
            .iter()
            .copied()
            .find(|c| dom.nodes[c.0].selectors.iter().any(|s| s == selector))
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let dom = self.dom.borrow();
        (0..dom.nodes.len())
            .find(|&i| !dom.nodes[i].removed && dom.nodes[i].attributes.get("id").map(String::as_str) == Some(id))
            .map(NodeId)
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.dom.borrow().body)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.dom.borrow().nodes[node.0].attributes.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.dom.borrow_mut().nodes[node.0].attributes.insert(name.to_string(), value.to_string());
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.dom.borrow_mut().nodes[node.0].styles.insert(property.to_string(), value.to_string());
    }

    fn set_class(&self, node: &NodeId, class: &str, on: bool) {
        let mut dom = self.dom.borrow_mut();
        let classes = &mut dom.nodes[node.0].classes;
        if on {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn text(&self, node: &NodeId) -> String {
        self.dom.borrow().nodes[node.0].text.clone()
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.dom.borrow_mut().nodes[node.0].text = text.to_string();
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.dom.borrow().nodes[node.0].top
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.dom.borrow().nodes[node.0].height
    }

    fn append_overlay(&self) -> Option<NodeId> {
        let mut dom = self.dom.borrow_mut();
        dom.nodes.push(MockNode { overlay: true, ..MockNode::default() });
        Some(NodeId(dom.nodes.len() - 1))
    }

    fn remove(&self, node: &NodeId) {
        self.dom.borrow_mut().nodes[node.0].removed = true;
    }

    fn scroll_y(&self) -> f64 {
        self.dom.borrow().scroll_y
    }

    fn viewport(&self) -> Viewport {
        self.dom.borrow().viewport
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.dom.borrow_mut().scrolled_to.push(top);
    }
}
