use crate::page::{query_unique, Page};

pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

/// Starts an element hidden and shifted down, ready to animate in.
pub fn hide<P: Page>(page: &P, node: &P::Node, transition: &str) {
    page.set_style(node, "opacity", "0");
    page.set_style(node, "transform", HIDDEN_TRANSFORM);
    page.set_style(node, "transition", transition);
}

/// One-way: nothing ever hides the element again.
pub fn show<P: Page>(page: &P, node: &P::Node) {
    page.set_style(node, "opacity", "1");
    page.set_style(node, "transform", SHOWN_TRANSFORM);
}

/// Hides every element matched by `selectors` and returns them for observing.
pub fn prepare<P: Page>(page: &P, selectors: &[String], transition: &str) -> Vec<P::Node> {
    let nodes = query_unique(page, selectors);
    for node in &nodes {
        hide(page, node, transition);
    }
    nodes
}

/// Handles one visibility notification batch.
pub fn on_batch<P: Page>(page: &P, entries: &[(P::Node, bool)]) {
    for (node, intersecting) in entries {
        if *intersecting {
            show(page, node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockPage;

    #[test]
    fn prepares_each_element_once() {
        let page = MockPage::new();
        let card = page.add(&[".stat-card", ".timeline-item"]);
        let about = page.add(&[".about-text"]);
        let selectors = vec![".stat-card".to_string(), ".timeline-item".to_string(), ".about-text".to_string()];

        let nodes = prepare(&page, &selectors, "opacity 0.6s ease-out");
        assert_eq!(nodes, vec![card, about]);
        assert_eq!(page.style(card, "opacity").as_deref(), Some("0"));
        assert_eq!(page.style(about, "transform").as_deref(), Some(HIDDEN_TRANSFORM));
        assert_eq!(page.style(about, "transition").as_deref(), Some("opacity 0.6s ease-out"));
    }

    #[test]
    fn reveal_is_one_way() {
        let page = MockPage::new();
        let block = page.add(&[".skill-category"]);
        hide(&page, &block, "none");

        on_batch(&page, &[(block, false)]);
        assert_eq!(page.style(block, "opacity").as_deref(), Some("0"));

        on_batch(&page, &[(block, true)]);
        on_batch(&page, &[(block, false)]);
        assert_eq!(page.style(block, "opacity").as_deref(), Some("1"));
        assert_eq!(page.style(block, "transform").as_deref(), Some(SHOWN_TRANSFORM));
    }
}
