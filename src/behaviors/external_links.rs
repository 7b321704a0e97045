use crate::page::Page;

pub fn is_external(href: &str) -> bool {
    href.starts_with("http")
}

/// Opens external links in a new tab without leaking opener or referrer.
/// Only links present at call time are touched. Returns how many were.
pub fn harden<P: Page>(page: &P, links: &[P::Node]) -> usize {
    let mut count = 0;
    for link in links {
        if page.attribute(link, "href").is_some_and(|href| is_external(&href)) {
            page.set_attribute(link, "target", "_blank");
            page.set_attribute(link, "rel", "noopener noreferrer");
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockPage;

    #[test]
    fn only_http_links_are_hardened() {
        let page = MockPage::new();
        let github = page.with_attr(page.add(&["a"]), "href", "https://github.com/someone");
        let local = page.with_attr(page.add(&["a"]), "href", "#about");
        let mail = page.with_attr(page.add(&["a"]), "href", "mailto:me@example.com");

        assert_eq!(harden(&page, &[github, local, mail]), 1);
        assert_eq!(page.attribute(&github, "target").as_deref(), Some("_blank"));
        assert_eq!(page.attribute(&github, "rel").as_deref(), Some("noopener noreferrer"));
        assert_eq!(page.attribute(&local, "target"), None);
        assert_eq!(page.attribute(&mail, "rel"), None);
    }
}
