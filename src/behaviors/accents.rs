use crate::page::Page;

pub fn accent_for(palette: &[String], index: usize) -> Option<&str> {
    if palette.is_empty() {
        return None;
    }
    Some(palette[index % palette.len()].as_str())
}

/// One-time pass over the cards in document order.
pub fn paint<P: Page>(page: &P, cards: &[P::Node], palette: &[String]) {
    for (index, card) in cards.iter().enumerate() {
        if let Some(color) = accent_for(palette, index) {
            page.set_style(card, "border-top-color", color);
        }
    }
}
