use crate::page::Page;

pub fn scale_transform(factor: f64) -> String {
    format!("scale({})", factor)
}

pub fn apply<P: Page>(page: &P, node: &P::Node, entered: bool, factor: f64) {
    let factor = if entered { factor } else { 1.0 };
    page.set_style(node, "transform", &scale_transform(factor));
}
