/// Styled lines printed to the developer console, `%c` first.
pub const GREETING: [(&str, &str); 4] = [
    ("%c👋 Hi there!", "font-size: 20px; font-weight: bold; color: #3b82f6;"),
    ("%cLooking at the code, are we? I like your style!", "font-size: 14px; color: #64748b;"),
    (
        "%cIf you want to chat about backend architecture or why microservices are both a blessing and a curse, feel free to reach out on LinkedIn!",
        "font-size: 12px; color: #64748b;",
    ),
    ("%c🎮 Easter egg hint: Try the Konami Code!", "font-size: 11px; color: #8b5cf6; font-style: italic;"),
];

pub fn greet() {
    for (text, style) in GREETING {
        gloo_console::log!(text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_carries_its_style() {
        for (text, style) in GREETING {
            assert!(text.starts_with("%c"));
            assert!(style.contains("color:"));
        }
    }
}
