/// Matches the configured single-letter key regardless of case.
/// Modifier keys are not consulted.
pub fn is_home_key(key: &str, home_key: &str) -> bool {
    key.chars().count() == 1 && key.eq_ignore_ascii_case(home_key)
}
