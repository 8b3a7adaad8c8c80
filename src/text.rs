/// True when every character is an ASCII digit. An empty string passes.
pub fn has_digits_only(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}
