// Plain partition helpers with no quoting rules.

pub fn split(line: &str, delim: char, skip_empty: bool) -> Vec<String> {
    line.split(delim)
        .filter(|part| !skip_empty || !part.is_empty())
        .map(String::from)
        .collect()
}

/// Splits on a string delimiter, always dropping empty pieces.
/// An empty delimiter yields one piece per character.
pub fn split_str(line: &str, delim: &str) -> Vec<String> {
    line.split(delim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/// Splits raw bytes (e.g. captured process output), keeping empty pieces.
pub fn split_bytes(bytes: &[u8], delim: u8) -> Vec<&[u8]> {
    bytes.split(|b| *b == delim).collect()
}
