use tracing::trace;

/// Quote-aware line splitter.
///
/// Whitespace separates tokens unless it sits inside a region opened by a
/// single `"`. Three consecutive quotes produce one literal `"` and never
/// toggle the region. Unbalanced quotes are accepted as-is.
pub struct QuoteSplitter<'a> {
    chars: std::str::Chars<'a>,
    buf: String,
    in_quote: bool,
    quote_count: u8,
}

impl<'a> QuoteSplitter<'a> {
    pub fn new(input: &'a str) -> Self {
        QuoteSplitter {
            chars: input.chars(),
            buf: String::new(),
            in_quote: false,
            quote_count: 0,
        }
    }

    pub fn next_token(&mut self) -> Option<String> {
        while let Some(ch) = self.chars.next() {
            if ch == '"' {
                self.quote_count += 1;
                if self.quote_count == 3 {
                    self.quote_count = 0;
                    self.buf.push('"');
                }
                continue;
            }

            if self.quote_count != 0 {
                if self.quote_count == 1 {
                    self.in_quote = !self.in_quote;
                }
                self.quote_count = 0;
            }

            if !self.in_quote && ch.is_whitespace() {
                if !self.buf.is_empty() {
                    return Some(std::mem::take(&mut self.buf));
                }
            } else {
                self.buf.push(ch);
            }
        }

        // A pending quote count at end of input is dropped
        if !self.buf.is_empty() {
            return Some(std::mem::take(&mut self.buf));
        }
        None
    }

    /// True while the scan position sits inside an open quoted region.
    pub fn in_quote(&self) -> bool {
        self.in_quote
    }
}

impl Iterator for QuoteSplitter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_token()
    }
}

pub fn tokenize(line: &str) -> Vec<String> {
    let mut splitter = QuoteSplitter::new(line);
    let tokens: Vec<String> = splitter.by_ref().collect();
    if splitter.in_quote() {
        trace!(line, "line ends inside a quoted region");
    }
    trace!(count = tokens.len(), "tokenized line");
    tokens
}
