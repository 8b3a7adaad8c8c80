pub mod quoted;
pub mod delimited;

pub use quoted::{QuoteSplitter, tokenize};
pub use delimited::{split, split_bytes, split_str};
