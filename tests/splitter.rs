use std::sync::Arc;
use std::thread;

use tiny_argsplit_rs::counter::IdCounter;
use tiny_argsplit_rs::splitter::{split, tokenize};

#[test]
fn test_documented_examples() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
    assert_eq!(tokenize("a b c"), vec!["a", "b", "c"]);
    assert_eq!(tokenize("\"a b\" c"), vec!["a b", "c"]);
    assert_eq!(tokenize("a\"\"\"b"), vec!["a\"b"]);
    assert_eq!(tokenize("\"unterminated"), vec!["unterminated"]);
    assert_eq!(split("a,,b", ',', true), vec!["a", "b"]);
    assert_eq!(split("a,,b", ',', false), vec!["a", "", "b"]);
}

#[test]
fn test_downloader_option_line() {
    let line = r#"-f "bestvideo[height<=720]+bestaudio" -o "%(uploader)s/%(title)s.%(ext)s" --embed-subs"#;
    assert_eq!(
        tokenize(line),
        vec![
            "-f",
            "bestvideo[height<=720]+bestaudio",
            "-o",
            "%(uploader)s/%(title)s.%(ext)s",
            "--embed-subs",
        ]
    );
}

#[test]
fn test_tokenize_is_reentrant_across_threads() {
    let counter = Arc::new(IdCounter::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                let id = counter.next();
                let tokens = tokenize(&format!("--id {} \"name {}\"", id, id));
                (id, tokens)
            })
        })
        .collect();

    for handle in handles {
        let (id, tokens) = handle.join().unwrap();
        assert_eq!(tokens, vec!["--id".to_string(), id.to_string(), format!("name {}", id)]);
    }
    assert_eq!(counter.next(), 8);
}
