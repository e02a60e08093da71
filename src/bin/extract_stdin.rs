//! Simple CLI that reads page HTML from stdin and writes the extracted
//! product record as one JSON line to stdout.
//!
//! Usage: `extract_stdin <page-url> < page.html`
//! Exits 1 when no product was detected or the input was unusable.

use product_harvest::extract_bytes;
use std::io::{self, Read};

fn main() {
    let Some(url) = std::env::args().nth(1) else {
        eprintln!("Usage: extract_stdin <page-url> < page.html");
        std::process::exit(2);
    };

    // Read raw bytes; charset detection happens inside extract_bytes
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    match extract_bytes(&html, &url) {
        Ok(Some(record)) => {
            println!("{}", serde_json::to_string(&record).unwrap_or_default());
        }
        Ok(None) => {
            eprintln!("No product detected");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
