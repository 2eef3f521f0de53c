use std::hint::black_box;

use mimeparse::best_match;

fn main() {
    let supported = ["application/xbel+xml", "application/xml", "text/html"];
    for _ in 0..1_000_000 {
        black_box(best_match(
            &supported,
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ));
    }
}
