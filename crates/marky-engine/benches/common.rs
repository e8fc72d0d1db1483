// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nSection\n--\n\nParagraph with **bold**, _italic_ and a [link](https://example.com \"Example\").\n\n- Bullet point\n  - Nested item\n- Another item\n\n1. First\n2. Second\n\n> Quoted text\n>> Nested quote\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_lists(items: usize, depth: usize) -> String {
    let mut content = String::new();
    for item in 0..items {
        for level in 0..depth {
            let indent = "  ".repeat(level);
            content.push_str(&format!("{indent}- Item {item} at level {level}\n"));
        }
    }
    content
}
