use std::env;
use std::fs;
use std::path::PathBuf;

// Trunk post-build hook: make the staged page load its bundle relatively so
// it can be served from a sub-path next to the pages it links to.
fn main() {
    let staging_dir = env::var("TRUNK_STAGING_DIR").expect("TRUNK_STAGING_DIR is set by Trunk");
    let staged_html_path = PathBuf::from(staging_dir).join("index.html");

    let html = fs::read_to_string(&staged_html_path).expect("staged index.html is readable");
    let html = html
        .replace("/celestial-portfolio.js", "./celestial-portfolio.js")
        .replace("/celestial-portfolio_bg.wasm", "./celestial-portfolio_bg.wasm");

    fs::write(staged_html_path, html).expect("staged index.html is writable");
}
