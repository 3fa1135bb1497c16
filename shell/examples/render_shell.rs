//! Shell generation example.
//!
//! Run with: `cargo run --example render_shell`

use moondry_shell::render_shell;

fn main() {
    // Annual billing is the default display mode on the page
    let html = render_shell(true);

    // Write to file
    let output_path = "index.html";
    std::fs::write(output_path, &html).expect("Failed to write shell");

    println!("Shell written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
