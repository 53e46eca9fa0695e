pub mod decode;
pub mod encode;
pub mod init;
pub mod render;

use eyre::{Context, Result};
use std::io::{self, Read};

/// Read all of stdin as text, dropping one trailing line break
pub fn read_stdin_text() -> Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input).context("Failed to read stdin")?;
    Ok(strip_line_break(input))
}

pub fn read_stdin_bytes() -> Result<Vec<u8>> {
    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input).context("Failed to read stdin")?;
    Ok(input)
}

fn strip_line_break(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}
