use super::read_stdin_text;
use crate::cli::{Cli, EncodeArgs};
use colored::*;
use eyre::Result;
use llmspec::TextRecord;

pub fn run(cli: &Cli, args: &EncodeArgs) -> Result<()> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => read_stdin_text()?,
    };

    let encoded = encode(text);
    if cli.verbose {
        eprintln!("{} Encoded {} bytes", "✓".green(), encoded.len());
    }
    println!("{}", encoded);

    Ok(())
}

pub fn encode(text: String) -> String {
    TextRecord::new(text).encode()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode("a\"b".to_string()), r#"{"text": "a\"b"}"#);
    }
}
