use super::read_stdin_text;
use crate::cli::{Cli, RenderArgs};
use colored::*;
use eyre::{Context, Result};
use llmspec::config::Config;
use llmspec::TextRecord;
use std::path::Path;

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let config = Config::load(cli.config.as_ref(), Path::new("."))?;

    let input = match &args.text {
        Some(text) => text.clone(),
        None => read_stdin_text()?,
    };

    let prompt = render(&config, &input, args.model.as_deref(), args.json)?;
    if cli.verbose {
        let model = args.model.clone().unwrap_or_else(|| config.render.model.to_string());
        eprintln!("{} Rendered for {}", "✓".green(), model.cyan());
    }
    println!("{}", prompt);

    Ok(())
}

pub fn render(config: &Config, input: &str, model: Option<&str>, json: bool) -> Result<String> {
    let record = if json {
        TextRecord::decode_with(input, config.decode.policy).context("Failed to decode record")?
    } else {
        TextRecord::new(input)
    };

    let prompt = match model {
        Some(name) => record.to_model(name),
        None => record.render(config.render.model),
    }
    .context("Failed to render prompt")?;

    Ok(prompt)
}
