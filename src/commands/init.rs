use crate::cli::Cli;
use colored::*;
use eyre::{Context, Result};
use llmspec::config::Config;
use std::fs;
use std::path::{Path, PathBuf};

pub fn run(cli: &Cli) -> Result<()> {
    let work_dir = Path::new(".");

    init(work_dir, cli.config.as_ref())
}

pub fn init(work_dir: &Path, config_path: Option<&PathBuf>) -> Result<()> {
    let local_dir = Config::local_config_dir(work_dir);
    let local_path = Config::local_config_path(work_dir);

    if local_path.exists() {
        println!(
            "{} .llmspec/llmspec.yml already exists. Use {} to reinitialize.",
            "⚠".yellow(),
            "rm -rf .llmspec".cyan()
        );
        return Ok(());
    }

    fs::create_dir_all(&local_dir).context("Failed to create .llmspec directory")?;

    // Seed from an explicit or global config when one exists
    let config = Config::load(config_path, work_dir)?;
    config.save_local(work_dir)?;
    println!("{} Created {}", "✓".green(), ".llmspec/llmspec.yml".cyan());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use llmspec::DecodePolicy;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_config() {
        let dir = tempdir().unwrap();
        init(dir.path(), None).unwrap();

        assert!(dir.path().join(".llmspec/llmspec.yml").exists());
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.decode.policy = DecodePolicy::Permissive;
        config.save_local(dir.path()).unwrap();

        init(dir.path(), None).unwrap();

        let loaded = Config::load(None, dir.path()).unwrap();
        assert_eq!(loaded.decode.policy, DecodePolicy::Permissive);
    }

    #[test]
    fn test_init_seeds_from_explicit_config() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("seed.yml");
        fs::write(&source, "decode:\n  encoding: ascii\n").unwrap();

        init(dir.path(), Some(&source)).unwrap();

        let loaded = Config::load(None, dir.path()).unwrap();
        assert_eq!(loaded.decode.encoding, llmspec::Encoding::Ascii);
    }
}
