use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "llmspec",
    about = "Wrap text in a JSON record and render it as a model prompt",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/llmspec/logs/llmspec.log"
)]
pub struct Cli {
    /// Path to config file (overrides default locations)
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize .llmspec/ in current directory
    Init,

    /// Encode text as a JSON record
    Encode(EncodeArgs),

    /// Decode a JSON record and print its text
    Decode(DecodeArgs),

    /// Render text as a model prompt
    Render(RenderArgs),
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// Text to encode (reads stdin when omitted)
    pub text: Option<String>,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// File holding the encoded record (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Text encoding of the input bytes (overrides config)
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Accept any JSON value, not just {"text": ...}
    #[arg(long, conflicts_with = "strict")]
    pub permissive: bool,

    /// Require {"text": "..."} even when config says permissive
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Text to render (reads stdin when omitted)
    pub text: Option<String>,

    /// Model format name (overrides config)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Treat the input as an encoded record instead of plain text
    #[arg(long)]
    pub json: bool,
}
