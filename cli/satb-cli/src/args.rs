//! cli/satb-cli/src/args.rs
//! Command-line grammar: one subcommand per in-scope operation plus `health`.

use clap::{Args, Parser, Subcommand};

use crate::format::OutputFormat;

#[derive(Parser)]
#[command(name = "satb", version, about = "Bass-line-to-SATB harmonization engine")]
pub struct Cli {
    /// Output format for the selected command.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rank candidate Roman-numeral progressions over a fixed bass line.
    Analyze(AnalyzeArgs),
    /// Realize a chosen progression into a four-voice SATB texture and validate it.
    Realize(RealizeArgs),
    /// Proxy a progression to the external text-to-audio collaborator (feature `ai-music`).
    #[cfg(feature = "ai-music")]
    AiMusic(AiMusicArgs),
    /// Report readiness.
    Health,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Bass note names, e.g. `C3 F3 G3 C3`. Missing octave defaults to 3.
    #[arg(long = "bass-notes", num_args = 1.., required = true)]
    pub bass_notes: Vec<String>,

    /// Key string, e.g. `"C major"`, `"F# minor"`, or `auto` to detect it from the bass line.
    #[arg(long, default_value = "auto")]
    pub key: String,
}

#[derive(Args)]
pub struct RealizeArgs {
    /// Chosen progression as canonical Roman-numeral tags, e.g. `I IV V7 I`.
    #[arg(long, num_args = 1.., required = true)]
    pub progression: Vec<String>,

    /// Fixed bass line, same length as `--progression`.
    #[arg(long = "bass-notes", num_args = 1.., required = true)]
    pub bass_notes: Vec<String>,

    /// Key string, e.g. `"C major"`.
    #[arg(long, default_value = "auto")]
    pub key: String,
}

#[cfg(feature = "ai-music")]
#[derive(Args)]
pub struct AiMusicArgs {
    /// Progression to describe in the generated prompt.
    #[arg(long, num_args = 1.., required = true)]
    pub progression: Vec<String>,

    /// Key string included in the prompt.
    #[arg(long, default_value = "C major")]
    pub key: String,
}
