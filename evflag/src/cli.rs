use crate::store;
use clap::{command, Args, Parser, Subcommand};
use evflag_codec::Flag;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Inspect and edit bit-packed event-flag fields",
    long_about = None,
    flatten_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a zeroed field file
    Init(InitFlags),

    /// Raise a flag in a field file
    Set(FlagArgs),

    /// Lower a flag in a field file
    Clear(FlagArgs),

    /// Report whether a flag is raised
    Test(FlagArgs),

    /// Render every word of a field file
    Dump(Target),

    /// Write the built-in story scenario to a field file and render it
    Demo(Target),
}

#[derive(Args, Debug)]
pub struct InitFlags {
    #[arg(long, default_value_t = store::DEFAULT_WORDS)]
    /// Number of 16-bit words to allocate
    ///
    /// Defaults to 30, the traditional field size; identifiers up to 0x1df
    /// fit in it.
    pub words: usize,

    /// Path of the field file to create
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct FlagArgs {
    /// Path to an existing field file
    pub path: PathBuf,

    #[arg(value_parser = parse_flag)]
    /// Flag identifier, decimal or 0x-prefixed hex
    pub flag: Flag,
}

#[derive(Args, Debug)]
pub struct Target {
    #[arg(long)]
    /// Render without color highlighting
    pub plain: bool,

    /// Path to an existing field file
    pub path: PathBuf,
}

pub fn parse_flag(raw: &str) -> Result<Flag, String> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => raw.parse(),
    };

    parsed
        .map(Flag)
        .map_err(|_| format!("`{raw}` is not a flag identifier"))
}
