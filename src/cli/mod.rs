// src/cli/mod.rs
use clap::Parser;

pub mod handlers;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate strong, secure random passwords", long_about = None)]
pub struct Args {
    /// Password length [default: DEFAULT_PASSWORD_LENGTH or 16]
    #[arg(short, long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Exclude uppercase letters
    #[arg(long, visible_alias = "no-uppercase")]
    pub no_upper: bool,

    /// Exclude lowercase letters
    #[arg(long, visible_alias = "no-lowercase")]
    pub no_lower: bool,

    /// Exclude digits
    #[arg(long, visible_alias = "no-numbers")]
    pub no_digits: bool,

    /// Exclude symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
