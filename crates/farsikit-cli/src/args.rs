use clap::Parser;
use jiff::civil::DateTime;

/// Arguments for the farsikit CLI
#[derive(Parser, Debug)]
#[command(version, about = "Persian text, calendar, token and crypto helpers")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Keep quiet and only log errors
    #[clap(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[clap(
        short = 'v',
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Output details; specify multiple times for more detail"
    )]
    pub verbose: u8,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Collapse whitespace and use the Persian forms of yeh and kaf
    Normalize {
        #[clap(help = "Text to normalize")]
        text: String,
    },
    /// Turn text into a lowercase, hyphenated URL slug
    Slugify {
        #[clap(help = "Text to slugify")]
        text: String,
    },
    /// Generate a random alphanumeric token
    Token {
        #[clap(short, long, value_name = "N", default_value_t = 32)]
        length: usize,

        /// Avoid the slight modulo bias toward the first alphabet characters
        #[clap(short, long)]
        uniform: bool,
    },
    /// Format a Gregorian date
    Date {
        #[clap(
            short,
            long,
            value_name = "FORMAT",
            default_value = "date-only",
            help = "'date-only' or 'date-time'; unknown names use 'date-only'"
        )]
        format: String,

        #[clap(
            long,
            value_name = "DATETIME",
            value_parser = parse_civil,
            help = "Civil date and time such as '2025-08-24 18:45' (default: now)"
        )]
        at: Option<DateTime>,
    },
    /// Convert a Gregorian date to the Persian calendar
    ToPersian {
        #[clap(
            short,
            long,
            value_name = "FORMAT",
            default_value = "simple",
            help = "'simple', 'long' or 'date-time'; unknown names use 'simple'"
        )]
        format: String,

        #[clap(
            long,
            value_name = "DATETIME",
            value_parser = parse_civil,
            help = "Civil date and time such as '2025-08-24 18:45' (default: now)"
        )]
        at: Option<DateTime>,

        /// Print the converted date as JSON
        #[clap(long)]
        json: bool,
    },
    /// Convert a Persian yyyy/MM/dd date to the Gregorian calendar
    ToGregorian {
        #[clap(help = "Persian date, e.g. 1404/06/02")]
        date: String,
    },
    /// Encrypt text with AES-256-CBC, printing base64
    Encrypt {
        #[clap(help = "Text to encrypt")]
        text: String,

        #[command(flatten)]
        key: KeyArgs,
    },
    /// Decrypt base64 AES-256-CBC ciphertext
    Decrypt {
        #[clap(help = "Base64 ciphertext")]
        text: String,

        #[command(flatten)]
        key: KeyArgs,
    },
    /// Hash a password
    Hash {
        password: String,

        /// Use salted PBKDF2 instead of plain SHA-256
        #[clap(short, long)]
        salted: bool,
    },
    /// Check a password against a salted hash produced by 'hash --salted'
    Verify { password: String, stored: String },
}

#[derive(clap::Args, Debug)]
pub struct KeyArgs {
    #[clap(
        short,
        long,
        value_name = "KEY",
        env = "FARSIKIT_KEY",
        requires = "iv",
        hide_env_values = true,
        help = "32-byte AES key, hex or base64 (default: built-in legacy key)"
    )]
    pub key: Option<String>,

    #[clap(
        short,
        long,
        value_name = "IV",
        env = "FARSIKIT_IV",
        requires = "key",
        hide_env_values = true,
        help = "16-byte IV, hex or base64"
    )]
    pub iv: Option<String>,
}

fn parse_civil(value: &str) -> Result<DateTime, jiff::Error> {
    value.trim().parse()
}
