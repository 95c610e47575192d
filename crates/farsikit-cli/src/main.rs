//! The farsikit command line tool

mod args;

use clap::Parser;
use farsikit_calendar::{
    DateTimeFormat, PersianDateTime, PersianFormat, persian_to_gregorian, standardize_date_time,
    to_persian_date,
};
use farsikit_common::cipher::CipherKey;
use farsikit_common::password::{SaltedHash, hash_password};
use farsikit_common::text::{normalize, slugify};
use farsikit_common::token::{generate_token, generate_uniform_token};
use jiff::Zoned;
use jiff::civil::DateTime;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::args::{Args, Command, KeyArgs};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Farsikit(#[from] farsikit_common::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("password does not match")]
    Mismatch,
}

/// JSON view of a converted date for `to-persian --json`
#[derive(Serialize)]
struct PersianView {
    date: farsikit_calendar::PersianDate,
    hour: i8,
    minute: i8,
    month_name: &'static str,
    leap_year: bool,
}

fn main() {
    let args = Args::parse();

    enable_logging(&args);
    debug!("command line: {:?}", args.command);

    match run(args.command) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(command: Command) -> Result<String, CliError> {
    let output = match command {
        Command::Normalize { text } => normalize(&text),
        Command::Slugify { text } => slugify(&text),
        Command::Token { length, uniform } => {
            if uniform {
                generate_uniform_token(length)
            } else {
                generate_token(length)
            }
        }
        Command::Date { format, at } => {
            let format = DateTimeFormat::from_name(&format);
            standardize_date_time(at.unwrap_or_else(now), format)
        }
        Command::ToPersian { format, at, json } => {
            let at = at.unwrap_or_else(now);
            if json {
                persian_json(at)?
            } else {
                to_persian_date(at, PersianFormat::from_name(&format))?
            }
        }
        Command::ToGregorian { date } => {
            let gregorian = persian_to_gregorian(&date)?;
            standardize_date_time(gregorian, DateTimeFormat::DateOnly)
        }
        Command::Encrypt { text, key } => cipher_key(key)?.encrypt(&text)?,
        Command::Decrypt { text, key } => cipher_key(key)?.decrypt(&text)?,
        Command::Hash { password, salted } => {
            if salted {
                SaltedHash::derive(&password).to_string()
            } else {
                hash_password(&password)
            }
        }
        Command::Verify { password, stored } => {
            let salted: SaltedHash = stored.parse()?;
            if !salted.verify(&password) {
                return Err(CliError::Mismatch);
            }
            "ok".to_string()
        }
    };

    Ok(output)
}

fn persian_json(at: DateTime) -> Result<String, CliError> {
    let converted = PersianDateTime::from_gregorian(at)?;
    let date = converted.date();
    let view = PersianView {
        date,
        hour: converted.hour(),
        minute: converted.minute(),
        month_name: date.month_name(),
        leap_year: date.is_leap_year(),
    };

    Ok(serde_json::to_string_pretty(&view)?)
}

fn cipher_key(args: KeyArgs) -> Result<CipherKey, CliError> {
    match (args.key, args.iv) {
        (Some(key), Some(iv)) => Ok(CipherKey::from_encoded(&key, &iv)?),
        _ => {
            warn!("no --key/--iv given, using the built-in legacy key; this is not confidential");
            Ok(CipherKey::legacy())
        }
    }
}

fn now() -> DateTime {
    Zoned::now().datetime()
}

fn enable_logging(args: &Args) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{Layer, filter};

    let verbosity = if args.quiet {
        tracing::Level::ERROR
    } else {
        match args.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            2.. => tracing::Level::TRACE,
        }
    };

    let filters = filter::Targets::new()
        .with_target("farsikit", verbosity)
        .with_target("farsikit_common", verbosity)
        .with_target("farsikit_calendar", verbosity)
        .with_default(tracing::Level::WARN); // for all other targets

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(filters);

    tracing_subscriber::registry().with(fmt_layer).init();
}
