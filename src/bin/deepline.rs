//! Command-line interface for deepline
//! Fetches the document at a URL and prints its most deeply nested text line.
//!
//! Usage:
//!   deepline `<url>` [--format `<format>`]
//!
//! Exactly one outcome line is printed to stdout: the deepest text line,
//! "malformed HTML", or "URL connection error". The process exits 0 for all
//! three outcomes; a non-zero exit happens only for an invalid invocation,
//! before any retrieval or analysis runs.

use std::panic;

use clap::{Arg, Command};

use deepline::{analyze, fetch, Outcome};

#[tokio::main]
async fn main() {
    let matches = Command::new("deepline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fetches a page and reports its most deeply nested text line")
        .arg(
            Arg::new("url")
                .help("Absolute http(s) URL of the document to analyze")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'text' or 'json'")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .get_matches();

    let url = matches
        .get_one::<String>("url")
        .expect("url is a required argument");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default value");

    let outcome = match fetch::fetch_lines(url).await {
        Ok(lines) => {
            // Never leak a panic across the process boundary; unexpected
            // analysis failures collapse into the malformed outcome.
            panic::catch_unwind(move || analyze(lines)).unwrap_or(Outcome::MalformedHtml)
        }
        Err(_) => Outcome::UrlConnectionError,
    };

    match format.as_str() {
        "json" => {
            let rendered =
                serde_json::to_string(&outcome).unwrap_or_else(|_| "null".to_string());
            println!("{}", rendered);
        }
        _ => println!("{}", outcome),
    }
}
