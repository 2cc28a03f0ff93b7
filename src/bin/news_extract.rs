//! Command-line article extraction.
//!
//! Reads an HTML page from a file (or stdin) and prints the extracted title,
//! publication date and body, either as a plain report or as JSON.
//!
//! ```text
//! news-extract page.html --url https://n.news.naver.com/article/001/0001
//! curl -s "$URL" | news-extract --url "$URL" --json
//! news-extract page.html --hint "div#article-body, div.byline"
//! ```

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use news_extract::{Extractor, Options, SelectorChain};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract title, body and date from a news article page")]
struct Cli {
    /// HTML file to read; stdin when omitted or `-`
    input: Option<PathBuf>,

    /// URL the page was fetched from (selects the site hint)
    #[arg(short, long, default_value = "")]
    url: String,

    /// Comma-joined CSS selectors for the article body, overriding the site hint
    #[arg(long)]
    hint: Option<SelectorChain>,

    /// HTTP Content-Type header value, used for charset detection
    #[arg(long)]
    content_type: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Use English placeholders for a missing title or body
    #[arg(long)]
    english: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    url: &'a str,
    title: &'a str,
    body: &'a str,
    date: Option<&'a str>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(io::stderr)
        .init();

    let args = Cli::parse();
    debug!(?args.input, url = %args.url, "Parsed CLI arguments");

    let bytes = read_input(args.input.as_ref())?;
    let options = if args.english { Options::english() } else { Options::default() };
    let extractor = Extractor::new(options);

    let result = extractor.extract_bytes(
        &bytes,
        args.content_type.as_deref(),
        &args.url,
        args.hint.as_ref(),
    );
    info!(
        url = %args.url,
        body_source = result.body_source.map(|s| s.as_str()),
        date = result.date.as_deref(),
        "Extracted article"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let output = Output {
            url: &args.url,
            title: &result.title,
            body: &result.body,
            date: result.date.as_deref(),
        };
        serde_json::to_writer_pretty(&mut out, &output)?;
        writeln!(out)?;
    } else {
        writeln!(out, "TITLE: {}", result.title)?;
        writeln!(out, "DATE:  {}", result.date.as_deref().unwrap_or("-"))?;
        writeln!(out, "BODY:")?;
        writeln!(out, "{}", result.body)?;
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> news_extract::Result<Vec<u8>> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read(path)?),
        _ => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}
