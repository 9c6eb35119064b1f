//! Print the OpenAPI document as JSON, or write it to a file.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use user_service::ApiDoc;
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Emit the user service OpenAPI document",
    version
)]
struct CliArgs {
    /// Write to this file instead of stdout.
    #[arg(long, value_name = "path")]
    output: Option<PathBuf>,
    /// Emit single-line JSON.
    #[arg(long)]
    compact: bool,
}

fn render(compact: bool) -> io::Result<String> {
    let doc = ApiDoc::openapi();
    let rendered = if compact {
        doc.to_json()
    } else {
        doc.to_pretty_json()
    };
    rendered.map_err(io::Error::other)
}

fn main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let json = render(args.compact)?;
    match args.output {
        Some(path) => std::fs::write(&path, format!("{json}\n")),
        None => writeln!(io::stdout().lock(), "{json}"),
    }
}
