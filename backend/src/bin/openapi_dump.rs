//! Print the OpenAPI document for both weather services.

use std::io::{self, Write};

use backend::doc::ApiDoc;
use clap::{Parser, ValueEnum};
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the OpenAPI document")]
struct Cli {
    /// Output encoding.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let rendered = match cli.format {
        Format::Json => doc.to_pretty_json().map_err(io::Error::other)?,
        Format::Yaml => doc.to_yaml().map_err(io::Error::other)?,
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")
}
