//! docmark CLI - Word to Markdown conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use docmark::convert::default_destination;
use docmark::{ConvertReport, Error, ErrorKind, JsonFormat, RenderOptions};

/// Source converted when no arguments are given.
const DEFAULT_SOURCE: &str = "Assets/website.docx";
const DEFAULT_DESTINATION: &str = "Assets/website.md";

#[derive(Parser)]
#[command(name = "docmark")]
#[command(version)]
#[command(about = "Convert Word (.docx) documents to Markdown", long_about = None)]
struct Cli {
    /// Input .docx file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output Markdown file (defaults to FILE with a .md extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump the parsed document model as JSON
    Json {
        /// Input .docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input .docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            let (source, dest) = match cli.input {
                Some(input) => {
                    let dest = cli.output.unwrap_or_else(|| default_destination(&input));
                    (input, dest)
                }
                None => (
                    PathBuf::from(DEFAULT_SOURCE),
                    PathBuf::from(DEFAULT_DESTINATION),
                ),
            };
            cmd_convert(&source, &dest);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Convert and print the outcome. Failures are reported, not signalled.
fn cmd_convert(source: &Path, dest: &Path) {
    let result = docmark::convert(source, dest);
    println!("{}", status_line(source, dest, &result));
}

/// Human-readable line describing a conversion outcome.
fn status_line(source: &Path, dest: &Path, result: &docmark::Result<ConvertReport>) -> String {
    match result {
        Ok(_) => format!(
            "Successfully converted '{}' to '{}'",
            source.display(),
            dest.display()
        ),
        Err(e) => match e.kind() {
            ErrorKind::SourceNotFound => {
                format!("Error: File '{}' not found.", source.display())
            }
            ErrorKind::Parse => format!("Error opening .docx file: {}", e),
            ErrorKind::Write => {
                let detail = match e {
                    Error::Write { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                format!("Error writing to .md file: {}", detail)
            }
        },
    }
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = docmark::to_json(input, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut parser = docmark::DocxParser::open(input)?;
    let format = parser.format();
    let main_part = parser.main_part().to_string();
    let doc = parser.parse()?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {} ({})", "Format".bold(), format, main_part);
    println!("{}: {}", "Paragraphs".bold(), doc.paragraph_count());
    println!("{}: {}", "Tables".bold(), doc.table_count());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = doc.plain_text();
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());
    println!("{}: {}", "Characters".bold(), text.chars().count());

    let rendered = docmark::render::to_markdown_with_stats(&doc, &RenderOptions::default())?;
    let stats = &rendered.stats;
    println!();
    println!("{}", "Markdown".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Plain paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Blank paragraphs".bold(), stats.blank_count);
    println!("{}: {}", "Total paragraphs".bold(), stats.total_paragraphs());
    println!("{}: {}", "Table rows".bold(), stats.table_row_count);
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Bytes".bold(), rendered.content_len());

    let usage = doc.style_usage();
    if !usage.is_empty() {
        println!();
        println!("{}", "Styles".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for (style, count) in usage {
            let name = if style.is_empty() { "(none)" } else { style };
            println!("{}: {}", name.bold(), count);
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docmark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Word to Markdown conversion tool");
    println!();
    println!("License: MIT");
}
