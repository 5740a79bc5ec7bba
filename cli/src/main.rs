//! pagedhtml CLI - plain text to paginated HTML

mod fetch;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagedhtml::{Document, JsonFormat, NodeKind, ParseOptions, RenderOptions, TextParser};

use fetch::Source;

const DEFAULT_OUTPUT: &str = "output.html";

#[derive(Parser)]
#[command(name = "pagedhtml")]
#[command(version)]
#[command(about = "Convert plain text into paginated HTML", long_about = None)]
struct Cli {
    /// Input text file, `-` for stdin, or an http(s) URL
    #[arg(value_name = "SOURCE")]
    input: Option<String>,

    /// Output HTML file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert text to paginated HTML
    Convert {
        /// Input text file, `-` for stdin, or an http(s) URL
        #[arg(value_name = "SOURCE")]
        input: String,

        /// Output file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Content elements per page
        #[arg(long, value_name = "N", env = "PAGEDHTML_PER_PAGE")]
        #[arg(default_value_t = pagedhtml::DEFAULT_ELEMENTS_PER_PAGE)]
        per_page: usize,

        /// Fail on malformed image directives instead of dropping them
        #[arg(long)]
        strict: bool,

        /// Emit only the paged fragment, without <html>/<head>/<body>
        #[arg(long)]
        fragment: bool,

        /// Escape HTML special characters in content
        #[arg(long)]
        escape: bool,

        /// Document title (defaults to the first major heading)
        #[arg(long)]
        title: Option<String>,
    },

    /// Dump the paginated document model as JSON
    Json {
        /// Input text file, `-` for stdin, or an http(s) URL
        #[arg(value_name = "SOURCE")]
        input: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Content elements per page
        #[arg(long, value_name = "N", env = "PAGEDHTML_PER_PAGE")]
        #[arg(default_value_t = pagedhtml::DEFAULT_ELEMENTS_PER_PAGE)]
        per_page: usize,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input text file, `-` for stdin, or an http(s) URL
        #[arg(value_name = "SOURCE")]
        input: String,

        /// Content elements per page
        #[arg(long, value_name = "N", env = "PAGEDHTML_PER_PAGE")]
        #[arg(default_value_t = pagedhtml::DEFAULT_ELEMENTS_PER_PAGE)]
        per_page: usize,
    },

    /// Show version information
    Version,
}

struct ConvertArgs {
    per_page: usize,
    strict: bool,
    fragment: bool,
    escape: bool,
    title: Option<String>,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            per_page: pagedhtml::DEFAULT_ELEMENTS_PER_PAGE,
            strict: false,
            fragment: false,
            escape: false,
            title: None,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            per_page,
            strict,
            fragment,
            escape,
            title,
        }) => cmd_convert(
            &input,
            &output,
            ConvertArgs {
                per_page,
                strict,
                fragment,
                escape,
                title,
            },
        ),
        Some(Commands::Json {
            input,
            output,
            per_page,
            compact,
        }) => cmd_json(&input, output.as_deref(), per_page, compact),
        Some(Commands::Info { input, per_page }) => cmd_info(&input, per_page),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                let output = cli.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
                cmd_convert(&input, &output, ConvertArgs::default())
            } else {
                println!("{}", "Usage: pagedhtml <SOURCE> [OUTPUT]".yellow());
                println!("       pagedhtml --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load(source: &Source, options: ParseOptions) -> pagedhtml::Result<Document> {
    let data = source.read()?;
    TextParser::from_bytes_with_options(&data, options.with_source(source.label()))?.parse()
}

fn cmd_convert(
    input: &str,
    output: &Path,
    args: ConvertArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = Source::parse(input);

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading source...");
    let data = source.read()?;
    pb.inc(1);

    pb.set_message("Parsing text...");
    let mut options = ParseOptions::new()
        .with_page_size(args.per_page)
        .with_source(source.label());
    if args.strict {
        options = options.strict();
    }
    let doc = TextParser::from_bytes_with_options(&data, options)?.parse()?;
    pb.inc(1);

    pb.set_message("Rendering HTML...");
    let mut render_options = RenderOptions::new()
        .with_standalone(!args.fragment)
        .with_escaping(args.escape);
    if let Some(title) = args.title {
        render_options = render_options.with_title(title);
    }
    let result = pagedhtml::render::to_html_with_stats(&doc, &render_options)?;
    fs::write(output, &result.content)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!(
        "{} {} ({} pages)",
        "Saved to".green(),
        output.display(),
        doc.page_count()
    );
    println!("{}: {} bytes", "HTML size".bold(), result.content_len());
    println!(
        "{}: {} headings, {} quotes, {} images",
        "Rendered".bold(),
        result.stats.heading_major_count + result.stats.heading_minor_count,
        result.stats.quote_count,
        result.stats.image_count
    );

    if doc.metadata.dropped_directives > 0 {
        println!(
            "{} {} image directive(s) dropped",
            "Warning:".yellow().bold(),
            doc.metadata.dropped_directives
        );
    }

    Ok(())
}

fn cmd_json(
    input: &str,
    output: Option<&Path>,
    per_page: usize,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = Source::parse(input);
    let doc = load(&source, ParseOptions::new().with_page_size(per_page))?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = pagedhtml::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &str, per_page: usize) -> Result<(), Box<dyn std::error::Error>> {
    let source = Source::parse(input);
    let doc = load(&source, ParseOptions::new().with_page_size(per_page))?;
    let meta = &doc.metadata;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Source".bold(), source.label());
    if let Some(ref title) = meta.title {
        println!("{}: {}", "Title".bold(), title);
    }
    println!("{}: {}", "Lines".bold(), meta.line_count);
    println!("{}: {}", "Pages".bold(), meta.page_count);
    println!("{}: {}", "Per page".bold(), meta.elements_per_page);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let count = |kind: NodeKind| {
        doc.pages
            .iter()
            .flat_map(|page| page.body().iter())
            .filter(|node| node.kind() == kind)
            .count()
    };

    println!("{}: {}", "Major headings".bold(), count(NodeKind::HeadingMajor));
    println!("{}: {}", "Minor headings".bold(), count(NodeKind::HeadingMinor));
    println!("{}: {}", "Quoted blocks".bold(), count(NodeKind::QuotedBlock));
    println!("{}: {}", "Images".bold(), count(NodeKind::Image));
    println!("{}: {}", "Inserted".bold(), doc.inserted_count());
    println!("{}: {}", "Directives".bold(), meta.directive_count);
    println!("{}: {}", "Dropped".bold(), meta.dropped_directives);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagedhtml".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Plain text to paginated HTML converter");
    println!();
    println!("License: MIT");
}
