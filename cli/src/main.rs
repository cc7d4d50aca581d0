//! pdfsift CLI - section and keyword mining over layout output

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfsift::{
    parse_file, to_json, Analysis, ContextWindow, ExtractOptions, HeadingThreshold, JsonFormat,
    KeywordList, Pipeline, SectionExtractor,
};

#[derive(Parser)]
#[command(name = "pdfsift")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Mine sections and keyword contexts from PDF layout output",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze layout files into JSON records
    Analyze {
        /// Input layout files (JSON array or JSON Lines)
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (stdout for a single input if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// File with one keyword per line
        #[arg(long, value_name = "FILE", env = "PDFSIFT_KEYWORDS_FILE")]
        keywords_file: Option<PathBuf>,

        /// File with one section heading keyword per line
        #[arg(long, value_name = "FILE", env = "PDFSIFT_SECTIONS_FILE")]
        sections_file: Option<PathBuf>,

        /// Keyword context window (e.g., "2", "lines:2", "chars:200")
        #[arg(long, default_value = "lines:2", env = "PDFSIFT_CONTEXT")]
        context: ContextWindow,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Use substring section boundaries
        #[arg(long)]
        legacy: bool,

        /// Only write records with at least one keyword hit
        #[arg(long)]
        only_matches: bool,
    },

    /// Print one section of a layout file
    Section {
        /// Input layout file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Heading keyword
        #[arg(short, long)]
        keyword: String,

        /// Use substring section boundaries
        #[arg(long)]
        legacy: bool,

        /// Fixed heading score threshold (modal line score if not specified)
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<i32>,
    },

    /// Print keyword contexts of a layout file as JSON
    Keywords {
        /// Input layout file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Keyword to look for (repeatable)
        #[arg(short, long = "keyword", value_name = "KEYWORD")]
        keywords: Vec<String>,

        /// File with one keyword per line
        #[arg(long, value_name = "FILE", env = "PDFSIFT_KEYWORDS_FILE")]
        keywords_file: Option<PathBuf>,

        /// Keyword context window (e.g., "2", "lines:2", "chars:200")
        #[arg(long, default_value = "lines:2", env = "PDFSIFT_CONTEXT")]
        context: ContextWindow,
    },

    /// Show document information
    Info {
        /// Input layout file
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
        Some(Commands::Analyze {
            inputs,
            output,
            keywords_file,
            sections_file,
            context,
            compact,
            legacy,
            only_matches,
        }) => {
            let mut pipeline = Pipeline::new()
                .with_keywords(load_keywords(keywords_file.as_deref()))
                .with_section_keywords(load_keywords(sections_file.as_deref()))
                .with_context_window(context);
            if legacy {
                pipeline = pipeline.legacy();
            }
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            cmd_analyze(&pipeline, &inputs, output.as_deref(), format, only_matches)
        }
        Some(Commands::Section {
            input,
            keyword,
            legacy,
            threshold,
        }) => cmd_section(&input, &keyword, legacy, threshold),
        Some(Commands::Keywords {
            input,
            keywords,
            keywords_file,
            context,
        }) => {
            let mut list = load_keywords(keywords_file.as_deref());
            for keyword in &keywords {
                list.push(keyword);
            }
            cmd_keywords(&input, list, context)
        }
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: pdfsift <COMMAND> <FILE>".yellow());
            println!("       pdfsift --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Missing or unreadable keyword files mean no keywords.
fn load_keywords(path: Option<&Path>) -> KeywordList {
    match path {
        Some(path) => {
            let list = KeywordList::from_file_or_empty(path);
            log::debug!("Loaded {} keywords from {}", list.len(), path.display());
            list
        }
        None => KeywordList::new(),
    }
}

/// `<dir>/<stem>.json` for an input file.
fn output_path(input: &Path, dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    dir.join(format!("{}.json", stem))
}

fn cmd_analyze(
    pipeline: &Pipeline,
    inputs: &[PathBuf],
    output: Option<&Path>,
    format: JsonFormat,
    only_matches: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let ([input], None) = (inputs, output) {
        let analysis = pipeline.analyze_file(input)?;
        println!("{}", to_json(&analysis, format)?);
        return Ok(());
    }

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let results = pipeline.analyze_files_with(inputs, |input, result| {
        if let Err(e) = result {
            pb.println(format!("{} {}: {}", "Failed".red(), input.display(), e));
        }
        pb.set_message(input.display().to_string());
        pb.inc(1);
    });
    pb.finish_with_message("Done!");

    let summary = write_records(&results, &output_dir, format, only_matches)?;
    println!(
        "\n{} {} written, {} without keyword hits, {} failed",
        "Done!".green().bold(),
        summary.written,
        summary.skipped,
        summary.failed
    );
    println!("{} {}", "Output:".bold(), output_dir.display());

    Ok(())
}

/// Counts for one `analyze` batch.
#[derive(Debug, Default, PartialEq, Eq)]
struct BatchSummary {
    written: usize,
    skipped: usize,
    failed: usize,
}

/// Write one JSON record per successful analysis into `dir`.
fn write_records(
    results: &[(PathBuf, pdfsift::Result<Analysis>)],
    dir: &Path,
    format: JsonFormat,
    only_matches: bool,
) -> Result<BatchSummary, Box<dyn std::error::Error>> {
    let mut summary = BatchSummary::default();
    for (input, result) in results {
        match result {
            Ok(analysis) if only_matches && !analysis.has_keywords() => {
                log::debug!("No keyword hits in {}", input.display());
                summary.skipped += 1;
            }
            Ok(analysis) => {
                let path = output_path(input, dir);
                fs::write(&path, to_json(analysis, format)?)?;
                log::debug!("Wrote {}", path.display());
                summary.written += 1;
            }
            Err(_) => summary.failed += 1,
        }
    }
    Ok(summary)
}

fn cmd_section(
    input: &Path,
    keyword: &str,
    legacy: bool,
    threshold: Option<i32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let mut options = ExtractOptions::new();
    if let Some(n) = threshold {
        options = options.with_heading_threshold(HeadingThreshold::Fixed(n));
    }
    if legacy {
        options = options.legacy();
    }

    let section = SectionExtractor::with_options(options).extract(&doc, keyword);
    if section.is_empty() {
        eprintln!("{} {:?}", "No section found for".yellow(), keyword);
    } else {
        println!("{}", section);
    }

    Ok(())
}

fn cmd_keywords(
    input: &Path,
    keywords: KeywordList,
    context: ContextWindow,
) -> Result<(), Box<dyn std::error::Error>> {
    if keywords.is_empty() {
        return Err("no keywords given (use -k or --keywords-file)".into());
    }

    let doc = parse_file(input)?;
    let hits = pdfsift::mine_keywords(&doc, keywords.as_slice(), context);
    println!("{}", to_json(&hits, JsonFormat::Pretty)?);

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let extractor = SectionExtractor::new();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Lines".bold(), doc.line_count());
    println!(
        "{}: {}",
        "Bold lines".bold(),
        if doc.has_bold_heading() { "Yes" } else { "No" }
    );
    match doc.body_score() {
        Some(score) => println!("{}: {}", "Body score".bold(), score),
        None => println!("{}: -", "Body score".bold()),
    }

    let headings = extractor.heading_positions(&doc);
    println!();
    println!("{} ({})", "Headings".cyan().bold(), headings.len());
    println!("{}", "─".repeat(40).dimmed());
    for pos in headings {
        if let Some(line) = doc.line_at(pos) {
            println!(
                "  {} {:>4}  {}",
                pos.to_string().dimmed(),
                line.score(),
                line.text()
            );
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfsift".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Section and keyword-context mining tool");
    println!();
    println!("License: MIT");
}
