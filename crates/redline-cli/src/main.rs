use anyhow::{Context, Result};
use redline_config::Config;
use redline_engine::{Pipeline, io, parse_document};
use regex::Regex;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::{env, process};
use tracing::info;

fn main() -> Result<()> {
    // Initialize structured logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Determine input/output paths from CLI args, falling back to the config
    // file, falling back to built-in defaults
    let args: Vec<String> = env::args().collect();
    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let (input_path, output_path) = match args.len() {
        1 => (config.input_path.clone(), config.output_path.clone()),
        2 => (PathBuf::from(&args[1]), config.output_path.clone()),
        3 => (PathBuf::from(&args[1]), PathBuf::from(&args[2])),
        _ => {
            eprintln!("Usage: {} [input-file [output-file]]", args[0]);
            process::exit(1);
        }
    };

    info!("text processing started");

    let text = io::read_file(&input_path).with_context(|| {
        format!(
            "cannot read input file '{}'; make sure it exists",
            input_path.display()
        )
    })?;

    print_text("Original text:", &text);

    let mut document = parse_document(&text);

    let start_delimiter = prompt_delimiter("start", config.start_delimiter)?;
    let end_delimiter = prompt_delimiter("end", config.end_delimiter)?;

    let mut pipeline = Pipeline::standard(start_delimiter, end_delimiter);
    pipeline.process(&mut document);

    let processed = document.render_text();
    print_text("Processed text:", &processed);

    io::write_file(&output_path, &processed)
        .with_context(|| format!("cannot write output file '{}'", output_path.display()))?;

    print_statistics(&text, &processed, &input_path, &output_path);

    info!("text processing finished");
    Ok(())
}

/// Ask for one delimiter character; empty input selects the default.
fn prompt_delimiter(which: &str, default: char) -> Result<char> {
    print!("Enter the {which} delimiter for span removal (empty for '{default}'): ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    match line.trim().chars().next() {
        Some(c) => Ok(c),
        None => {
            println!("Using default delimiter: '{default}'");
            Ok(default)
        }
    }
}

fn print_text(title: &str, text: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(60));
    println!("{text}");
    println!("{}", "=".repeat(60));
}

fn print_statistics(original: &str, processed: &str, input_path: &Path, output_path: &Path) {
    let original_len = original.chars().count();
    let processed_len = processed.chars().count();

    println!("\n=== Processing statistics ===");
    println!("Input file: {}", input_path.display());
    println!("Output file: {}", output_path.display());
    println!("Original length: {original_len} characters");
    println!("Processed length: {processed_len} characters");
    println!(
        "Characters removed: {}",
        original_len as i64 - processed_len as i64
    );
    println!(
        "Paragraphs original/processed: {}/{}",
        count_paragraphs(original),
        count_paragraphs(processed)
    );
    println!(
        "Sentences original/processed: {}/{}",
        count_sentences(original),
        count_sentences(processed)
    );
    println!(
        "Words original/processed: {}/{}",
        count_words(original),
        count_words(processed)
    );
    println!("{}", "=".repeat(50));
}

// The counts below are simple text splits over the raw strings, independent
// of the document tree.

fn count_paragraphs(text: &str) -> usize {
    drop_trailing_empties(text.split("\n\n").collect())
}

fn count_sentences(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    static TERMINATORS: OnceLock<Regex> = OnceLock::new();
    let terminators = TERMINATORS
        .get_or_init(|| Regex::new(r"[.!?]+\s*").expect("sentence terminator regex is valid"));
    drop_trailing_empties(terminators.split(text).collect())
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn drop_trailing_empties(mut parts: Vec<&str>) -> usize {
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts.len()
}
