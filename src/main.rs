//! # chatsift CLI
//!
//! Command-line interface for the chatsift library.

use std::fs;
use std::process;
use std::time::{Duration, Instant};

use clap::Parser as ClapParser;

use chatsift::cli::{Cli, Command, ExportArgs, OutputArgs, ScanArgs};
use chatsift::config::SearchConfig;
use chatsift::core::output::{report_from_json, write_highlighted_json};
use chatsift::core::{SearchStats, matches_by_date};
use chatsift::format::write_to_format;
use chatsift::parser::TranscriptParser;
use chatsift::search::{KeywordReport, SearchEngine, highlight, keywords_from_lines};
use chatsift::{ChatsiftError, Message, logging};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatsiftError> {
    let cli = <Cli as ClapParser>::parse();
    logging::init(cli.verbose);

    println!("🔎 chatsift v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    match cli.command {
        Command::Scan(args) => scan(&args),
        Command::Export(args) => export(&args),
    }
}

fn scan(args: &ScanArgs) -> Result<(), ChatsiftError> {
    let total_start = Instant::now();
    let keywords = collect_keywords(args)?;
    let config = SearchConfig::new()
        .with_fuzzy_threshold(args.fuzzy)?
        .with_context(args.context);

    let output_path = args.output.resolved_path();
    let format = args.output.resolved_format();

    println!("📂 Input:    {}", args.input.display());
    println!("🔑 Keywords: {}", keywords.len());
    if config.is_fuzzy() {
        println!("🌫️  Fuzzy:    {:.0}%", config.fuzzy_threshold * 100.0);
    }
    println!("💾 Output:   {}", output_path.display());
    println!("📄 Format:   {}", format);
    if args.streaming {
        println!("🌊 Mode:     Streaming");
    }
    println!();

    // Step 1: Parse
    let (messages, parse_time) = parse_input(args)?;
    println!(
        "   Found {} messages ({:.2}s)",
        messages.len(),
        parse_time.as_secs_f64()
    );

    // Step 2: Search
    println!("🔍 Searching...");
    let search_start = Instant::now();
    let report = SearchEngine::new(config).search(&messages, &keywords);
    let stats = SearchStats::from_report(messages.len(), &report);
    println!(
        "   {} matches ({:.2}s)",
        stats.matches,
        search_start.elapsed().as_secs_f64()
    );

    // Step 3: Write
    write_report(&report, &args.output)?;

    if let Some(path) = &args.highlighted {
        let lines = highlight(&messages, &keywords);
        write_highlighted_json(&lines, path)?;
        println!("🖍️  Highlighted transcript saved to {}", path.display());
    }

    if args.timeline {
        println!();
        println!("📅 Timeline:");
        for day in matches_by_date(&report) {
            println!("   {:<10}  {}", day.date, day.count);
        }
    }

    let total_time = total_start.elapsed();

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Messages:  {}", stats.messages);
    println!("   Keywords:  {}", stats.keywords);
    println!(
        "   Matches:   {} ({} exact, {} fuzzy)",
        stats.matches, stats.exact, stats.fuzzy
    );
    for entry in &report {
        println!("   {:>6}  {}", entry.count, entry.keyword);
    }

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let msgs_per_sec = messages.len() as f64 / total_time.as_secs_f64().max(f64::EPSILON);
    println!("   Throughput:  {:.0} messages/sec", msgs_per_sec);

    Ok(())
}

fn export(args: &ExportArgs) -> Result<(), ChatsiftError> {
    println!("📂 Input:    {}", args.input.display());
    println!("💾 Output:   {}", args.output.resolved_path().display());
    println!("📄 Format:   {}", args.output.resolved_format());
    println!();

    let payload = fs::read_to_string(&args.input)?;
    let report = report_from_json(&payload)?;
    let stats = SearchStats::from_report(0, &report);
    println!(
        "   Loaded {} keywords, {} matches",
        stats.keywords, stats.matches
    );

    write_report(&report, &args.output)
}

/// Keywords from `-k` flags followed by the keywords file, if any.
///
/// An empty list is only accepted when a highlighted transcript is
/// requested, which then renders the plain transcript.
fn collect_keywords(args: &ScanArgs) -> Result<Vec<String>, ChatsiftError> {
    let mut keywords: Vec<String> = args
        .keywords
        .iter()
        .map(|kw| kw.trim())
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect();

    if let Some(path) = &args.keywords_file {
        let raw = fs::read_to_string(path)?;
        keywords.extend(keywords_from_lines(&raw));
    }

    if keywords.is_empty() && args.highlighted.is_none() {
        return Err(ChatsiftError::missing_input(
            "keywords (pass -k KEYWORD or --keywords-file FILE)",
        ));
    }
    Ok(keywords)
}

fn parse_input(args: &ScanArgs) -> Result<(Vec<Message>, Duration), ChatsiftError> {
    let parser = TranscriptParser::new();
    let start = Instant::now();

    let messages = if args.streaming {
        println!("⏳ Streaming transcript...");
        parser
            .stream_file(&args.input)?
            .collect::<Result<Vec<_>, _>>()?
    } else {
        println!("⏳ Parsing transcript...");
        parser.parse_file(&args.input)?
    };

    Ok((messages, start.elapsed()))
}

fn write_report(report: &[KeywordReport], output: &OutputArgs) -> Result<(), ChatsiftError> {
    let path = output.resolved_path();
    let format = output.resolved_format();

    println!("💾 Writing {}...", format);
    let write_start = Instant::now();
    write_to_format(report, &path, format, &output.output_config())?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Report saved to {}", path.display());
    Ok(())
}
