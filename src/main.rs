//! # chatvoice CLI
//!
//! Command-line interface for the chatvoice library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chatvoice::ChatvoiceError;
use chatvoice::cli::Args;
use chatvoice::core::JsonDumpSink;
use chatvoice::format::{OutputFormat, write_to_format};
use chatvoice::parser::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args.log_filter);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e.user_message());
        process::exit(1);
    }
}

fn init_tracing(log_filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: &Args) -> Result<(), ChatvoiceError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();

    println!("💬 chatvoice v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", format);
    if let Some(ref name) = args.participant {
        println!("👤 Person:  {}", name);
    }
    if let Some(ref dump) = args.dump {
        println!("🐛 Dump:    {}", dump);
    }
    println!();

    let mut parser = TranscriptParser::with_config(args.parser_config());
    if let Some(ref dump) = args.dump {
        parser = parser.with_sink(JsonDumpSink::new(dump));
    }

    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let result = parser.parse(Path::new(&args.input))?;
    let stats = result.stats();
    println!(
        "   Found {} messages from {} participants ({:.2}s)",
        result.total_messages(),
        result.sender_count(),
        parse_start.elapsed().as_secs_f64()
    );

    println!("💾 Writing {}...", format);
    let write_start = Instant::now();
    match args.participant {
        Some(ref name) => {
            let sample = result.style_sample(name, &args.selection_config())?;
            write_to_format(&sample, &output_path, format)?;
            info!(
                examples = sample.examples.len(),
                total = sample.total,
                "selection.written"
            );
            println!(
                "   {} of {} messages from {} ({:.2}s)",
                sample.examples.len(),
                sample.total,
                name,
                write_start.elapsed().as_secs_f64()
            );
        }
        None => {
            write_to_format(&result, &output_path, format)?;
            println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());
        }
    }

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    println!();
    println!("📊 Summary:");
    for (rank, participant) in result.participants().iter().enumerate() {
        println!(
            "   #{}  {} ({} messages)",
            rank + 1,
            participant.name,
            participant.count
        );
    }
    println!("   Lines:      {}", stats.lines);
    println!("   Headers:    {}", stats.headers);
    if stats.orphaned > 0 {
        println!("   Orphaned:   {} lines", stats.orphaned);
    }
    if stats.dropped_empty > 0 {
        println!("   Empty:      {} messages dropped", stats.dropped_empty);
    }

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
