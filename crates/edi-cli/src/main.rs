//! # edi-cli
//!
//! CLI for assembling typed documents from tokenized EDIFACT messages.
//!
//! Input files carry one tokenized `Message` as JSON, as produced by the
//! upstream tokenizer; the `parse` command dispatches it and emits the
//! typed document as JSON.

use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use edi_message::Message;

#[derive(Parser)]
#[command(name = "edi-doc")]
#[command(about = "EDI Document Engine CLI")]
#[command(version)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Assemble the typed document for a tokenized message
    Parse {
        /// Input file path (tokenized message as JSON)
        input: String,

        /// Output file path; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show the declared type, reference, and segment tag counts of a
    /// tokenized message
    Inspect {
        /// Input file path (tokenized message as JSON)
        input: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            output,
            pretty,
        } => parse_command(&input, output.as_deref(), pretty),
        Commands::Inspect { input } => inspect_command(&input),
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("ERROR: {error:#}");
            ExitCode::from(1)
        }
    }
}

fn read_message(input: &str) -> anyhow::Result<Message> {
    let data =
        fs::read_to_string(input).with_context(|| format!("reading input file '{input}'"))?;
    serde_json::from_str(&data)
        .with_context(|| format!("decoding tokenized message from '{input}'"))
}

fn parse_command(input: &str, output: Option<&str>, pretty: bool) -> anyhow::Result<ExitCode> {
    let message = read_message(input)?;
    tracing::info!(
        message_type = %message.header.message_type,
        reference = %message.header.reference,
        "assembling document"
    );

    let document = match edi_assembler::assemble_document(&message) {
        Ok(document) => document,
        Err(error) => {
            eprintln!("ERROR: {error}");
            return Ok(ExitCode::from(2));
        }
    };

    let mut json = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    json.push('\n');

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing output file '{path}'"))?;
            tracing::info!(path, "document written");
        }
        None => print!("{json}"),
    }

    Ok(ExitCode::SUCCESS)
}

fn inspect_command(input: &str) -> anyhow::Result<ExitCode> {
    let message = read_message(input)?;

    println!("type:      {}", message.header.message_type);
    println!("reference: {}", message.header.reference);
    println!("segments:  {}", message.segments.len());

    // Tag counts in order of first appearance.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for segment in &message.segments {
        match counts.iter_mut().find(|(tag, _)| *tag == segment.id) {
            Some((_, count)) => *count += 1,
            None => counts.push((segment.id.as_str(), 1)),
        }
    }
    for (tag, count) in counts {
        println!("  {tag} x{count}");
    }

    Ok(ExitCode::SUCCESS)
}
