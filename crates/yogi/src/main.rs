//! yogi - breathe in, indent out.

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yogi::diagnose;
use yogi::normalize::{self, Alignment};

#[derive(Parser)]
#[command(name = "yogi")]
#[command(about = "Realign a YAML file into block style and point out sloppy whitespace")]
#[command(version)]
struct Cli {
    /// The YAML file to align, rewritten in place
    file: PathBuf,
}

fn main() -> Result<()> {
    // Logging goes to stderr; stdout carries the report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yogi=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if err.kind() == ErrorKind::DisplayHelp
                || err.kind() == ErrorKind::DisplayVersion =>
        {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            println!("Usage: yogi <file.yaml>\n");
            println!("Remember: A centered YAML file is a happy YAML file");
            process::exit(1);
        }
    };

    if !cli.file.exists() {
        println!(
            "File '{}' not found - perhaps it's meditating elsewhere?",
            cli.file.display()
        );
        process::exit(1);
    }

    println!(
        "\n🧘 {}",
        format!("Diagnosing '{}'...", cli.file.display()).bold()
    );
    let issues = diagnose::diagnose_file(&cli.file)?;

    if issues.is_empty() {
        println!("  {}", "Already in perfect balance!".green());
    } else {
        println!("\nFound these alignment issues:");
        for issue in &issues {
            println!("  {} {}", "•".yellow(), issue);
        }
    }

    println!("\n🧘 {}", "Performing YAML yoga...".bold());
    match normalize::align_file(&cli.file)? {
        Alignment::Aligned => {
            println!(
                "🧘 '{}' is now aligned with the universe",
                cli.file.display()
            );
            println!("\n✨ Your YAML has found inner peace ✨");
        }
        Alignment::Injured { line, problem } => {
            println!("💥 {}", format!("Yoga injury at line {line}: {problem}").red());
            // Reported as a failure, but the exit status stays 0.
            println!("\n😔 Some poses need more practice");
        }
    }

    Ok(())
}
