use clap::Parser;
use colored::*;
use firewatch_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Wrap for chained context printing, then exit with error code
            let report = anyhow::Error::from(error);
            eprintln!("{} {:#}", "Error:".red().bold(), report);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Firewatch Processor - Gyeongbuk Dashboard Feed Normalizer");
    println!("=========================================================");
    println!();
    println!("Normalize the saved upstream payloads behind the firewatch dashboard");
    println!("into typed records: surface weather reports, hotspot CSV batches, and");
    println!("education-facility exports.");
    println!();
    println!("USAGE:");
    println!("    firewatch-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    weather         Parse a saved KMA surface weather report");
    println!("    hotspots        Parse a saved NASA FIRMS hotspot CSV batch");
    println!("    institutions    Normalize a persisted education-facility export");
    println!("    stations        Report on the built-in station registry");
    println!("    help            Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a saved two-line surface report:");
    println!("    firewatch-processor weather report.txt");
    println!();
    println!("    # Select the 2024 row from a yearly summary report, as JSON:");
    println!("    firewatch-processor weather summary.csv --summary --year 2024 --format json");
    println!();
    println!("    # Parse a hotspot batch (falls back to a marker if unreadable):");
    println!("    firewatch-processor hotspots firms_kor.csv");
    println!();
    println!("    # Normalize a facility export, bypassing the snapshot cache:");
    println!("    firewatch-processor institutions schools.json --no-cache");
    println!();
    println!("For detailed help on any command, use:");
    println!("    firewatch-processor <COMMAND> --help");
}
