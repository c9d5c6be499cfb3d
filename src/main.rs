use clap::Parser;
use smn_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // A download can hang until the request timeout; let CTRL+C cut it short
        tokio::select! {
            result = commands::run(args) => result,
            Ok(()) = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(anyhow::anyhow!("Interrupted by user"))
            }
        }
    });

    match result {
        Ok(_summary) => {
            // JSON and summary have already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("SMN Processor - Argentine weather feeds as JSON");
    println!("===============================================");
    println!();
    println!("Download the current conditions and 5-day forecast reports published by");
    println!("the Servicio Meteorológico Nacional and print them as JSON.");
    println!();
    println!("USAGE:");
    println!("    smn-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    current     Current conditions for every locality, or one with --locality");
    println!("    forecast    5-day forecast for every locality, or one with --locality");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Current conditions in Buenos Aires:");
    println!("    smn-processor current --locality \"Buenos Aires\" --pretty");
    println!();
    println!("    # Forecast for one locality and day:");
    println!("    smn-processor forecast -l Cordoba -d 02-01-2020");
    println!();
    println!("    # Parse a report saved on disk (zipped or plain text):");
    println!("    smn-processor forecast --input pron5d.zip");
    println!();
    println!("For detailed help on any command, use:");
    println!("    smn-processor <COMMAND> --help");
}
