//! Serenity CLI - Command-line interface for therapeutic audio generation
//!
//! This binary validates synthesis requests and turns them into WAV clips
//! with metadata sidecars, one at a time or a directory at a time.

mod cli_args;

use std::process::ExitCode;

use clap::Parser;
use serenity_cli::{commands, logging};

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            request,
            out_root,
            config,
            seed,
            json,
        } => commands::generate::run(
            &request,
            out_root.as_deref(),
            config.as_deref(),
            seed,
            json,
        ),
        Commands::Validate {
            request,
            config,
            json,
        } => commands::validate::run(&request, config.as_deref(), json),
        Commands::Batch {
            dir,
            out_root,
            config,
            seed,
            jobs,
            timeout_secs,
            json,
        } => commands::batch::run(
            &dir,
            out_root.as_deref(),
            config.as_deref(),
            seed,
            jobs,
            timeout_secs,
            json,
        ),
        Commands::Profiles { json } => commands::profiles::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(commands::EXIT_REQUEST_ERROR)
        }
    }
}
