// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Warkat: police permit and loss-report letters, typeset to PDF.
//
// Entry point. Initialises logging, parses arguments and dispatches to the
// commands.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "warkat")]
#[command(about = "Typeset Indonesian police permit and loss-report letters to PDF")]
#[command(version)]
struct Cli {
    /// Engine configuration (JSON); defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Letterhead logo (PNG or JPEG)
    #[arg(long, global = true)]
    logo: Option<PathBuf>,

    /// Output directory
    #[arg(long, global = true, default_value = ".")]
    out: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Crowd-event permit (SURAT IZIN), two pages
    Permit(commands::LetterArgs),
    /// Loss-report acknowledgement (STPLK), one page
    LossReport(commands::LetterArgs),
    /// Print page count and paper size of an existing PDF
    Inspect {
        /// PDF file to read
        pdf: PathBuf,
    },
    /// Write the default configuration as JSON
    InitConfig {
        /// Destination file
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let options = commands::Options {
        config: cli.config,
        logo: cli.logo,
        out: cli.out,
    };

    let result = match cli.command {
        Command::Permit(args) => commands::permit(&options, &args).map(|r| r.print()),
        Command::LossReport(args) => commands::loss_report(&options, &args).map(|r| r.print()),
        Command::Inspect { pdf } => commands::inspect(&pdf).map(|summary| println!("{summary}")),
        Command::InitConfig { path } => commands::init_config(&path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "Command failed");
            eprintln!("warkat: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_options_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "warkat",
            "loss-report",
            "--record",
            "r.json",
            "--parties",
            "p.json",
            "--out",
            "letters",
        ])
        .unwrap();
        assert_eq!(cli.out, PathBuf::from("letters"));
        assert!(matches!(cli.command, Command::LossReport(_)));
    }
}
