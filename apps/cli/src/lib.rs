pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod state;

use std::fs;

use clap::Parser;
use dialoguer::Confirm;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::state::Session;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.format, cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    execute(cli.command, &config)?;
    Ok(())
}

/// Run one command against the configured output format.
pub fn execute(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Match { sets } => {
            let session = Session::load(&sets.candidates, &sets.reference)?;
            print_results(&session, config.format)
        }
        Commands::Stats { sets } => {
            let session = Session::load(&sets.candidates, &sets.reference)?;
            println!("{}", report::render_statistics(&session.statistics(), config.format)?);
            Ok(())
        }
        Commands::Review { sets } => {
            let mut session = Session::load(&sets.candidates, &sets.reference)?;
            review_interactively(&mut session)?;
            print_results(&session, config.format)
        }
        Commands::Prune {
            sets,
            result,
            output,
        } => {
            let mut session = Session::load(&sets.candidates, &sets.reference)?;
            prune(&mut session, result)?;

            let text = session.reference_text();
            match output {
                Some(path) => {
                    fs::write(&path, text).map_err(|e| CliError::io(&path, e))?;
                    tracing::info!(path = %path.display(), "Wrote pruned reference set");
                }
                None => print!("{text}"),
            }
            eprintln!(
                "{}",
                report::render_statistics(&session.statistics(), OutputFormat::Text)?
            );
            Ok(())
        }
    }
}

/// Remove the reference question matched by `result`, or every single match.
pub fn prune(session: &mut Session, result: Option<usize>) -> Result<()> {
    match result {
        Some(index) => session.delete_match(index),
        None => {
            session.delete_all_matches();
            Ok(())
        }
    }
}

fn print_results(session: &Session, format: OutputFormat) -> Result<()> {
    let text = report::render_results(session.results(), &session.statistics(), format)?;
    println!("{text}");
    Ok(())
}

fn review_interactively(session: &mut Session) -> Result<()> {
    while let Some((index, candidate)) = session.next_review() {
        let candidate = candidate.clone();
        let question1 = &session.results()[index].question1;
        println!("\n{}", report::review_prompt_text(question1, &candidate));

        let accepted = Confirm::new()
            .with_prompt("هل السؤالان متطابقان؟")
            .default(false)
            .interact()?;

        if accepted {
            session.accept_review(index, &candidate)?;
        } else {
            session.reject_review(index, &candidate)?;
        }
    }
    Ok(())
}
