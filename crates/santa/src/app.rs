//! Application entry point and dispatch.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};

use santa_cli::presenter::{CliPresenter, ResultPresenter};
use santa_cli::progress_display::AttemptCounter;
use santa_core::dispatch;
use santa_core::generator::{CycleGenerator, GenerateOptions};
use santa_core::observer::ProgressSubject;
use santa_core::observers::LoggingObserver;
use santa_core::participant::Roster;
use santa_core::progress::CancellationToken;
use santa_core::rng::{RandomSource, SeededRandom, ThreadRandom};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        santa_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let roster = load_roster(config)?;
    generate_and_present(config, &roster)
}

fn load_roster(config: &AppConfig) -> Result<Roster> {
    let path = config
        .roster
        .as_deref()
        .context("a roster file is required")?;
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file {path}"))?;
    let roster = Roster::from_json(&data).with_context(|| format!("invalid roster in {path}"))?;
    Ok(roster)
}

fn generate_and_present(config: &AppConfig, roster: &Roster) -> Result<()> {
    let opts = GenerateOptions {
        max_attempts: config.max_attempts,
        attempt_pause: config.attempt_pause_duration(),
    }
    .normalize();

    let mut rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    };

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone());
    if let Some(timeout) = config.timeout_duration() {
        let cancel = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(timeout);
            cancel.cancel();
        });
    }

    let subject = ProgressSubject::new();
    subject.register(Arc::new(LoggingObserver::default()));
    let counter = if config.quiet {
        None
    } else {
        let counter = Arc::new(AttemptCounter::new(opts.max_attempts));
        subject.register(counter.clone());
        Some(counter)
    };

    let presenter = CliPresenter::new(config.verbose, config.quiet);
    let start = Instant::now();
    let outcome = CycleGenerator::new().generate(roster, &opts, rng.as_mut(), &cancel, &subject);
    let duration = start.elapsed();
    if let Some(counter) = &counter {
        counter.finish();
    }

    // Errors propagate to main, which prints them once and maps the exit
    // code.
    let assignment = outcome?;

    presenter.present_assignment(&assignment, roster, duration);

    if let Some(path) = &config.output {
        santa_cli::output::write_assignment(path, &assignment)
            .with_context(|| format!("failed to write assignment to {path}"))?;
    }
    if let Some(path) = &config.notices {
        let notices = dispatch::notices(&assignment, roster);
        santa_cli::output::write_notices(path, &notices)
            .with_context(|| format!("failed to write notices to {path}"))?;
    }

    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) {
    // Fails only if a handler is already installed.
    let _ = ctrlc::set_handler(move || cancel.cancel());
}
