//! Tracing setup for the terminal binary.
//!
//! The game owns the terminal in raw alternate-screen mode, so log output can
//! only go to a file. Without a path nothing is installed and every event is
//! discarded.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, Registry};

pub fn init(log_path: Option<&str>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    let subscriber = Registry::default().with(LevelFilter::DEBUG).with(
        tracing_subscriber::fmt::Layer::default()
            .with_ansi(false)
            .with_writer(Mutex::new(file)),
    );
    tracing::subscriber::set_global_default(subscriber)
        .context("setting global default tracing subscriber failed")?;
    Ok(())
}
