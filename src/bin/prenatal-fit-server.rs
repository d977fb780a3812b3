// ABOUTME: Server binary for the Prenatal Fit API
// ABOUTME: Loads configuration, initializes logging, and serves the HTTP API until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! # Prenatal Fit API Server Binary
//!
//! Starts the HTTP API serving vitals, exercise safety checks, and pregnancy
//! profiles.

use anyhow::Result;
use clap::Parser;
use prenatal_fit_server::{
    config::environment::ServerConfig, logging::LoggingConfig, resources::ServerResources, server,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "prenatal-fit-server")]
#[command(about = "Prenatal Fit API - exercise safety and health vitals for pregnant users")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the simulator seed for reproducible vitals
    #[arg(long)]
    simulator_seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env().init()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(seed) = args.simulator_seed {
        config.simulator.seed = Some(seed);
    }

    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::new(config));
    server::run(resources).await?;

    Ok(())
}
