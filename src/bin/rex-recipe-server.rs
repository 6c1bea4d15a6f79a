// ABOUTME: Server binary for the Rex recipe proxy
// ABOUTME: Loads configuration, initializes logging, and serves the recipe API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Rex Recipe Server Binary

use anyhow::Result;
use clap::Parser;
use rex_recipe_server::{config::environment::ServerConfig, logging, server};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "rex-recipe-server")]
#[command(about = "Rex - recipe search proxy in front of the Spoonacular API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
        config.validate()?;
    }

    info!("{}", config.summary());

    if let Err(e) = server::run(&config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
