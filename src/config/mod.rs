// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven server, provider, HTTP client, and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Rex recipe server
//!
//! All settings come from environment variables and are read once at startup.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CorsConfig, Environment, HttpClientConfig, LogLevel, ServerConfig, SpoonacularApiConfig,
};
