// ABOUTME: Core types and constants for the Rex recipe proxy server
// ABOUTME: Foundation crate with error handling, recipe DTOs, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Rex Core
//!
//! Foundation crate providing shared types and constants for the Rex recipe
//! proxy. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProviderError`
//! - **constants**: Provider endpoints, search defaults, and client-facing messages
//! - **models**: Client-facing recipe DTOs (search, detail, nutrition, autocomplete)

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Client-facing recipe data models
pub mod models;
