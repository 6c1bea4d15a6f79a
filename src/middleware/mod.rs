// ABOUTME: HTTP middleware for cross-origin access and request correlation
// ABOUTME: CORS layer built from configuration plus request-id propagation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer construction
pub mod cors;
/// Request id generation and propagation
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{propagate_request_id_layer, set_request_id_layer, REQUEST_ID_HEADER};
