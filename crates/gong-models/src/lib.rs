//! # gong-models
//!
//! Data models for the Gong API.
//!
//! This crate provides strongly-typed Rust structures for the Gong v2
//! request and response formats: call listing filters, extensive call
//! details, call transcripts, and users. Every type implements
//! [`gong_core::wire::WireRecord`], so it can be serialized to a
//! host-case mapping for the outbound translator and hydrated from a
//! normalized response mapping.
//!
//! Field names are snake_case on the Rust side; the translation to the
//! API's camelCase keys happens in `gong_core::wire`, not in serde
//! attributes.
//!
//! ## Usage
//!
//! ```ignore
//! use gong_core::wire::{translate, WireRecord};
//! use gong_models::{CallFilter, CallsResponse};
//!
//! let filter = CallFilter { workspace_id: Some("w1".into()), ..Default::default() };
//! let params = filter.to_map()?;
//!
//! let normalized = translate::inbound(response_json);
//! let calls = CallsResponse::from_map(normalized)?;
//! ```

#![warn(clippy::all)]

pub mod calls;
pub mod common;
pub mod users;

// Re-export all model types
pub use calls::*;
pub use common::*;
pub use users::*;
