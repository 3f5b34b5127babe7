//! # dm-core
//!
//! Core types and error types for dialoga.
//!
//! This crate provides the foundational types shared across all dialoga crates:
//! - Research document shapes read from JSON (market insights, market
//!   statistics, daily trends, research digests)
//! - LLM-facing inputs and results (VAK profile, PAPP action plan, sentiment)
//! - Classification enums and the closed [`enums::FailureKind`] taxonomy
//! - Outcome and response types printed by the CLI
//!
//! Optional fields are modelled as `Option<_>` so "missing" is part of each
//! type rather than a string default sprinkled through the renderers.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod figure;
pub mod responses;

pub use figure::Figure;
