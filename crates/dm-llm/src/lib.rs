//! # dm-llm
//!
//! Text-generation clients and the two flows built on them:
//! - **PAPP**: a 7-day action plan generated from a VAK profile
//! - **Sentiment**: classification of Portuguese free text, single or batch,
//!   plus aggregate statistics
//!
//! Every flow sends one request through a [`TextGenerator`], recovers JSON
//! from the reply with [`parse_json_reply`], and returns an outcome value
//! rather than an error. Backends are an OpenAI-compatible HTTP endpoint
//! ([`HttpGenerator`]) or scripted replies ([`FixtureGenerator`]), selected
//! by configuration through [`Generator::from_config`].

pub mod papp;
pub mod sentiment;

mod client;
mod error;
mod fixture;
mod http;
mod openai;
mod recovery;

pub use client::{GenerationRequest, Generator, RetryPolicy, TextGenerator, generate_with_retry};
pub use error::LlmError;
pub use fixture::{FixtureGenerator, FixtureReply};
pub use openai::HttpGenerator;
pub use papp::PappPlanner;
pub use recovery::{parse_json_reply, strip_code_fence};
pub use sentiment::{SentimentAnalyzer, summary_statistics};
