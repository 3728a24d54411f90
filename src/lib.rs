//! # Wordbook Architecture
//!
//! Wordbook is a vocabulary-learning library with a CLI client on top: ask a
//! generative-language API to explain an English word, let the user accept,
//! regenerate, preview or skip it, keep accepted explanations in a markdown
//! notebook, and commit each addition to git.
//!
//! ## Layers
//!
//! ```text
//! CLI layer (main.rs + args.rs)
//!   - clap parsing, colored output, prompts, exit codes
//!   - the ONLY place that touches stdout/stderr or process::exit
//!           │
//!           ▼
//! API layer (api.rs)
//!   - thin facade over commands, owns the collaborators
//!           │
//!           ▼
//! Command layer (commands/*.rs)
//!   - the interaction loop and direct-save logic
//!   - terminal I/O only through the injected `Interaction` boundary
//!           │
//!           ▼
//! Collaborators
//!   - provider/   ExplanationProvider trait + Gemini client
//!   - notebook.rs the markdown notebook store
//!   - git.rs      VcsSink trait + shell-out git implementation
//! ```
//!
//! Everything from `api.rs` inward returns `Result` values and never prints,
//! so the core runs identically under a real terminal or a scripted test
//! double. Commands are tested against in-memory doubles of both seams; the
//! CLI is covered by binary-level integration tests in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: The interaction loop and direct save
//! - [`provider`]: Explanation provider boundary and Gemini client
//! - [`notebook`]: The markdown notebook store
//! - [`git`]: Version-control sink and commit message formatting
//! - [`model`]: Core data types (`Word`, `Explanation`)
//! - [`config`]: Configuration loading and the saved environment file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod model;
pub mod notebook;
pub mod provider;
