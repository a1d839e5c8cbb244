//! # DHP Patient Registry
//!
//! A single-user patient registry kept in one flat file, either CSV or JSON, chosen
//! once when the program starts. The library holds all of the behaviour; the `dhp`
//! binary is an interactive menu on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (binary: cli/, wired by main.rs)                       │
//! │  - Arguments, storage prompt, menu loop, printing           │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Parses typed ids, dispatches to commands                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One per menu operation, returns CmdResult + messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry (registry.rs) + Validation (validation.rs)        │
//! │  - Collection, id counter, reload-mutate-rewrite cycle      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - DataStore trait: CsvStore, JsonStore, InMemoryStore      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing prints and nothing exits the process.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every client goes through
//! - [`commands`]: per-operation logic and operator messages
//! - [`registry`]: the record store
//! - [`validation`]: date of birth, phone number, age
//! - [`store`]: persistence backends
//! - [`model`]: `Patient` and its input types
//! - [`config`]: `dhp.json` settings
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod store;
pub mod validation;
