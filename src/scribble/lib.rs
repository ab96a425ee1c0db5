//! # Scribble Architecture
//!
//! Scribble is a small note-keeping library with a CLI client. Notes are created,
//! edited in place, moved to a trash, restored or purged, and trashed notes expire on
//! their own after a retention period.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, prompts                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses index strings into selectors                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolves selectors to ids, calls the store               │
//! │  - Returns CmdResult with notes and messages                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: the only mutation path                  │
//! │  - NoteStore over FsBackend (production) or MemBackend      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or calls `process::exit`.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Testing
//!
//! - **Store**: lifecycle invariants against `InMemoryStore`, including simulated
//!   write failures
//! - **Commands**: business logic per command, also in memory
//! - **API**: selector parsing and dispatch
//! - **Binary**: `tests/` drives the real executable against a temp data dir
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and backends
//! - [`model`]: `Note`, `Collection`, input normalization
//! - [`index`]: Display indexes (`1`, `d1`, ranges)
//! - [`autosave`]: Debounced draft saving
//! - [`theme`]: Light/dark preference
//! - [`config`]: Settings
//! - [`error`]: Error types

pub mod api;
pub mod autosave;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod theme;
