//! # Reelnotes Architecture
//!
//! Reelnotes keeps a short list of movie reviews in one durable slot. It is a
//! **UI-agnostic library** with a CLI client on top; the same core could sit
//! behind a browser form or a TUI.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive shell, prints     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Manager (manager.rs)                                       │
//! │  - Owns the review list, the edit session and the store     │
//! │  - Writes the whole list back after every change            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure operations on ReviewList / EditSession              │
//! │  - Report whether anything changed                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SlotStore trait: one key, one serialized value           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Silent No-ops
//!
//! Blank titles or reviews, and ids that do not exist, are ignored rather
//! than reported. They show up only in debug logs (`-v`). Storage failures
//! never abort an operation either; see [`manager`].
//!
//! ## Editing
//!
//! Editing is a small state machine held in [`model::EditSession`]:
//! `Idle → Editing(id)` on begin, `Editing → Idle` on commit whether the
//! draft was saved or discarded. Beginning an edit on another review drops
//! the previous draft.
//!
//! ## Module Overview
//!
//! - [`manager`]: the entry point for all operations
//! - [`commands`]: business logic for each operation
//! - [`store`]: slot storage abstraction and implementations
//! - [`model`]: `Review`, `ReviewList`, `EditSession`
//! - [`config`]: configuration (`config.json`)
//! - [`init`]: data directory resolution and startup
//! - [`logging`]: tracing subscriber setup for binaries
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod manager;
pub mod model;
pub mod store;
