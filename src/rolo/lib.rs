//! # Rolo Architecture
//!
//! Rolo is a contact-book **library** with a CLI client, not a CLI that
//! happens to expose some library code. The layering mirrors that:
//!
//! ```text
//! CLI Layer (args.rs + main.rs)
//!   - Parses arguments, renders the contact table, prints messages
//!   - The ONLY place that knows about stdout/stderr/exit codes
//!           │
//! API Layer (api.rs)
//!   - Thin facade over commands, generic over the storage backend
//!           │
//! Command Layer (commands/*.rs)
//!   - Pure business logic: id assignment, duplicate detection, lookup
//!   - Operates on Rust types, returns structured `CmdResult` values
//!           │
//! Storage Layer (store/)
//!   - Abstract `DataStore` trait over the whole-file load/save cycle
//!   - FileStore (production), InMemoryStore (testing)
//! ```
//!
//! Every invocation is a complete load → compute → (save) → report cycle;
//! no store state survives between invocations. Concurrent invocations can
//! lose updates to each other (whole-file rewrite, no locking) — an
//! accepted limitation.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The core [`model::Contact`] type
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
