//! # Libris Architecture
//!
//! Libris is a **UI-agnostic library-catalog crate**. The CLI binary is a thin
//! client; everything it can do is available to any other front end through
//! the same API.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (index strings → DisplayIndex → Uuid)  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The derived age
//!
//! Every book carries a derived `age_days` value: the whole number of days
//! since its release date. It is never persisted; [`age`] computes it on
//! read, translates writes to it back onto the stored date, and rewrites age
//! queries into equivalent release-date comparisons. See `age.rs` for the
//! operator-flip rationale.
//!
//! ## Validation
//!
//! Constraints ("title must be unique", "release date must be in the past")
//! are plain functions in [`validate`], called by the command layer before
//! every save. Nothing is enforced inside the store, so alternate front ends
//! get the same rules by going through the commands.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Book`, `Card`, `Partner`, `BookState`)
//! - [`age`]: The age/date converter and query rewrite
//! - [`validate`]: Explicit constraint checks
//! - [`index`]: Display indexing (1, d1, l1 notation) and canonical ordering
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod age;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod validate;
