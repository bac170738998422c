//! # Cheatz Architecture
//!
//! Cheatz keeps **cheatsheets**: named documents made of titled markdown tables.
//! It is a library with a CLI client, not a CLI with some library code. Nothing
//! from [`api`] inward prints, reads stdin, or exits.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, runs editor/clipboard  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, turns raw inputs into SheetSelectors        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! │  - Edits go through the pure reducer in edit.rs             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`markdown`] codec sits beside the layers. It converts between
//! [`model::Table`] / [`model::Document`] and the cheatsheet markdown dialect,
//! and is what import, export and editor round-trips use.
//!
//! ## Testing Strategy
//!
//! 1. **Codec and commands**: thorough unit tests next to the code. Most of the
//!    testing lives here, against `InMemoryStore`.
//! 2. **API**: dispatch tests only.
//! 3. **CLI**: argument parsing and rendering unit tests in the binary, plus
//!    end-to-end runs in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`markdown`]: Table and document codec
//! - [`model`]: `Table`, `Document`, `Cheatsheet`, `Metadata`
//! - [`edit`]: Pure edit reducer over a cheatsheet
//! - [`store`]: Storage abstraction and implementations
//! - [`index`]: Display indexes and name selectors
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod edit;
pub mod editor;
pub mod error;
pub mod index;
pub mod markdown;
pub mod model;
pub mod store;
