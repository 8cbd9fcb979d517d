//! # Togo Architecture
//!
//! Togo manages a plain-text task list in the todo.txt convention. Like the
//! rest of this codebase it is a library first: the `togo` binary is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, colors output, picks exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, threads configuration into every call       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load whole list, mutate once, write whole list           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) + Line Codec (codec.rs)             │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! │  - decode/encode one line <-> one Task                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions
//!
//! A task is addressed by its 1-based line number at load time. That number
//! is not stored anywhere and shifts whenever lines are added or removed
//! above it.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`codec`]: Line decoding and encoding
//! - [`model`]: `Task`, `TaskMap`, `TaskList`
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
