//! # Shopkeep Architecture
//!
//! Shopkeep is a **UI-agnostic inventory library**. The interactive menu is just
//! one client; everything from the API facade inward works on plain Rust types
//! and could serve any other front end unchanged.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, runs the menu loop, renders tables     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - ShopApi owns the catalog, wishlist, order history,       │
//! │    low-stock alerts and admin credentials                   │
//! │  - Loads persisted state on open, flushes on drop           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, returns Result<CmdResult>           │
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
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`catalog`]: The ordered product catalog, keyed by id
//! - [`wishlist`]: Most-recent-first wishlist of product snapshots
//! - [`history`]: Order history stack and low-stock alert queue
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Product`, `AdminCredential`)
//! - [`validate`]: Input validators used by the menu prompts
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod store;
pub mod validate;
pub mod wishlist;
