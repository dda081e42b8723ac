//! # Locwork Architecture
//!
//! Locwork is a library with a CLI client, not a CLI with incidental library
//! code. The layering mirrors that split:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, styles.rs)                    │
//! │  - Parses arguments, styles output, drives the terminal     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning the stores and config                 │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, no I/O assumptions                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - LocationRegistry + RecordStore, injected file paths      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The core modules ([`calendar`], [`stats`], [`viewer`]) are pure: the
//! calendar emits category tags per day and leaves styling to the CLI, the
//! aggregator works on an already-filtered map, and the viewer is a month
//! state machine fed keys through the [`viewer::KeyReader`] capability.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Flat-file stores (location registry, record store)
//! - [`model`]: Core data types (`DayType`, `LogEntry`, `RecordMap`)
//! - [`calendar`]: Month grid layout and day categorization
//! - [`stats`]: Range filtering and aggregate statistics
//! - [`viewer`]: Paged month viewer state machine
//! - [`interactive`]: Key mapping for the top-level menu
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod error;
pub mod interactive;
pub mod model;
pub mod stats;
pub mod store;
pub mod viewer;
