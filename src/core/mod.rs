//! # Core Application Logic
//!
//! This module contains Fuelcheck's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (screen)       │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • comparison (rule)    │
//!                    │  • timer (loading)      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  one-shot  │
//!            │  Adapter   │            │  CLI mode  │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — the current screen and error state
//! - [`action`]: The `Action` enum and `update()` — the transition table
//! - [`comparison`]: The price-ratio rule and its validation error
//! - [`timer`]: Cancelable one-shot deadline for the loading screen
//! - [`config`]: TOML config with defaults → file → env → CLI hierarchy

pub mod action;
pub mod comparison;
pub mod config;
pub mod state;
pub mod timer;
