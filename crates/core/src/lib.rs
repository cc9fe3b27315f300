//! MainMarket Core - Shared types library.
//!
//! This crate provides common types used across all MainMarket components:
//! - `catalog` - Marketplace product listing controller
//! - `otp` - One-time-passcode detection controller
//! - `cli` - Command-line demo driving both controllers
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no filesystem access, no
//! network clients. The one "service" it defines is the [`storage::KvStore`]
//! trait, the seam that replaces the browser's origin-scoped key-value
//! storage so controllers can be tested against an in-memory backend.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and OTP codes
//! - [`storage`] - Key-value storage abstraction and well-known keys

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod storage;
pub mod types;

pub use storage::{KvStore, MemoryStore, StorageError};
pub use types::*;
