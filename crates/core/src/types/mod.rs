//! Core types for MainMarket.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod code;
pub mod id;
pub mod price;

pub use code::{OtpCode, OtpCodeError};
pub use id::*;
pub use price::{CurrencyCode, Price};
