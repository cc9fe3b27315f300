//! Cross-crate flow tests for MainMarket.
//!
//! The tests in `tests/` drive the catalog and OTP controllers end to end
//! over the in-memory store, including reload behaviour: a "reload" is a
//! fresh controller built over a clone of the previous session's store.
//!
//! Run with: `cargo test -p mainmarket-integration-tests`

#![cfg_attr(not(test), forbid(unsafe_code))]
