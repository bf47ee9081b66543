//! Shared test utilities for pinseek integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Builders construct records and update payloads,
//! fixtures hold the CSV corpora, and the fake Telegram API stands in for
//! the real Bot API server.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
