//! pinseek-core — pincode directory search library.
//!
//! This crate exposes the lookup pipeline as public modules, plus the shared
//! types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! CSV ──► Dataset ──► search ──► format (chat)
//!                        │
//!                        └─────► document ──► export (PDF)
//! ```
//!
//! Everything here is synchronous and side-effect free apart from dataset
//! loading and export artifact writes; the Telegram transport lives in a
//! sibling crate and drives this one.

pub mod config;
pub mod dataset;
pub mod document;
pub mod error;
pub mod export;
pub mod format;
pub mod search;
pub mod session;
pub mod types;

pub use config::Config;
pub use dataset::Dataset;
pub use search::{Query, QueryKind};
pub use session::{Session, SessionStore};
pub use types::PostOffice;
