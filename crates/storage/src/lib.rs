//! Storage layer for Accessibility Build
//!
//! This crate provides the key-value store that backs locally persisted
//! game data. It stores JSON blobs under string keys and knows nothing about
//! the values it holds.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;

pub use kv::{KvConfig, KvError, KvStore};
