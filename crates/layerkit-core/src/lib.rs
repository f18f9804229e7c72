//! # Layerkit Core
//!
//! Core types and utilities shared by the Layerkit crates.
//! Provides the identifiers used across the document model, the small
//! geometry primitives the designer works with, and the error taxonomy
//! for the fallible boundaries (snapshot decoding, settings I/O).

pub mod error;
pub mod types;

pub use error::{DocumentError, Error, Result};
pub use types::{Bounds, GuideId, LayerId, Point};
