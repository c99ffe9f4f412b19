//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, DOM access, or heavy logic—just data and simple helpers.

pub mod config;
pub mod device;
pub mod routes;
