//! Listing decision engine: component scorers, weighted aggregation, justification
//! strings, and the compatibility normalizer shared by every rendering surface.

pub mod config;
pub mod decision;
pub mod error;
pub mod import;
pub mod telemetry;
