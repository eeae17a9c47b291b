//! Modules with generic logic used by several modules.
//!
//! - [`opentracker`]: the client for the upstream tracker statistics.
pub mod opentracker;
