//! Vellum engine crate.
//!
//! This crate owns the backend-agnostic pieces the scene graph draws with:
//! geometry, paint, the abstract drawing surface, and a recording surface.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod record;
pub mod surface;
