//! Core of a discrete-time cellular biophysics simulator: a fair-share
//! reaction scheduler over a well-stirred chemistry compartment, and a
//! triangulated soft-body cortex advanced by edge forces and projected
//! onto a target volume via XPBD.
//!
//! Per-organelle biology, catalog loading, logging policy beyond this
//! crate's own diagnostics, data collection, rendering, input, and the
//! top-level simulation driver are external collaborators — this crate
//! exposes only the chemistry, mesh, and physics core they sit on top of.

pub mod chemistry;
pub mod config;
pub mod error;
pub mod mesh;
pub mod physics;
