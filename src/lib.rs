//! Per-vertex shading stage of a 3D geometry viewer.
//!
//! Every submitted vertex goes through the same four steps: color mode
//! resolution, the highlight overlay, optional Phong lighting, and output
//! assembly (clip position, point size, RGBA color).

pub mod core;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod scene;

pub use error::{Error, Result};
