//! Error types for the I/O edges of the crate.
//!
//! The shading stage itself never fails; only loading configuration,
//! geometry and writing previews can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to load OBJ: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;
