//! Error types shared by every module of the crate.

use thiserror::Error;

/// Errors produced while building colors, styles, or icons.
///
/// None of these are transient: every operation in this crate is a pure
/// function of its inputs, so a failure recurs identically on retry.
#[derive(Error, Debug)]
pub enum Error {
    /// An HSL component was outside the `[0, 1]` interval.
    #[error("HSL {component} must be within [0, 1], got {value}")]
    HslOutOfRange { component: &'static str, value: f32 },

    /// The hash is too short for the octet or hue being extracted.
    #[error("hash must be at least {required} bytes long, got {actual}")]
    HashTooShort { required: usize, actual: usize },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A style value is outside its documented range.
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    /// A category table entry cannot be resolved.
    #[error("invalid category: {0}")]
    InvalidCategory(String),

    /// The raster backend could not allocate a surface of this size.
    #[error("cannot allocate a {width}x{height} canvas")]
    InvalidCanvasSize { width: u32, height: u32 },

    /// Style (de)serialization failed.
    #[error("style serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
