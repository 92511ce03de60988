#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation for filtering purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// rectangular image regions.
pub mod rect;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::rect::Rect;
