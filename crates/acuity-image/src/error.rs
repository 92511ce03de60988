use thiserror::Error;

/// An error type for image construction and filtering.
#[derive(Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the pixel data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when a kernel has an invalid length for filtering.
    #[error("Invalid kernel length (x: {0}, y: {1})")]
    InvalidKernelLength(usize, usize),

    /// Error when the source and destination sizes do not match.
    #[error("Source size ({0}x{1}) does not match the destination size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a region does not fit inside the image bounds.
    #[error("Rectangle {0}x{1} at ({2}, {3}) exceeds the image bounds")]
    RectOutOfBounds(usize, usize, usize, usize),

    /// Error when casting pixel data to a different type.
    #[error("Failed to cast the pixel data")]
    CastError,
}
