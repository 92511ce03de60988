#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use acuity_image as image;

#[doc(inline)]
pub use acuity_imgproc as imgproc;
