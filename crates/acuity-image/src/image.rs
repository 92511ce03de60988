use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use acuity_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with pixel data.
///
/// The pixel data is stored row-major and interleaved with shape (H, W, C),
/// where H is the height of the image, W the width and C the number of
/// channels given by the const generic parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use acuity_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///      width: 10,
    ///      height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The default value of the pixel data.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Create a new zero-filled image with the given size.
    pub fn from_size(size: ImageSize) -> Result<Self, ImageError>
    where
        T: num_traits::Zero + Clone,
    {
        Image::from_size_val(size, T::zero())
    }

    /// Cast the pixel data of the image to a different type.
    ///
    /// # Errors
    ///
    /// If a pixel value is not representable in the target type, an error is returned.
    pub fn cast<U>(&self) -> Result<Image<U, CHANNELS>, ImageError>
    where
        U: num_traits::NumCast,
        T: num_traits::NumCast + Copy,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(ImageError::CastError))
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, casted_data)
    }

    /// The size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// The number of rows of the image (height).
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// The number of columns of the image (width).
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The number of channels of the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// The pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The pixel data as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return the pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImageError;

    #[test]
    fn test_image_size() {
        let size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(size.width, 10);
        assert_eq!(size.height, 20);

        let size: ImageSize = [3, 4].into();
        assert_eq!(size.width, 3);
        assert_eq!(size.height, 4);
    }

    #[test]
    fn test_image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.cols(), 10);
        assert_eq!(image.rows(), 20);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn test_image_data_mismatch() {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 3,
            },
            vec![0u8; 5],
        );
        assert_eq!(image, Err(ImageError::InvalidChannelShape(5, 9)));
    }

    #[test]
    fn test_image_from_size() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size(ImageSize {
            width: 2,
            height: 2,
        })?;
        assert_eq!(image.as_slice(), &[0.0; 4]);

        Ok(())
    }

    #[test]
    fn test_image_cast() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 1, 2, 3],
        )?;
        let image_f32 = image.cast::<f32>()?;
        assert_eq!(image_f32.as_slice(), &[0.0, 1.0, 2.0, 3.0]);

        let image_u8 = image_f32.cast::<u8>()?;
        assert_eq!(image_u8.as_slice(), &[0, 1, 2, 3]);

        Ok(())
    }

    #[test]
    fn test_image_cast_out_of_range() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![300.0],
        )?;
        assert_eq!(image.cast::<u8>(), Err(ImageError::CastError));

        Ok(())
    }
}
