use crate::error::{DistanceFieldError, DistanceFieldResult};

/// Represents an image with each pixel being either inside or outside the shape.
/// BinaryImages can be created from byte slices
/// or piston images if the feature `piston_image` is activated.
pub trait BinaryImage {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn is_inside(&self, x: usize, y: usize) -> bool;
}

/// A mask which is described by a slice of bytes with one byte per pixel.
/// A byte of zero is inside the shape, any other value is outside.
#[derive(Clone, Copy, Debug)]
pub struct BinaryByteImage<'b> {
    width: usize,
    height: usize,

    /// A row-major image vector with one byte per pixel.
    buffer: &'b [u8],
}


impl<'b> BinaryByteImage<'b> {
    /// Create a binary byte image, checking that the buffer holds `width * height` bytes.
    pub fn from_slice(width: usize, height: usize, buffer: &'b [u8]) -> DistanceFieldResult<Self> {
        let expected = width.checked_mul(height)
            .ok_or(DistanceFieldError::invalid_dimensions(width, height))?;

        if buffer.len() != expected {
            return Err(DistanceFieldError::size_mismatch(expected, buffer.len()));
        }

        Ok(BinaryByteImage { width, height, buffer })
    }
}

impl BinaryImage for BinaryByteImage<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn is_inside(&self, x: usize, y: usize) -> bool {
        self.buffer[self.width * y + x] == 0
    }
}

/// Create binary images from piston images.
#[cfg(feature = "piston_image")]
pub mod piston_image {
    use image::GrayImage;
    use std::path::Path;
    use super::BinaryImage;
    use crate::error::DistanceFieldResult;

    /// Decode an image file and convert it to 8-bit grey-scale.
    pub fn open_gray_image(path: impl AsRef<Path>) -> DistanceFieldResult<GrayImage> {
        let image = image::open(path.as_ref())?.into_luma8();
        log::debug!("loaded {}x{} mask from {}", image.width(), image.height(), path.as_ref().display());
        Ok(image)
    }

    /// Create a binary image from a grey-scale piston image
    /// with all black pixels being inside-the-shape.
    pub fn of_gray_u8_image(image: &GrayImage) -> GrayMask<'_> {
        GrayMask { image }
    }

    /// A binary image borrowed from a grey-scale piston image.
    pub struct GrayMask<'i> {
        image: &'i GrayImage,
    }

    impl BinaryImage for GrayMask<'_> {
        fn width(&self) -> usize {
            self.image.width() as usize
        }

        fn height(&self) -> usize {
            self.image.height() as usize
        }

        fn is_inside(&self, x: usize, y: usize) -> bool {
            self.image.get_pixel(x as u32, y as u32).0[0] == 0
        }
    }

}
