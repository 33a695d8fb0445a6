//! This crate approximates the distance of every pixel
//! of a binary image to the nearest boundary pixel.
//! The algorithm used is the fast sweeping method, as described in
//! `A fast sweeping method for Eikonal equations` by Hongkai Zhao (2005),
//! applied to distance transforms as in `Finding the Skeleton of 2D Shape and Contours:
//! Implementation of Hamilton-Jacobi Skeleton` by Yuchen He, Sung Ha Kang and Luis Álvarez (2020).
//!
//! Pixels with a value of zero are inside the shape, all other pixels are outside.
//! Boundary pixels are inside pixels with an outside pixel among their 8 neighbours.
//! The resulting field is unsigned: outside pixels receive a distance as well.

pub mod binary_image;
pub mod boundary;
pub mod distance_field;
pub mod error;
pub mod heatmap;
pub mod sweep;

pub mod prelude {
    pub use crate::{
        compute_distance_field,
        compute_distance_field_into,
        compute_f16_distance_field,
        compute_f32_distance_field,
        distance_transform,
    };

    pub use crate::binary_image::{
        BinaryImage, BinaryByteImage
    };

    pub use crate::distance_field::{
        DistanceField, DistanceStorage,
        F16DistanceStorage, F32DistanceStorage
    };

    pub use crate::error::{ DistanceFieldError, DistanceFieldResult };
    pub use crate::sweep::SweepConfig;

    #[cfg(feature = "piston_image")]
    pub use crate::binary_image::piston_image as binary_piston_image;

    #[cfg(feature = "piston_image")]
    pub use crate::heatmap::piston_image as heatmap_piston_image;
}


use prelude::*;

/// Compute the distance field with the specified distance storage of the specified binary image.
pub fn compute_distance_field<D: DistanceStorage>(image: &impl BinaryImage) -> DistanceFieldResult<DistanceField<D>> {
    DistanceField::compute(image)
}

/// Compute the distance field with an `f16` distance storage of the specified binary image.
pub fn compute_f16_distance_field(image: &impl BinaryImage) -> DistanceFieldResult<DistanceField<F16DistanceStorage>> {
    compute_distance_field(image)
}

/// Compute the distance field with an `f32` distance storage of the specified binary image.
pub fn compute_f32_distance_field(image: &impl BinaryImage) -> DistanceFieldResult<DistanceField<F32DistanceStorage>> {
    compute_distance_field(image)
}

/// Compute the distance field of the specified binary image into a caller-provided buffer.
pub fn compute_distance_field_into(image: &impl BinaryImage, out: &mut [f32]) -> DistanceFieldResult<()> {
    distance_field::compute_into(image, out)
}

/// Compute the row-major distances of a row-major 8-bit mask.
pub fn distance_transform(mask: &[u8], width: usize, height: usize) -> DistanceFieldResult<Vec<f32>> {
    let image = BinaryByteImage::from_slice(width, height, mask)?;
    Ok(compute_f32_distance_field(&image)?.distances)
}
