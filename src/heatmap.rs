//! Colour mapping for visualising distance fields.
//!
//! Distances are normalised by the largest distance in the field
//! and mapped through a fully saturated HSL palette with a lightness of one half.

/// The largest finite value, or zero if there is none.
pub fn max_distance(distances: &[f32]) -> f32 {
    distances.iter().copied()
        .filter(|distance| distance.is_finite())
        .fold(0.0, f32::max)
}

/// Divide every distance by the largest finite one.
/// Non-finite distances, such as a half precision sentinel
/// that saturated to infinity, map to one.
/// Finite distances of a field without any positive distance map to zero.
pub fn normalize(distances: &[f32]) -> Vec<f32> {
    let max = max_distance(distances);

    distances.iter()
        .map(|&distance| {
            if !distance.is_finite() { 1.0 }
            else if max <= 0.0 { 0.0 }
            else { distance / max }
        })
        .collect()
}

/// Map a normalised value to an RGB colour with channels in `[0, 1]`.
pub fn heatmap_color(value: f32) -> [f32; 3] {
    let hue = (1.0 - value) * 6.0;
    let channel = |offset: f32| (((hue + offset) % 6.0 - 3.0).abs() - 1.0).clamp(0.0, 1.0);
    [channel(0.0), channel(4.0), channel(2.0)]
}

/// Packed 8-bit RGB pixels of the normalised field.
pub fn to_rgb_bytes(distances: &[f32]) -> Vec<u8> {
    normalize(distances).into_iter()
        .flat_map(heatmap_color)
        .map(|channel| (channel * 255.0) as u8)
        .collect()
}

/// Write distance fields as piston images.
#[cfg(feature = "piston_image")]
pub mod piston_image {
    use image::RgbImage;
    use std::path::Path;
    use crate::distance_field::{DistanceField, DistanceStorage};
    use crate::error::{DistanceFieldError, DistanceFieldResult};

    /// Render the field as an RGB heat map.
    pub fn to_rgb_image<D: DistanceStorage>(field: &DistanceField<D>) -> DistanceFieldResult<RgbImage> {
        let width = u32::try_from(field.width)
            .map_err(|_| DistanceFieldError::invalid_dimensions(field.width, field.height))?;

        let height = u32::try_from(field.height)
            .map_err(|_| DistanceFieldError::invalid_dimensions(field.width, field.height))?;

        let pixels = super::to_rgb_bytes(&field.to_f32_vec());
        let actual = pixels.len();

        RgbImage::from_raw(width, height, pixels)
            .ok_or(DistanceFieldError::size_mismatch(field.width * field.height * 3, actual))
    }

    /// Render the field as an RGB heat map and save it,
    /// with the format inferred from the file extension.
    pub fn save_heatmap<D: DistanceStorage>(field: &DistanceField<D>, path: impl AsRef<Path>) -> DistanceFieldResult<()> {
        let image = to_rgb_image(field)?;
        image.save(path.as_ref())?;

        log::debug!("saved {}x{} heat map to {}", field.width, field.height, path.as_ref().display());
        Ok(())
    }

}
