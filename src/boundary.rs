//! Seeds a distance buffer from a binary mask.
//!
//! A boundary pixel is an inside pixel with at least one outside pixel
//! among its 8 neighbours. Neighbours beyond the image edge are skipped,
//! so the edge itself never makes a pixel a boundary.

use crate::binary_image::BinaryImage;
use crate::error::{check_grid, DistanceFieldResult};

const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), ( 0, -1), ( 1, -1),
    (-1,  0),           ( 1,  0),
    (-1,  1), ( 0,  1), ( 1,  1),
];

/// The initial distance of every non-boundary pixel,
/// larger than any distance that can occur on the grid.
#[inline]
pub fn sentinel_distance(width: usize, height: usize) -> f32 {
    let (width, height) = (width as f64, height as f64);
    (width * width + height * height) as f32
}

/// Whether the pixel is inside and touches an outside pixel.
pub fn is_boundary(mask: &impl BinaryImage, x: usize, y: usize) -> bool {
    mask.is_inside(x, y) && NEIGHBOURS.iter().any(|&(neighbour_x, neighbour_y)| {
        neighbour(x, neighbour_x, mask.width())
            .zip(neighbour(y, neighbour_y, mask.height()))
            .map_or(false, |(x, y)| !mask.is_inside(x, y))
    })
}

/// Overwrites every element of `field` with `0.0` for boundary pixels
/// and with the sentinel distance otherwise.
/// Returns the number of boundary pixels.
pub fn seed_boundary(mask: &impl BinaryImage, field: &mut [f32]) -> DistanceFieldResult<usize> {
    let width = mask.width();
    let height = mask.height();
    check_grid(width, height, 1, field.len())?;

    let sentinel = sentinel_distance(width, height);
    let mut boundary_pixels = 0;

    for (y, row) in field.chunks_exact_mut(width).enumerate() {
        for (x, distance) in row.iter_mut().enumerate() {
            *distance = if is_boundary(mask, x, y) {
                boundary_pixels += 1;
                0.0
            } else {
                sentinel
            };
        }
    }

    log::debug!("seeded {} boundary pixels in {}x{} mask", boundary_pixels, width, height);
    Ok(boundary_pixels)
}

#[inline]
fn neighbour(coordinate: usize, offset: isize, size: usize) -> Option<usize> {
    coordinate.checked_add_signed(offset).filter(|&neighbour| neighbour < size)
}
