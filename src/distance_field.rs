use crate::binary_image::BinaryImage;
use crate::boundary::seed_boundary;
use crate::error::{check_grid, DistanceFieldError, DistanceFieldResult};
use crate::sweep::{propagate_with, SweepConfig};



/// The unsigned distance of every pixel to the nearest boundary pixel.
/// Pixels inside and outside the shape both receive a distance.
#[derive(Clone, PartialEq, Debug)]
pub struct DistanceField<D: DistanceStorage> {
    pub width: usize,
    pub height: usize,
    pub distances: D,
}

/// Needs less storage with sufficient precision.
/// Distances are always computed in `f32` and converted once,
/// so values above `f16::MAX` saturate to infinity.
pub type F16DistanceStorage = Vec<half::f16>;

/// Needs more storage, but keeps the exact values of the computation.
pub type F32DistanceStorage = Vec<f32>;

pub trait DistanceStorage {
    fn from_f32_distances(distances: Vec<f32>) -> Self;

    fn get(&self, index: usize) -> f32;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}



impl<D> DistanceField<D> where D: DistanceStorage {

    /// Computes the distance field of the specified image
    /// with a single round of the four sweeps.
    pub fn compute(binary_image: &impl BinaryImage) -> DistanceFieldResult<Self> {
        Self::compute_with(binary_image, &SweepConfig::default())
    }

    /// Computes the distance field of the specified image
    /// with as many sweep rounds as configured.
    pub fn compute_with(binary_image: &impl BinaryImage, config: &SweepConfig) -> DistanceFieldResult<Self> {
        let width = binary_image.width();
        let height = binary_image.height();

        let length = width.checked_mul(height)
            .ok_or(DistanceFieldError::invalid_dimensions(width, height))?;

        // reject degenerate grids before allocating
        check_grid(width, height, 2, length)?;

        let mut distances = allocate(length)?;
        compute_unallocated(binary_image, &mut distances, config)?;

        Ok(DistanceField {
            width, height,
            distances: D::from_f32_distances(distances),
        })
    }

    #[inline]
    pub fn get_distance(&self, x: usize, y: usize) -> f32 {
        self.distances.get(self.flatten_index(x, y))
    }

    #[inline]
    pub fn flatten_index(&self, x: usize, y: usize) -> usize {
        self.width * y + x
    }

    /// The largest distance in the field.
    pub fn max_distance(&self) -> f32 {
        (0 .. self.distances.len())
            .map(|index| self.distances.get(index))
            .fold(0.0, f32::max)
    }

    /// All distances as `f32`, in row-major order.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        (0 .. self.distances.len())
            .map(|index| self.distances.get(index))
            .collect()
    }
}

/// Computes the distance field of the image into a caller-provided
/// row-major buffer of `width * height` elements.
pub fn compute_into(binary_image: &impl BinaryImage, out: &mut [f32]) -> DistanceFieldResult<()> {
    compute_into_with(binary_image, out, &SweepConfig::default())
}

/// Like `compute_into`, with as many sweep rounds as configured.
pub fn compute_into_with(binary_image: &impl BinaryImage, out: &mut [f32], config: &SweepConfig)
    -> DistanceFieldResult<()>
{
    check_grid(binary_image.width(), binary_image.height(), 2, out.len())?;
    compute_unallocated(binary_image, out, config)
}

fn compute_unallocated(binary_image: &impl BinaryImage, out: &mut [f32], config: &SweepConfig)
    -> DistanceFieldResult<()>
{
    let width = binary_image.width();
    let height = binary_image.height();
    log::debug!("computing {}x{} distance field", width, height);

    seed_boundary(binary_image, out)?;
    propagate_with(out, width, height, config)?;
    Ok(())
}

fn allocate(length: usize) -> DistanceFieldResult<Vec<f32>> {
    let mut distances = Vec::new();

    distances.try_reserve_exact(length)
        .map_err(|source| DistanceFieldError::Allocation { len: length, source })?;

    distances.resize(length, 0.0);
    Ok(distances)
}


impl DistanceStorage for F16DistanceStorage {
    fn from_f32_distances(distances: Vec<f32>) -> Self {
        distances.into_iter().map(half::f16::from_f32).collect()
    }

    #[inline]
    fn get(&self, index: usize) -> f32 {
        self[index].to_f32()
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl DistanceStorage for F32DistanceStorage {
    fn from_f32_distances(distances: Vec<f32>) -> Self {
        distances
    }

    #[inline]
    fn get(&self, index: usize) -> f32 {
        self[index]
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary_image::BinaryByteImage;

    const I: u8 = 0;
    const O: u8 = 255;

    fn column_mask() -> Vec<u8> {
        vec![
            I, I, I, O,
            I, I, I, O,
            I, I, I, O,
            I, I, I, O,
        ]
    }

    #[test]
    fn outside_column_distances() {
        let bytes = column_mask();
        let mask = BinaryByteImage::from_slice(4, 4, &bytes).unwrap();
        let field = DistanceField::<F32DistanceStorage>::compute(&mask).unwrap();

        for y in 0 .. 4 {
            assert_eq!(field.get_distance(0, y), 2.0);
            assert_eq!(field.get_distance(1, y), 1.0);
            assert_eq!(field.get_distance(2, y), 0.0);

            // outside pixels receive distances too
            assert_eq!(field.get_distance(3, y), 1.0);
        }

        assert_eq!(field.max_distance(), 2.0);
    }

    #[test]
    fn caller_buffer_matches_owned_field() {
        let bytes = column_mask();
        let mask = BinaryByteImage::from_slice(4, 4, &bytes).unwrap();

        let mut buffer = vec![123.0; 16];
        compute_into(&mask, &mut buffer).unwrap();

        let field = DistanceField::<F32DistanceStorage>::compute(&mask).unwrap();
        assert_eq!(buffer, field.distances);
    }

    #[test]
    fn half_precision_storage() {
        let bytes = column_mask();
        let mask = BinaryByteImage::from_slice(4, 4, &bytes).unwrap();

        let field_16 = DistanceField::<F16DistanceStorage>::compute(&mask).unwrap();
        let field_32 = DistanceField::<F32DistanceStorage>::compute(&mask).unwrap();

        assert_eq!(field_16.distances.len(), 16);
        assert_eq!(field_16.to_f32_vec(), field_32.to_f32_vec());
    }

    #[test]
    fn rejects_degenerate_and_mismatched_input() {
        let bytes = [I, I, O];
        let row = BinaryByteImage::from_slice(3, 1, &bytes).unwrap();

        assert!(matches!(
            DistanceField::<F32DistanceStorage>::compute(&row),
            Err(DistanceFieldError::InvalidDimensions { width: 3, height: 1 })
        ));

        let bytes = column_mask();
        let mask = BinaryByteImage::from_slice(4, 4, &bytes).unwrap();
        let mut short = vec![0.0; 15];

        assert!(matches!(
            compute_into(&mask, &mut short),
            Err(DistanceFieldError::SizeMismatch { expected: 16, actual: 15 })
        ));
    }

    #[test]
    fn mask_without_boundary_keeps_sentinel() {
        let bytes = [O; 12];
        let mask = BinaryByteImage::from_slice(4, 3, &bytes).unwrap();
        let field = DistanceField::<F32DistanceStorage>::compute(&mask).unwrap();

        assert!(field.distances.iter().all(|&distance| distance == 25.0));
    }
}
