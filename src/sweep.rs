//! Fast sweeping propagation of boundary distances,
//! as described in `A fast sweeping method for Eikonal equations`
//! by Hongkai Zhao (2005).
//!
//! Each sweep visits every pixel once in one of four raster orders
//! and lowers its distance towards the discrete solution of `|∇u| = 1`,
//! using the smaller of its horizontal and the smaller of its vertical neighbours.
//! The field is read and written in place, so a sweep sees the values
//! it has already updated earlier in the same traversal.

use crate::error::{check_grid, DistanceFieldResult};


/// One raster traversal order. `ORDER` lists the sweeps of one round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sweep {
    /// Increasing rows, increasing columns.
    DownRight,

    /// Increasing rows, decreasing columns.
    DownLeft,

    /// Decreasing rows, decreasing columns.
    UpLeft,

    /// Decreasing rows, increasing columns.
    UpRight,
}

impl Sweep {
    pub const ORDER: [Sweep; 4] = [Sweep::DownRight, Sweep::DownLeft, Sweep::UpLeft, Sweep::UpRight];

    #[inline]
    pub fn rows_reversed(self) -> bool {
        matches!(self, Sweep::UpLeft | Sweep::UpRight)
    }

    #[inline]
    pub fn columns_reversed(self) -> bool {
        matches!(self, Sweep::DownLeft | Sweep::UpLeft)
    }
}


/// How many rounds of four sweeps to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    /// The first round always runs. Later rounds stop early
    /// as soon as a whole round leaves every distance unchanged.
    pub rounds: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig { rounds: 1 }
    }
}

impl SweepConfig {
    pub fn with_rounds(rounds: usize) -> Self {
        SweepConfig { rounds }
    }
}


/// Two-point update of the Eikonal equation on a unit grid,
/// given the nearer horizontal and the nearer vertical neighbour distance.
#[inline]
pub fn eikonal_update(horizontal: f32, vertical: f32) -> f32 {
    let delta = horizontal - vertical;

    if delta.abs() >= 1.0 {
        horizontal.min(vertical) + 1.0
    }
    else {
        (horizontal + vertical + (2.0 - delta * delta).sqrt()) / 2.0
    }
}

/// Run the four sweeps once, in `Sweep::ORDER`.
pub fn propagate(field: &mut [f32], width: usize, height: usize) -> DistanceFieldResult<()> {
    propagate_with(field, width, height, &SweepConfig::default())?;
    Ok(())
}

/// Run up to `config.rounds` rounds of the four sweeps.
/// Returns the number of rounds performed.
pub fn propagate_with(field: &mut [f32], width: usize, height: usize, config: &SweepConfig)
    -> DistanceFieldResult<usize>
{
    check_grid(width, height, 2, field.len())?;

    let mut rounds = 0;
    while rounds < config.rounds {
        let mut changed = false;
        for &sweep in &Sweep::ORDER {
            changed |= sweep_unchecked(field, width, height, sweep);
        }

        rounds += 1;
        log::debug!("sweep round {} of {}: changed = {}", rounds, config.rounds, changed);

        if !changed {
            break;
        }
    }

    Ok(rounds)
}

/// Run a single sweep over the field.
/// Returns whether any distance decreased.
pub fn run_sweep(field: &mut [f32], width: usize, height: usize, sweep: Sweep) -> DistanceFieldResult<bool> {
    check_grid(width, height, 2, field.len())?;
    Ok(sweep_unchecked(field, width, height, sweep))
}

fn sweep_unchecked(field: &mut [f32], width: usize, height: usize, sweep: Sweep) -> bool {
    let mut changed = false;

    for row in 0..height {
        let y = if sweep.rows_reversed() { height - 1 - row } else { row };

        for column in 0..width {
            let x = if sweep.columns_reversed() { width - 1 - column } else { column };
            changed |= relax(field, width, height, x, y);
        }
    }

    log::trace!("{:?} sweep over {}x{} field: changed = {}", sweep, width, height, changed);
    changed
}

/// Lower the distance at `(x, y)` using its in-bounds axis neighbours.
#[inline(always)]
fn relax(field: &mut [f32], width: usize, height: usize, x: usize, y: usize) -> bool {
    let index = width * y + x;

    let left = (x > 0).then(|| field[index - 1]);
    let right = (x + 1 < width).then(|| field[index + 1]);
    let up = (y > 0).then(|| field[index - width]);
    let down = (y + 1 < height).then(|| field[index + width]);

    match (nearer(left, right), nearer(up, down)) {
        (Some(horizontal), Some(vertical)) => {
            let candidate = eikonal_update(horizontal, vertical);
            if candidate < field[index] {
                field[index] = candidate;
                true
            }
            else {
                false
            }
        },

        _ => false,
    }
}

#[inline]
fn nearer(first: Option<f32>, second: Option<f32>) -> Option<f32> {
    match (first, second) {
        (Some(first), Some(second)) => Some(first.min(second)),
        (first, second) => first.or(second),
    }
}
