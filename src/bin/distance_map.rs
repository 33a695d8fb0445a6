//! Computes the distance map of an 8-bit grey-scale image
//! and writes it as a heat map.

use clap::Parser;
use std::path::PathBuf;
use sweeping_distance_field::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "distance-map", about = "Distance to the nearest boundary pixel, rendered as a heat map")]
struct Args {
    /// 8-bit grey-scale input image, black pixels are inside the shape
    input: PathBuf,

    /// Output image, format inferred from the extension
    output: PathBuf,

    /// Rounds of the four sweeps, later rounds stop once nothing changes
    #[arg(long, default_value_t = 1)]
    rounds: usize,
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> DistanceFieldResult<()> {
    let gray_image = binary_piston_image::open_gray_image(&args.input)?;
    let mask = binary_piston_image::of_gray_u8_image(&gray_image);

    let distance_field = DistanceField::<F32DistanceStorage>::compute_with(
        &mask, &SweepConfig::with_rounds(args.rounds)
    )?;

    heatmap_piston_image::save_heatmap(&distance_field, &args.output)
}
