use std::error::Error;

use clap::Parser;
use log::info;
use voxel_reslice::{
    GridDimensions, Orientation, ResliceOptions, Reslicer, Sentinel, Strategy,
};
use web_time::Instant;

/// Reslice a synthetic volume and report the resulting stack.
#[derive(Parser, Debug)]
struct Args {
    /// Grid dimensions
    #[arg(long, num_args = 3, value_names = ["NX", "NY", "NZ"], default_values_t = [91, 109, 91])]
    dims: Vec<usize>,

    #[arg(long, default_value = "axial")]
    orientation: Orientation,

    /// memoized or direct
    #[arg(long, default_value = "direct")]
    strategy: Strategy,

    /// Mark every Nth voxel as missing (0 disables)
    #[arg(long, default_value_t = 0)]
    sentinel_every: usize,
}

fn main() -> Result<(), Box<dyn Error + Sync + Send>> {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    let args = Args::parse();
    let dims = GridDimensions::new(args.dims[0], args.dims[1], args.dims[2]);

    let sentinel = -1.0;
    let volume: Vec<f32> = (0..dims.len())
        .map(|i| {
            if args.sentinel_every != 0 && i % args.sentinel_every == 0 {
                sentinel
            } else {
                (i % 4096) as f32
            }
        })
        .collect();

    let reslicer = Reslicer::new().with_options(ResliceOptions {
        sentinel: Sentinel::Value(sentinel),
    });

    let t0 = Instant::now();
    let resliced = reslicer.reslice(&volume, args.orientation, dims, args.strategy)?;
    let (slices, rows, cols) = resliced.stack.dim();
    info!(
        "{} {:?} reslice of {dims}: {slices} slices of {rows}x{cols} in {:?}",
        args.orientation,
        args.strategy,
        t0.elapsed()
    );

    let range = resliced
        .range
        .unwrap_or_else(|| resliced.stack.value_range());
    if range.is_empty() {
        info!("no valid voxels");
    } else {
        info!("value range: [{}, {}]", range.min, range.max);
    }

    Ok(())
}
