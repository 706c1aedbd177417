//! Matrix commands - print transform matrices and invert explicit ones

use anyhow::{Context, Result, bail};
use approx::AbsDiffEq;
use gm_math::{EPSILON, Matrix4f};
use tracing::{debug, info, warn};

use super::{build_transform, parse_floats};
use crate::{InvertArgs, MatrixArgs};

pub fn run(args: MatrixArgs) -> Result<()> {
    let transform = build_transform(&args.ops);
    let p = args.precision;

    println!("matrix:\n{:.*}\n", p, transform.matrix());
    println!("inverse (incremental):\n{:.*}\n", p, transform.inverse_matrix());

    // Cross-check against general elimination
    let eliminated = transform.matrix().inverse();
    println!("inverse (Gauss-Jordan):\n{:.*}", p, eliminated);

    if transform.is_degenerate() {
        warn!("Transform is degenerate");
    } else if !inverses_agree(&eliminated, transform.inverse_matrix()) {
        warn!("Incremental and Gauss-Jordan inverses differ beyond tolerance");
    }
    Ok(())
}

/// Compares two inverses with a tolerance scaled by their largest entry, so
/// large translations do not trip on ordinary f32 rounding.
fn inverses_agree(a: &Matrix4f, b: &Matrix4f) -> bool {
    let magnitude = a
        .to_rows()
        .iter()
        .chain(b.to_rows().iter())
        .flatten()
        .fold(1.0f32, |acc, x| acc.max(x.abs()));
    a.abs_diff_eq(b, EPSILON * magnitude)
}

pub fn run_invert(args: InvertArgs) -> Result<()> {
    let values = parse_floats(&args.values)?;
    let rows: [[f32; 4]; 4] = match values[..] {
        [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] => [
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ],
        _ => bail!("Expected 16 values, got {}", values.len()),
    };

    let m = Matrix4f::from_rows(rows);
    debug!(%m, "Inverting");
    let inv = m.try_inverse().context("Matrix cannot be inverted")?;
    info!("Inverted");

    println!("{:.*}", args.precision, inv);
    Ok(())
}
