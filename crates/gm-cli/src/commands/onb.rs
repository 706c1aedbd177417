//! Onb command - print the shading frame of a normal

use anyhow::{Result, bail};
use gm_math::Onb;
use tracing::debug;

use super::{format_triple, parse_vec3};
use crate::OnbArgs;

pub fn run(args: OnbArgs) -> Result<()> {
    let direction = parse_vec3(&args.normal)?;
    let Some(unit) = direction.try_normalize() else {
        bail!("Normal must have non-zero finite length: {}", args.normal);
    };
    debug!(x = unit.x, y = unit.y, z = unit.z, "Building frame");

    let onb = Onb::new(unit.to_normal());
    for (name, axis) in [("u", onb.u()), ("v", onb.v()), ("w", onb.w())] {
        println!("{} = {}", name, format_triple(axis.to_vec().to_array()));
    }
    Ok(())
}
