//! Apply command - transform points, vectors and normals

use anyhow::{Context, Result};
use gm_math::{Point3, Vec3};
use tracing::{debug, info};

use super::{build_transform, format_triple, parse_vec3};
use crate::ApplyArgs;

pub fn run(args: ApplyArgs) -> Result<()> {
    let transform = build_transform(&args.ops);
    info!(ops = args.ops.len(), "Built transform");

    if args.strict {
        transform.validate().context("Transform rejected by --strict")?;
    } else if transform.is_degenerate() {
        debug!("Transform has non-finite matrices; results may contain NaN/Inf");
    }

    for s in &args.points {
        let p = parse_vec3(s)?;
        let out = transform.apply(Point3::new(p.x, p.y, p.z));
        println!("point  {} -> {}", format_triple(p.to_array()), format_triple(out.to_array()));
    }

    for s in &args.vectors {
        let v = parse_vec3(s)?;
        let out = transform.apply(v);
        println!("vector {} -> {}", format_triple(v.to_array()), format_triple(out.to_array()));
    }

    for s in &args.normals {
        let n = parse_vec3(s)?;
        let out = transform.apply(n.to_normal());
        println!(
            "normal {} -> {}",
            format_triple(n.to_array()),
            format_triple(Vec3::from(out).to_array())
        );
    }

    Ok(())
}
