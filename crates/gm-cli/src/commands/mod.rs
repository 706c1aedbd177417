//! CLI command implementations

pub mod apply;
pub mod matrix;
pub mod onb;

use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use gm_math::{Transform, Vec3};
use tracing::debug;

/// One composing operation from the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// `translate:X,Y,Z`
    Translate(Vec3),
    /// `scale:X,Y,Z`
    Scale(Vec3),
    /// `rotate:AX,AY,AZ,DEGREES`
    Rotate(Vec3, f32),
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, values) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("Expected NAME:VALUES, got '{}'", s))?;
        let values = parse_floats(values)?;

        match name.trim().to_lowercase().as_str() {
            "translate" | "t" => Ok(Op::Translate(vec3_from(&values, name)?)),
            "scale" | "s" => Ok(Op::Scale(vec3_from(&values, name)?)),
            "rotate" | "r" => {
                let [x, y, z, degrees] = values[..] else {
                    bail!("rotate takes AX,AY,AZ,DEGREES, got {} values", values.len());
                };
                Ok(Op::Rotate(Vec3::new(x, y, z), degrees))
            }
            _ => bail!("Unknown operation: {}", name),
        }
    }
}

/// Composes `ops` in order onto an identity transform.
pub fn build_transform(ops: &[Op]) -> Transform {
    let mut transform = Transform::new();
    for op in ops {
        debug!(?op, "compose");
        match *op {
            Op::Translate(offset) => transform.translate(offset),
            Op::Scale(factors) => transform.scale(factors),
            Op::Rotate(axis, degrees) => transform.rotate(axis, degrees),
        };
    }
    transform
}

/// Parses "1,2.5,-3" into floats.
pub fn parse_floats(s: &str) -> Result<Vec<f32>> {
    s.split(',')
        .map(|p| {
            p.trim()
                .parse::<f32>()
                .with_context(|| format!("Invalid number '{}' in '{}'", p.trim(), s))
        })
        .collect()
}

/// Parses "X,Y,Z" into a vector.
pub fn parse_vec3(s: &str) -> Result<Vec3> {
    vec3_from(&parse_floats(s)?, s)
}

fn vec3_from(values: &[f32], what: &str) -> Result<Vec3> {
    match values {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => bail!("{} needs 3 values, got {}", what, values.len()),
    }
}

/// Formats a triple with fixed precision.
pub fn format_triple(v: [f32; 3]) -> String {
    format!("({:.6}, {:.6}, {:.6})", v[0], v[1], v[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use gm_math::Point3;

    #[test]
    fn test_parse_ops() {
        assert_eq!(
            "translate:0,0,7".parse::<Op>().unwrap(),
            Op::Translate(Vec3::new(0.0, 0.0, 7.0))
        );
        assert_eq!("s: 1, 4, 1".parse::<Op>().unwrap(), Op::Scale(Vec3::new(1.0, 4.0, 1.0)));
        assert_eq!("rotate:1,0,0,90".parse::<Op>().unwrap(), Op::Rotate(Vec3::X, 90.0));
    }

    #[test]
    fn test_parse_op_errors() {
        assert!("translate".parse::<Op>().is_err());
        assert!("shear:1,2,3".parse::<Op>().is_err());
        assert!("rotate:1,0,0".parse::<Op>().is_err());
        assert!("scale:1,x,1".parse::<Op>().is_err());
    }

    #[test]
    fn test_build_transform_order() {
        let t = build_transform(&[Op::Translate(Vec3::new(0.0, 0.0, 7.0)), Op::Scale(Vec3::splat(2.0))]);
        assert_eq!(t.apply(Point3::new(1.0, 1.0, 1.0)), Point3::new(2.0, 2.0, 9.0));
    }

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("-1, 2.5, 3").unwrap(), Vec3::new(-1.0, 2.5, 3.0));
        assert!(parse_vec3("1,2").is_err());
    }
}
