use std::io::{self, Write};

use rand::Rng;

use crate::json::FlatSphere;
use crate::material;
use crate::math::Scalar;

const BALL_COUNT: usize = 100;
/// Half the side of the square the balls land in, centered on the origin.
const HALF_EXTENT: Scalar = 10.0;
const BALL_HEIGHT: Scalar = 0.5;
const BALL_RADIUS: Scalar = 0.5;

/// Scatter `BALL_COUNT` balls uniformly over the ground plane and write one
/// comma-terminated flat-schema JSON object per line.
pub fn emit<R, W>(rng: &mut R, out: &mut W) -> io::Result<()>
where
    R: Rng,
    W: Write,
{
    for _ in 0..BALL_COUNT {
        writeln!(out, "{},", make_ball(rng))?;
    }
    Ok(())
}

fn make_ball<R: Rng>(rng: &mut R) -> FlatSphere {
    // U[0,1) mapped so the coordinates cover (-10, 10]
    let x = HALF_EXTENT - rng.gen_range(0.0..1.0) * 2.0 * HALF_EXTENT;
    let z = HALF_EXTENT - rng.gen_range(0.0..1.0) * 2.0 * HALF_EXTENT;
    FlatSphere::new(x, BALL_HEIGHT, z, BALL_RADIUS, material::pick(rng))
}
