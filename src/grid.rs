use std::io::{self, Write};

use rand::Rng;

use crate::json::NestedSphere;
use crate::material;
use crate::math::{Scalar, Vector2};

/// Grid cells run from `-GRID_EXTENT` to `+GRID_EXTENT` on both axes.
const GRID_EXTENT: i32 = 20;
/// Cells closer to the origin than this stay empty.
const INNER_RADIUS: Scalar = 6.0;
const KEEP_PROBABILITY: Scalar = 0.1;
const BALL_HEIGHT: Scalar = 0.5;
const BALL_RADIUS: Scalar = 0.5;

/// Walk the grid row-major and write a comma-terminated nested-schema JSON
/// object for roughly one in ten cells outside the inner disk, each ball
/// jittered inside its own cell.
pub fn emit<R, W>(rng: &mut R, out: &mut W) -> io::Result<()>
where
    R: Rng,
    W: Write,
{
    for i in -GRID_EXTENT..=GRID_EXTENT {
        for j in -GRID_EXTENT..=GRID_EXTENT {
            if let Some(ball) = roll_cell(rng, i, j) {
                writeln!(out, "{},", ball)?;
            }
        }
    }
    Ok(())
}

/// At most one ball per cell. Cells inside the inner disk consume no
/// randomness.
fn roll_cell<R: Rng>(rng: &mut R, i: i32, j: i32) -> Option<NestedSphere> {
    if !outside_inner_disk(i, j) {
        return None;
    }
    if rng.gen_range(0.0..1.0) >= KEEP_PROBABILITY {
        return None;
    }
    let x = i as Scalar + rng.gen_range(0.0..1.0) - 0.5;
    let z = j as Scalar + rng.gen_range(0.0..1.0) - 0.5;
    Some(NestedSphere::new(
        x,
        BALL_HEIGHT,
        z,
        BALL_RADIUS,
        material::pick(rng),
    ))
}

/// Strict inequality: cells at exactly `INNER_RADIUS` stay empty.
fn outside_inner_disk(i: i32, j: i32) -> bool {
    Vector2::new(i as Scalar, j as Scalar).norm() > INNER_RADIUS
}
