use cgmath::Vector2 as Vec2;

use crate::error::{DiceError, Result};

const fn p(x: f32, y: f32) -> Vec2<f32> {
    Vec2 { x, y }
}

const ONE: [Vec2<f32>; 1] = [p(0.5, 0.5)];
const TWO: [Vec2<f32>; 2] = [p(0.25, 0.25), p(0.75, 0.75)];
const THREE: [Vec2<f32>; 3] = [p(0.25, 0.25), p(0.5, 0.5), p(0.75, 0.75)];
const FOUR: [Vec2<f32>; 4] = [p(0.25, 0.25), p(0.75, 0.25), p(0.25, 0.75), p(0.75, 0.75)];
const FIVE: [Vec2<f32>; 5] = [
    p(0.25, 0.25),
    p(0.75, 0.25),
    p(0.5, 0.5),
    p(0.25, 0.75),
    p(0.75, 0.75),
];
const SIX: [Vec2<f32>; 6] = [
    p(0.25, 0.25),
    p(0.75, 0.25),
    p(0.25, 0.5),
    p(0.75, 0.5),
    p(0.25, 0.75),
    p(0.75, 0.75),
];

/// Pip centers for a face value, in face-local [0,1]² coordinates.
///
/// Values outside 1..=6 yield an empty slice; use [`try_pip_positions`] to
/// treat them as an error instead.
pub fn pip_positions(face_value: i32) -> &'static [Vec2<f32>] {
    match face_value {
        1 => &ONE,
        2 => &TWO,
        3 => &THREE,
        4 => &FOUR,
        5 => &FIVE,
        6 => &SIX,
        _ => &[],
    }
}

pub fn try_pip_positions(face_value: i32) -> Result<&'static [Vec2<f32>]> {
    match pip_positions(face_value) {
        [] => Err(DiceError::InvalidFaceValue(face_value)),
        pips => Ok(pips),
    }
}
