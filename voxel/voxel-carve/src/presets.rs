//! Built-in letter patterns for the dual-projection logo.
//!
//! The `S` silhouette targets the `x = 0` face and the `A` silhouette the
//! `y = 0` face of a 6x6x8 block. Both are 7 rows tall, so the top level
//! (`z = 7`) is unconstrained.
//!
//! The two letters disagree on the shared edge at `z = 0, 1, 4, 5`, so
//! synthesizing them never yields an exact match on both faces.

use voxel_types::{Dimensions, Pattern};

/// Grid extent of the logo block.
pub const LOGO_DIMENSIONS: Dimensions = match Dimensions::try_new(6, 6, 8) {
    Ok(dims) => dims,
    Err(_) => panic!("logo dimensions must be valid"),
};

const T: bool = true;
const F: bool = false;

/// Rows of the `S` silhouette, `z = 0` first.
pub const LETTER_S: [[bool; 6]; 7] = [
    [T, T, T, T, T, T], // ######
    [T, F, F, F, F, F], // #.....
    [T, F, F, F, F, F], // #.....
    [T, T, T, T, T, T], // ######
    [F, F, F, F, F, T], // .....#
    [F, F, F, F, F, T], // .....#
    [T, T, T, T, T, T], // ######
];

/// Rows of the `A` silhouette, `z = 0` first.
pub const LETTER_A: [[bool; 6]; 7] = [
    [F, F, T, T, F, F], // ..##..
    [F, T, F, F, T, F], // .#..#.
    [T, F, F, F, F, T], // #....#
    [T, T, T, T, T, T], // ######
    [T, F, F, F, F, T], // #....#
    [T, F, F, F, F, T], // #....#
    [T, F, F, F, F, T], // #....#
];

/// The `S` pattern for the `x = 0` face.
#[must_use]
pub fn letter_s() -> Pattern {
    Pattern::from(LETTER_S)
}

/// The `A` pattern for the `y = 0` face.
#[must_use]
pub fn letter_a() -> Pattern {
    Pattern::from(LETTER_A)
}
