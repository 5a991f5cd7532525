//! SIMD row materialization using the `wide` crate.
//!
//! Four transition costs are combined per `f64x4` lane group. Lane-wise
//! addition is the same IEEE operation as the scalar path, so results stay
//! bit-identical to the reference solver.

use wide::f64x4;

const LANES: usize = 4;

/// Load 4 f64 values into f64x4.
#[inline]
fn load_f64x4(slice: &[f64]) -> f64x4 {
    f64x4::from([slice[0], slice[1], slice[2], slice[3]])
}

/// Writes `out[l] = prev_cost + pairwise_row[l] + unary_col[l]`.
#[inline]
pub(crate) fn combine_row(prev_cost: f64, pairwise_row: &[f64], unary_col: &[f64], out: &mut [f64]) {
    let len = out.len();
    let simd_end = len / LANES * LANES;
    let prev = f64x4::from([prev_cost; LANES]);

    let mut idx = 0;
    while idx < simd_end {
        let pw = load_f64x4(&pairwise_row[idx..]);
        let un = load_f64x4(&unary_col[idx..]);
        let total = (prev + pw) + un;
        out[idx..idx + LANES].copy_from_slice(&total.to_array());
        idx += LANES;
    }

    // Scalar remainder
    while idx < len {
        out[idx] = prev_cost + pairwise_row[idx] + unary_col[idx];
        idx += 1;
    }
}
