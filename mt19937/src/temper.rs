/*
 * module: temper
 */

// tempering shifts and masks
const U: u32 = 11;
const S: u32 = 7;
const B: u32 = 0x9d2c5680;
const T: u32 = 15;
const C: u32 = 0xefc60000;
const L: u32 = 18;

// 2^26
const TWO_26: f64 = 67108864.0;

// 2^53 - 1
const FLOAT64_MAX_SAFE_INTEGER: f64 = 9007199254740991.0;

// 1 / 2^53
const FLOAT64_NORMALIZATION_CONSTANT: f64 = 1.0 / (FLOAT64_MAX_SAFE_INTEGER + 1.0);

// Declared range of a raw draw. Seeding excludes the all-zero state, but
// temper(0) == 0 so a single raw word of 0 remains possible.
pub const MIN: u32 = 1;
pub const MAX: u32 = u32::MAX;

pub const NORMALIZED_MIN: f64 = 0.0;

// (((2^32-1) >> 5) * 2^26 + ((2^32-1) >> 6)) / 2^53, the largest double below 1 at 53 bits
pub const NORMALIZED_MAX: f64 = FLOAT64_MAX_SAFE_INTEGER * FLOAT64_NORMALIZATION_CONSTANT;

// Tempering transform, compensates for the reduced dimensionality of equidistribution
#[inline]
pub fn temper(y: u32) -> u32 {
    let mut y = y;
    y ^= y >> U;
    y ^= (y << S) & B;
    y ^= (y << T) & C;
    y ^ (y >> L)
}

// Combine two tempered draws into a double on [0, 1) with 53 bits of precision
#[inline]
pub fn normalize(x: u32, y: u32) -> f64 {
    let x = (x >> 5) as f64;
    let y = (y >> 6) as f64;
    (x * TWO_26 + y) * FLOAT64_NORMALIZATION_CONSTANT
}
