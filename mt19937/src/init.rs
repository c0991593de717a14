/*
 * module: init
 *
 * Seeding recurrences, see
 * http://www.math.sci.hiroshima-u.ac.jp/~m-mat/MT/MT2002/emt19937ar.html
 */

use crate::uint32::{mix, uimul};

// Knuth TAOCP Vol2. 3rd Ed. P.106
pub const KNUTH_MULTIPLIER: u32 = 1812433253;

// seed for the baseline state an array seed is folded into
pub const SEED_ARRAY_INIT_STATE: u32 = 19650218;

const MAGIC_MULTIPLIER_1: u32 = 1664525;
const MAGIC_MULTIPLIER_2: u32 = 1566083941;

// most significant bit
const MSB: u32 = 0x80000000;

// Fill `state` from a single integer seed
pub fn create_state(state: &mut [u32], s: u32) {
    state[0] = s;
    for i in 1..state.len() {
        state[i] = uimul(mix(state[i - 1]), KNUTH_MULTIPLIER).wrapping_add(i as u32);
    }
}

// Fold the words of an array seed into a `state` already initialized by
// `create_state(state, SEED_ARRAY_INIT_STATE)`
pub fn init_state(state: &mut [u32], seed: &[u32]) {
    let n = state.len();
    let m = seed.len();
    let mut i = 1;
    let mut j = 0;

    for _ in 0..n.max(m) {
        let s = uimul(mix(state[i - 1]), MAGIC_MULTIPLIER_1);
        // non-linear
        state[i] = (state[i] ^ s).wrapping_add(seed[j]).wrapping_add(j as u32);

        i += 1;
        j += 1;
        if i >= n {
            state[0] = state[n - 1];
            i = 1;
        }
        if j >= m {
            j = 0;
        }
    }
    for _ in 0..n - 1 {
        let s = uimul(mix(state[i - 1]), MAGIC_MULTIPLIER_2);
        // non-linear
        state[i] = (state[i] ^ s).wrapping_sub(i as u32);

        i += 1;
        if i >= n {
            state[0] = state[n - 1];
            i = 1;
        }
    }

    // assures a non-zero initial state
    state[0] = MSB;
}
