/*
 * module: twist
 */

use crate::state_array::N;
use log::trace;

// middle word, an offset used in the recurrence relation, 1 <= M < N
pub const M: usize = 397;

// coefficients of the rational normal form twist matrix
pub const MATRIX_A: u32 = 0x9908b0df;

const UPPER_MASK: u32 = 0x80000000;
const LOWER_MASK: u32 = 0x7fffffff;

// MAG01[x] = x * MATRIX_A for x in {0, 1}
const MAG01: [u32; 2] = [0, MATRIX_A];

// Where the cursor stands relative to the current batch of raw words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Batch {
    // index of the next unread raw word
    Buffered(usize),
    // every raw word has been read, the batch must be regenerated
    Exhausted,
}

impl Batch {
    pub fn at(index: u32) -> Self {
        match (index as usize) < N {
            true => Batch::Buffered(index as usize),
            false => Batch::Exhausted,
        }
    }
}

#[inline]
fn next(upper: u32, lower: u32, far: u32) -> u32 {
    let w = (upper & UPPER_MASK) | (lower & LOWER_MASK);
    far ^ (w >> 1) ^ MAG01[(w & 1) as usize]
}

// Regenerate all N words of `state` in place:
//   state[i] = state[(i + M) % N] ^ twist(state[i], state[(i + 1) % N])
// unrolled into the three ranges where the modular indices don't wrap
pub fn twist(state: &mut [u32]) {
    trace!("twist");
    let k = N - M;
    for i in 0..k {
        state[i] = next(state[i], state[i + 1], state[i + M]);
    }
    for i in k..N - 1 {
        state[i] = next(state[i], state[i + 1], state[i - k]);
    }
    state[N - 1] = next(state[N - 1], state[0], state[M - 1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::create_state;

    // the recurrence written with modular indexing
    fn twist_modular(state: &mut [u32]) {
        for i in 0..N {
            state[i] = next(state[i], state[(i + 1) % N], state[(i + M) % N]);
        }
    }

    #[test]
    fn unrolled_matches_modular() {
        let mut a = [0_u32; N];
        create_state(&mut a, 5489);
        let mut b = a;
        for _ in 0..3 {
            twist(&mut a);
            twist_modular(&mut b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn twist_changes_every_batch() {
        let mut state = [0_u32; N];
        create_state(&mut state, 1);
        let before = state;
        twist(&mut state);
        assert_ne!(before, state);
    }

    #[test]
    fn batch_cursor() {
        assert_eq!(Batch::at(0), Batch::Buffered(0));
        assert_eq!(Batch::at(623), Batch::Buffered(623));
        assert_eq!(Batch::at(624), Batch::Exhausted);
        assert_eq!(Batch::at(u32::MAX), Batch::Exhausted);
    }

    #[test]
    fn odd_mixing_word_applies_matrix() {
        assert_eq!(next(0, 1, 0), MATRIX_A);
        assert_eq!(next(0, 2, 0), 1);
        assert_eq!(next(UPPER_MASK, 0, 0), 0x40000000);
    }
}
