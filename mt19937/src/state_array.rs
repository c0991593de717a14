/*
 * module: state_array
 *
 * The persisted generator state, a flat list of u32 words:
 *
 * | version | num_sections | state_length | ...state | other_length | state_index | seed_length | ...seed |
 *
 * Anytime this layout changes STATE_ARRAY_VERSION must be incremented.
 */

use crate::error::StateError;
use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

// degree of recurrence, the number of state words
pub const N: usize = 624;

pub const STATE_ARRAY_VERSION: u32 = 1;
pub const NUM_STATE_SECTIONS: u32 = 3; // state, other, seed

// index of the length word preceding each section
pub const STATE_SECTION_OFFSET: usize = 2;
pub const OTHER_SECTION_OFFSET: usize = N + 3;
pub const SEED_SECTION_OFFSET: usize = N + 5;

// index of the cursor into the state words, the only "other" word
pub const INDEX_OFFSET: usize = OTHER_SECTION_OFFSET + 1;

// version + num_sections + state_length + N + other_length + state_index + seed_length
pub const STATE_FIXED_LENGTH: usize = N + 6;

// A state array that may be aliased by several generators. Its length is
// fixed, only `Mt19937::set_state` moves a generator to a differently sized one.
pub type SharedState = Rc<RefCell<Box<[u32]>>>;

pub fn shared(words: Vec<u32>) -> SharedState {
    Rc::new(RefCell::new(words.into_boxed_slice()))
}

// Check every layout invariant, reporting the first one violated
pub fn validate(buffer: &[u32]) -> Result<(), StateError> {
    // a state array must carry at least one seed word
    if buffer.len() < STATE_FIXED_LENGTH + 1 {
        return Err(StateError::InsufficientLength {
            expected: STATE_FIXED_LENGTH + 1,
            actual: buffer.len(),
        });
    }
    if buffer[0] != STATE_ARRAY_VERSION {
        return Err(StateError::Version {
            expected: STATE_ARRAY_VERSION,
            actual: buffer[0],
        });
    }
    if buffer[1] != NUM_STATE_SECTIONS {
        return Err(StateError::SectionCount {
            expected: NUM_STATE_SECTIONS,
            actual: buffer[1],
        });
    }
    if buffer[STATE_SECTION_OFFSET] != N as u32 {
        return Err(StateError::StateLength {
            expected: N as u32,
            actual: buffer[STATE_SECTION_OFFSET],
        });
    }
    if buffer[OTHER_SECTION_OFFSET] != 1 {
        return Err(StateError::OtherLength {
            expected: 1,
            actual: buffer[OTHER_SECTION_OFFSET],
        });
    }
    let seed_length = buffer.len() - STATE_FIXED_LENGTH;
    if buffer[SEED_SECTION_OFFSET] as usize != seed_length {
        return Err(StateError::SeedLength {
            expected: seed_length,
            actual: buffer[SEED_SECTION_OFFSET],
        });
    }
    Ok(())
}

// Windows over the "state" and "seed" sections of one buffer.
// Only valid for the buffer they were computed from, recompute on replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Views {
    pub state: Range<usize>,
    pub seed: Range<usize>,
}

impl Views {
    pub fn new(buffer: &[u32]) -> Self {
        let seed_start = SEED_SECTION_OFFSET + 1;
        Views {
            state: STATE_SECTION_OFFSET + 1..STATE_SECTION_OFFSET + 1 + N,
            seed: seed_start..seed_start + buffer[SEED_SECTION_OFFSET] as usize,
        }
    }
}

pub fn state_view(buffer: &[u32]) -> &[u32] {
    &buffer[Views::new(buffer).state]
}

pub fn state_view_mut(buffer: &mut [u32]) -> &mut [u32] {
    let views = Views::new(buffer);
    &mut buffer[views.state]
}

pub fn seed_view(buffer: &[u32]) -> &[u32] {
    &buffer[Views::new(buffer).seed]
}

// A fresh state array holding a copy of `seed`; the state words are left
// zeroed for the initializer and the cursor is parked at N so the first
// draw twists.
pub fn allocate(seed: &[u32]) -> Vec<u32> {
    let mut buffer = vec![0; STATE_FIXED_LENGTH + seed.len()];
    buffer[0] = STATE_ARRAY_VERSION;
    buffer[1] = NUM_STATE_SECTIONS;
    buffer[STATE_SECTION_OFFSET] = N as u32;
    buffer[OTHER_SECTION_OFFSET] = 1;
    buffer[INDEX_OFFSET] = N as u32;
    buffer[SEED_SECTION_OFFSET] = seed.len() as u32;
    buffer[SEED_SECTION_OFFSET + 1..].copy_from_slice(seed);
    buffer
}
