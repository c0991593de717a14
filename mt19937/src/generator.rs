/*
 * module: generator
 */

use crate::error::{Mt19937Error, Provenance};
use crate::init::{create_state, init_state, SEED_ARRAY_INIT_STATE};
use crate::options::{Options, Seed, SeedOption};
use crate::state_array::{self, shared, SharedState, Views, INDEX_OFFSET, SEED_SECTION_OFFSET};
use crate::temper::{self, normalize, temper};
use crate::twist::{twist, Batch};
use log::debug;
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use std::rc::Rc;

//================================================
// A Mersenne Twister over a state array.
//
// With `copy` (the default) the generator owns a
// private clone of its state array. Without it,
// the generator aliases the caller's SharedState
// and every generator holding that buffer sees
// the others' draws and same-length assignments.
//================================================
pub struct Mt19937 {
    buffer: SharedState,
    views: Views,
    copy: bool,
    // true once `buffer` is a caller supplied array
    shared: bool,
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937")
            .field("seed_length", &self.seed_length())
            .field("copy", &self.copy)
            .field("shared", &self.shared)
            .finish()
    }
}

// draw a seed from the operating system
fn entropy() -> Result<u32, Mt19937Error> {
    let mut bytes = [0_u8; 4];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}

// build and initialize a state array for `seed`
fn seeded(seed: &Seed) -> Vec<u32> {
    let mut buffer = state_array::allocate(&seed.words());
    let state = state_array::state_view_mut(&mut buffer);
    match seed {
        Seed::Integer(s) => create_state(state, *s),
        Seed::Array(words) => {
            create_state(state, SEED_ARRAY_INIT_STATE);
            init_state(state, words);
        }
    }
    buffer
}

impl Mt19937 {
    pub const NAME: &'static str = "mt19937";

    pub const MIN: u32 = temper::MIN;
    pub const MAX: u32 = temper::MAX;

    pub const NORMALIZED_MIN: f64 = temper::NORMALIZED_MIN;
    pub const NORMALIZED_MAX: f64 = temper::NORMALIZED_MAX;

    pub fn new(options: Options) -> Result<Self, Mt19937Error> {
        let Options { seed, state, copy } = options;

        // a supplied state wins, `seed` is ignored
        if let Some(state) = state {
            state_array::validate(&state.borrow()).map_err(Mt19937Error::state(Provenance::Option))?;
            let buffer = match copy {
                true => {
                    let words = state.borrow().to_vec();
                    shared(words)
                }
                false => state,
            };
            debug!("{}: restored state, copy={copy}", Self::NAME);
            return Ok(Self::with_buffer(buffer, copy, !copy));
        }

        let seed = match seed {
            Some(option) => Seed::try_from(&option)?,
            None => Seed::Integer(entropy()?),
        };
        debug!("{}: seeded with {seed:?}, copy={copy}", Self::NAME);
        Ok(Self::with_buffer(shared(seeded(&seed)), copy, false))
    }

    pub fn from_seed(seed: impl Into<SeedOption>) -> Result<Self, Mt19937Error> {
        Self::new(Options::new().seed(seed))
    }

    fn with_buffer(buffer: SharedState, copy: bool, shared: bool) -> Self {
        let views = Views::new(&buffer.borrow());
        Mt19937 {
            buffer,
            views,
            copy,
            shared,
        }
    }

    // ==============================================================

    // copy of the seed words
    pub fn seed(&self) -> Vec<u32> {
        self.buffer.borrow()[self.views.seed.clone()].to_vec()
    }

    pub fn seed_length(&self) -> usize {
        self.buffer.borrow()[SEED_SECTION_OFFSET] as usize
    }

    // copy of the whole state array
    pub fn state(&self) -> Vec<u32> {
        self.buffer.borrow().to_vec()
    }

    pub fn state_length(&self) -> usize {
        self.buffer.borrow().len()
    }

    pub fn byte_length(&self) -> usize {
        self.state_length() * std::mem::size_of::<u32>()
    }

    pub fn is_shared(&self) -> bool {
        self.shared
    }

    // Handle to the state array this generator draws from, pass it to
    // `Options::state` with `copy(false)` to build another sharer
    pub fn shared_state(&self) -> SharedState {
        Rc::clone(&self.buffer)
    }

    // Replace the state array.
    //
    // copy:    the private buffer takes a copy of `state`
    // no-copy: when already sharing a buffer of the same length its contents
    //          are overwritten, every sharer sees the new state; otherwise
    //          this generator repoints to `state` and leaves its old sharers
    pub fn set_state(&mut self, state: &SharedState) -> Result<(), Mt19937Error> {
        state_array::validate(&state.borrow()).map_err(Mt19937Error::state(Provenance::Argument))?;

        if Rc::ptr_eq(&self.buffer, state) {
            self.views = Views::new(&self.buffer.borrow());
            return Ok(());
        }

        let same_length = state.borrow().len() == self.buffer.borrow().len();
        match self.copy {
            false if self.shared && same_length => {
                debug!("{}: broadcast state to shared buffer", Self::NAME);
                self.buffer.borrow_mut().copy_from_slice(&state.borrow());
            }
            false => {
                debug!("{}: repoint to new shared buffer", Self::NAME);
                self.buffer = Rc::clone(state);
                self.shared = true;
            }
            true if same_length => self.buffer.borrow_mut().copy_from_slice(&state.borrow()),
            true => {
                let words = state.borrow().to_vec();
                self.buffer = shared(words);
            }
        }
        self.views = Views::new(&self.buffer.borrow());
        Ok(())
    }

    pub fn set_state_words(&mut self, words: &[u32]) -> Result<(), Mt19937Error> {
        self.set_state(&shared(words.to_vec()))
    }

    // ==============================================================

    // next tempered word
    pub fn next_word(&mut self) -> u32 {
        let mut buffer = self.buffer.borrow_mut();
        let i = match Batch::at(buffer[INDEX_OFFSET]) {
            Batch::Buffered(i) => i,
            Batch::Exhausted => {
                twist(&mut buffer[self.views.state.clone()]);
                0
            }
        };
        let r = buffer[self.views.state.start + i];
        buffer[INDEX_OFFSET] = i as u32 + 1;
        temper(r)
    }

    // next double on [0, 1), consumes two words
    pub fn normalized(&mut self) -> f64 {
        let x = self.next_word();
        let y = self.next_word();
        normalize(x, y)
    }

    pub fn words(&mut self) -> impl Iterator<Item = u32> + '_ {
        std::iter::repeat_with(move || self.next_word())
    }

    pub fn doubles(&mut self) -> impl Iterator<Item = f64> + '_ {
        std::iter::repeat_with(move || self.normalized())
    }
}

// Lets the generator drive `rand` distributions
impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    // low word first
    fn next_u64(&mut self) -> u64 {
        let x = self.next_word() as u64;
        let y = self.next_word() as u64;
        (y << 32) | x
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
