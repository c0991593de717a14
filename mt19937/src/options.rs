/*
 * module: options
 */

use crate::error::Mt19937Error;
use crate::state_array::{shared, SharedState};
use serde::Deserialize;

//================================================
// A seed as supplied by the caller, not yet
// checked against the u32 range
//   1234        => SeedOption::Integer(1234)
//   [1234, 5678] => SeedOption::Array(vec![1234, 5678])
//================================================
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SeedOption {
    Integer(i64),
    Array(Vec<i64>),
}

impl From<u32> for SeedOption {
    fn from(seed: u32) -> Self {
        SeedOption::Integer(seed as i64)
    }
}

impl From<&[u32]> for SeedOption {
    fn from(seed: &[u32]) -> Self {
        SeedOption::Array(seed.iter().map(|s| *s as i64).collect())
    }
}

impl From<Vec<u32>> for SeedOption {
    fn from(seed: Vec<u32>) -> Self {
        SeedOption::from(seed.as_slice())
    }
}

//================================================
// A validated seed, a single element array has
// been reduced to its integer
//================================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    Integer(u32),
    Array(Vec<u32>),
}

impl Seed {
    pub fn words(&self) -> Vec<u32> {
        match self {
            Seed::Integer(s) => vec![*s],
            Seed::Array(v) => v.clone(),
        }
    }
}

impl TryFrom<&SeedOption> for Seed {
    type Error = Mt19937Error;

    fn try_from(option: &SeedOption) -> Result<Self, Self::Error> {
        let word = |value: i64| u32::try_from(value).map_err(|_| Mt19937Error::InvalidSeed(format!("{option:?}")));
        match option {
            SeedOption::Integer(s) => Ok(Seed::Integer(word(*s)?)),
            SeedOption::Array(v) if v.is_empty() => Err(Mt19937Error::EmptySeed),
            SeedOption::Array(v) if v.len() == 1 => Ok(Seed::Integer(word(v[0])?)),
            SeedOption::Array(v) => Ok(Seed::Array(v.iter().map(|s| word(*s)).collect::<Result<_, _>>()?)),
        }
    }
}

//================================================
// Construction options, `state` takes precedence
// over `seed`, `copy` defaults to true
//================================================
#[derive(Debug, Clone)]
pub struct Options {
    pub(crate) seed: Option<SeedOption>,
    pub(crate) state: Option<SharedState>,
    pub(crate) copy: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            seed: None,
            state: None,
            copy: true,
        }
    }
}

// the JSON form of Options
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionsFile {
    seed: Option<SeedOption>,
    state: Option<Vec<u32>>,
    copy: Option<bool>,
}

impl Options {
    pub fn new() -> Self {
        Options::default()
    }

    pub fn seed(mut self, seed: impl Into<SeedOption>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    // alias `state`, when copy is false the generator operates on it directly
    pub fn state(mut self, state: SharedState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn state_words(self, words: &[u32]) -> Self {
        self.state(shared(words.to_vec()))
    }

    pub fn copy(mut self, copy: bool) -> Self {
        self.copy = copy;
        self
    }

    // Parse options from a JSON object:
    //   { "seed": 1234 | [1, 2, ...], "state": [...], "copy": true }
    pub fn from_json(text: &str) -> Result<Self, Mt19937Error> {
        let file: OptionsFile = serde_json::from_str(text)?;
        Ok(Options {
            seed: file.seed,
            state: file.state.map(shared),
            copy: file.copy.unwrap_or(true),
        })
    }
}
