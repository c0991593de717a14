/*
 * module: serialize
 *
 * JSON envelope of a generator:
 *   {"type":"PRNG","name":"mt19937","state":{"type":"Uint32Array","data":[...]},"params":[]}
 */

use crate::error::Mt19937Error;
use crate::generator::Mt19937;
use crate::options::Options;
use serde::{Deserialize, Serialize};

const PRNG_TYPE: &str = "PRNG";
const ARRAY_TYPE: &str = "Uint32Array";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StateJson {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Vec<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PrngJson {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub state: StateJson,
    // mt19937 takes no parameters
    pub params: Vec<serde_json::Value>,
}

impl Mt19937 {
    pub fn to_json(&self) -> PrngJson {
        PrngJson {
            kind: PRNG_TYPE.into(),
            name: Self::NAME.into(),
            state: StateJson {
                kind: ARRAY_TYPE.into(),
                data: self.state(),
            },
            params: vec![],
        }
    }

    // Restore a generator from its JSON envelope
    pub fn from_json(json: &PrngJson, copy: bool) -> Result<Self, Mt19937Error> {
        if json.kind != PRNG_TYPE || json.name != Self::NAME {
            return Err(Mt19937Error::InvalidJson(format!(
                "expected a {PRNG_TYPE} named {}, found {} named {}",
                Self::NAME,
                json.kind,
                json.name
            )));
        }
        if json.state.kind != ARRAY_TYPE {
            return Err(Mt19937Error::InvalidJson(format!(
                "expected state of type {ARRAY_TYPE}, found {}",
                json.state.kind
            )));
        }
        Self::new(Options::new().state_words(&json.state.data).copy(copy))
    }
}
