// https://en.wikipedia.org/wiki/Mersenne_Twister
// http://www.math.sci.hiroshima-u.ac.jp/~m-mat/MT/emt.html

pub mod error;
pub use error::{Mt19937Error, Provenance, StateError};

//================================================
//    bit-level pieces of the recurrence
//================================================
pub mod init;
pub mod temper;
pub mod twist;
pub mod uint32;

//================================================
// the versioned state array and its validation
//================================================
pub mod state_array;
pub use state_array::{shared, SharedState};

//================================================
//  generator instances, options and JSON form
//================================================
pub mod generator;
pub use generator::Mt19937;

pub mod options;
pub use options::{Options, Seed, SeedOption};

pub mod serialize;
pub use serialize::{PrngJson, StateJson};
