//! Models Module
//!
//! Response structures decoded from PokeAPI JSON payloads.

mod responses;

pub use responses::*;
