extern crate bit_vec;
extern crate serde;

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate log;

#[cfg(test)]
extern crate pretty_env_logger;
#[cfg(test)]
extern crate serde_json;

pub mod bin;
pub mod board;
pub mod error;
pub mod primitives;

pub use bin::{Bin, Encodable};
pub use board::Board;
pub use error::Error;
pub use primitives::{BoardLocation, Direction, Move, Pos};
