//! The serialization contract and the shape classification.

mod serialize;
mod shape;

pub use serialize::Serialize;
pub use shape::{AdapterKind, Shape};
