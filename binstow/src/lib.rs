#![warn(missing_docs)]

//! # Binstow
//!
//! Binstow persists in-memory values to binary files and restores them on a
//! later run. A [`session::Session`] is bound to one file in either
//! [`session::Mode::Save`] or [`session::Mode::Load`]; the same
//! [`session::Session::serialize`] call writes a value or fills it back in,
//! depending on the mode.
//!
//! ## Sessions and streams
//!
//! ```
//! use binstow::session::{Mode, Session};
//!
//! # fn main() -> Result<(), binstow::error::Error> {
//! let dir = std::env::temp_dir().join("binstow-doc-overview");
//! let mut scores = vec![310u32, 250, 180];
//! Session::open_in(&dir, "scores.bin", Mode::Save)?.serialize(&mut scores)?;
//!
//! let mut restored: Vec<u32> = Vec::new();
//! Session::open_in(&dir, "scores.bin", Mode::Load)?.serialize(&mut restored)?;
//! assert_eq!(restored, [310, 250, 180]);
//! # Ok(())
//! # }
//! ```
//!
//! ## The wire format
//!
//! A stream starts with a single root tag block, the length-prefixed
//! [`serialize::Serialize::type_tag`] of the first value serialized into it.
//! A loading session checks that tag once, before the first payload byte,
//! and rejects a stream written as a different type. Everything after the
//! tag block is positional: there are no per-field markers, so reading must
//! issue the same ordered sequence of typed `serialize` calls that writing
//! did. Every variable-length payload carries its own `u32` count field;
//! scalars are raw fixed-width bytes.
//!
//! ## Supported shapes
//!
//! The [`serialize::Shape`] classification is closed: scalars (integers,
//! floats, `bool`, `char`), text ([`String`]), sequences ([`Vec`],
//! [`std::collections::VecDeque`]), fixed sequences (`[T; N]`), sets
//! ([`std::collections::BTreeSet`], [`std::collections::HashSet`]), maps
//! ([`std::collections::BTreeMap`], [`std::collections::HashMap`]),
//! adaptors ([`adapter::Stack`], [`adapter::Queue`],
//! [`std::collections::BinaryHeap`]), and custom aggregates implementing
//! [`serialize::Serialize`] themselves. Containers nest freely because every
//! shape is defined in terms of recursive `serialize` calls.
//!
//! ## What binstow does not do
//!
//! There is no schema evolution, no compression, no encryption, and no
//! cross-machine byte-order normalization: scalars are written in native
//! byte order, and reader and writer must agree on the exact call sequence
//! out of band. Streams are not transactional either; a failure partway
//! through a save leaves a partial file for the caller to clean up.

pub mod adapter;
pub mod error;
pub mod serialize;
pub mod session;

mod io;
mod types;

#[cfg(test)]
mod testing;
