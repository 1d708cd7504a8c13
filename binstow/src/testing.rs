//! Helpers shared by the unit tests.

use std::path::Path;

use crate::error::Error;
use crate::serialize::Serialize;
use crate::session::{Mode, Session};

pub(crate) fn save_to<T: Serialize>(dir: &Path, name: &str, value: &mut T) -> Result<(), Error> {
    let mut session = Session::open_in(dir, name, Mode::Save)?;
    session.serialize(value)?;
    session.flush()
}

pub(crate) fn load_from<T: Serialize + Default>(dir: &Path, name: &str) -> Result<T, Error> {
    let mut value = T::default();
    Session::open_in(dir, name, Mode::Load)?.serialize(&mut value)?;
    Ok(value)
}

pub(crate) fn round_trip<T: Serialize + Default>(value: &mut T) -> Result<T, Error> {
    let dir = tempfile::tempdir().expect("temp dir");
    save_to(dir.path(), "round_trip.bin", value)?;
    load_from(dir.path(), "round_trip.bin")
}

/// Write a stream by hand: a tag block followed by raw payload bytes.
pub(crate) fn write_raw(dir: &Path, name: &str, tag: &str, payload: &[u8]) {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&(tag.len() as u32).to_ne_bytes());
    bytes.extend_from_slice(tag.as_bytes());
    bytes.extend_from_slice(payload);
    std::fs::write(dir.join(name), bytes).expect("write raw stream");
}
