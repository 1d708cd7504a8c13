use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

use crate::error::Error;

/// An open byte channel: a buffered file writer in save mode, a buffered
/// file reader in load mode.
///
/// All transfers are exact-length. A read that runs past the end of the
/// stream fails with [`Error::UnexpectedEof`] instead of returning short.
#[derive(Debug)]
pub(crate) enum Channel {
    Sink(BufWriter<File>),
    Source(BufReader<File>),
}

impl Channel {
    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        match self {
            Channel::Sink(sink) => Ok(sink.write_all(bytes)?),
            Channel::Source(_) => unreachable!("a session opens its channel to match its mode"),
        }
    }

    pub(crate) fn read_bytes(&mut self, bytes: &mut [u8]) -> Result<(), Error> {
        match self {
            Channel::Source(source) => Ok(source.read_exact(bytes)?),
            Channel::Sink(_) => unreachable!("a session opens its channel to match its mode"),
        }
    }

    /// Write the u32 count field that prefixes every variable-length payload.
    pub(crate) fn write_count(&mut self, len: usize) -> Result<(), Error> {
        let count = u32::try_from(len).map_err(|_| Error::CountOverflow { len })?;
        self.write_bytes(&count.to_ne_bytes())
    }

    /// Read back a u32 count field.
    pub(crate) fn read_count(&mut self) -> Result<usize, Error> {
        let mut bytes = [0u8; 4];
        self.read_bytes(&mut bytes)?;
        Ok(u32::from_ne_bytes(bytes) as usize)
    }

    pub(crate) fn flush(&mut self) -> Result<(), Error> {
        match self {
            Channel::Sink(sink) => Ok(sink.flush()?),
            Channel::Source(_) => Ok(()),
        }
    }
}
