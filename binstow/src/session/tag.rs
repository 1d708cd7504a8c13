use tracing::trace;

use crate::error::Error;
use crate::io::channel::Channel;

/// Upper bound on the tag block length the load path will accept. Tags are
/// short composed type names; a longer length field means the stream does
/// not start with a tag block at all.
const MAX_TAG_LEN: usize = 1024;

/// Per-stream root tag state.
///
/// Exactly one tag block exists per stream, at its very start. The first
/// serialize call since the last reset writes it (save) or reads and checks
/// it (load); every later call, including nested recursive ones, skips the
/// protocol entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TagState {
    /// No serialize call has touched the stream since the last reset.
    Pending,
    /// Save mode: the tag block has been written.
    Stamped,
    /// Load mode: the tag block was read and matched the requested type.
    Verified { tag: String },
}

impl TagState {
    /// Write the tag block on the first save-mode call; no-op afterwards.
    pub(crate) fn ensure_stamped(
        &mut self,
        channel: &mut Channel,
        tag: impl FnOnce() -> String,
    ) -> Result<(), Error> {
        if matches!(self, TagState::Pending) {
            let tag = tag();
            channel.write_count(tag.len())?;
            channel.write_bytes(tag.as_bytes())?;
            channel.flush()?;
            trace!(tag = %tag, "stamped root tag");
            *self = TagState::Stamped;
        }
        Ok(())
    }

    /// Read and check the tag block on the first load-mode call; no-op
    /// afterwards. A mismatch fails before any payload byte is consumed.
    pub(crate) fn ensure_verified(
        &mut self,
        channel: &mut Channel,
        requested: impl FnOnce() -> String,
    ) -> Result<(), Error> {
        if matches!(self, TagState::Pending) {
            let len = channel.read_count()?;
            if len > MAX_TAG_LEN {
                return Err(Error::Corrupted("root tag block is longer than any type tag"));
            }
            let mut bytes = vec![0u8; len];
            channel.read_bytes(&mut bytes)?;
            let written = String::from_utf8(bytes)
                .map_err(|_| Error::Corrupted("root tag block is not valid UTF-8"))?;
            let requested = requested();
            if written != requested {
                return Err(Error::TypeMismatch { written, requested });
            }
            trace!(tag = %requested, "verified root tag");
            *self = TagState::Verified { tag: requested };
        }
        Ok(())
    }

    /// The tag read from the stream, if verification has happened.
    pub(crate) fn cached(&self) -> Option<&str> {
        match self {
            TagState::Verified { tag } => Some(tag),
            _ => None,
        }
    }
}
