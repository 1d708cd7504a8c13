use std::path::PathBuf;

use tracing::debug;

use crate::error::Error;
use crate::io::channel::Channel;
use crate::io::location::Location;
use crate::serialize::Serialize;

use super::tag::TagState;

/// The direction a session moves data in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Values are written to the stream.
    Save,
    /// Values are read from the stream into the destinations the caller
    /// passes in.
    Load,
}

/// A serialization session bound to one file.
///
/// A session owns one open byte channel (a sink in [`Mode::Save`], a source
/// in [`Mode::Load`]), the `(directory, filename)` location it was opened
/// over, and the per-stream root tag state. Values move through it with
/// [`Session::serialize`]; the stream is a positional schema, so loading
/// must issue the same ordered sequence of typed calls that saving did.
///
/// ```
/// use binstow::session::{Mode, Session};
///
/// # fn main() -> Result<(), binstow::error::Error> {
/// let dir = std::env::temp_dir().join("binstow-doc-session");
/// let mut count = 22i32;
/// Session::open_in(&dir, "count.bin", Mode::Save)?.serialize(&mut count)?;
///
/// let mut restored = 0i32;
/// Session::open_in(&dir, "count.bin", Mode::Load)?.serialize(&mut restored)?;
/// assert_eq!(restored, 22);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Session {
    location: Location,
    mode: Mode,
    // None only after a failed reset; every operation then returns
    // `Error::Closed` until a reset succeeds.
    channel: Option<Channel>,
    tag: TagState,
}

impl Session {
    /// Open a stream over `filename` in the current directory.
    ///
    /// Save mode truncates or creates the file; load mode fails with
    /// [`Error::CannotOpenForRead`] right here if the file is absent.
    pub fn open(filename: impl Into<String>, mode: Mode) -> Result<Self, Error> {
        Self::open_in(".", filename, mode)
    }

    /// Open a stream over `filename` inside `directory`, creating the
    /// directory in save mode if it is missing.
    pub fn open_in(
        directory: impl Into<PathBuf>,
        filename: impl Into<String>,
        mode: Mode,
    ) -> Result<Self, Error> {
        let location = Location::new(directory, filename);
        let channel = location.open(mode)?;
        Ok(Self { location, mode, channel: Some(channel), tag: TagState::Pending })
    }

    /// Move one value through the stream: write it in save mode, overwrite
    /// it with decoded stream contents in load mode.
    ///
    /// The first call since the last reset also writes or verifies the root
    /// tag block; nested and later calls skip that step. Loading a type
    /// whose tag differs from the one the stream was written with fails
    /// with [`Error::TypeMismatch`] before any payload byte is consumed.
    pub fn serialize<T: Serialize>(&mut self, value: &mut T) -> Result<(), Error> {
        let mode = self.mode;
        let channel = self.channel.as_mut().ok_or(Error::Closed)?;
        match mode {
            Mode::Save => self.tag.ensure_stamped(channel, T::type_tag)?,
            Mode::Load => self.tag.ensure_verified(channel, T::type_tag)?,
        }
        value.serialize(self)
    }

    /// Close the stream, clear the tag state, and reopen it over the same
    /// location and mode.
    pub fn reset_stream(&mut self) -> Result<(), Error> {
        self.reopen(self.mode)
    }

    /// Point the session at a different filename and reset the stream
    /// immediately.
    pub fn change_name(&mut self, filename: impl Into<String>) -> Result<(), Error> {
        self.location.set_filename(filename);
        self.reopen(self.mode)
    }

    /// Point the session at a different directory and reset the stream
    /// immediately.
    pub fn change_directory(&mut self, directory: impl Into<PathBuf>) -> Result<(), Error> {
        self.location.set_directory(directory);
        self.reopen(self.mode)
    }

    /// Switch the session's direction.
    ///
    /// Changing to a different mode performs a full reset, so the channel
    /// always matches the declared intent. Setting the mode the session
    /// already has is a no-op.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error> {
        if mode != self.mode {
            self.reopen(mode)?;
        }
        Ok(())
    }

    /// The session's current direction.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the session writes values to the stream.
    pub fn is_save(&self) -> bool {
        self.mode == Mode::Save
    }

    /// Whether the session reads values from the stream.
    pub fn is_load(&self) -> bool {
        self.mode == Mode::Load
    }

    /// The root tag read from the stream, available once the first
    /// load-mode serialize call has verified it.
    pub fn root_tag(&self) -> Option<&str> {
        self.tag.cached()
    }

    /// The full path of the file the session is bound to.
    pub fn path(&self) -> PathBuf {
        self.location.path()
    }

    /// Flush buffered writes through to the file.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.channel.as_mut().ok_or(Error::Closed)?.flush()
    }

    fn reopen(&mut self, mode: Mode) -> Result<(), Error> {
        // Flush and drop the old handle before reopening: in save mode the
        // reopen truncates the same file.
        let flushed = match &mut self.channel {
            Some(channel) => channel.flush(),
            None => Ok(()),
        };
        self.channel = None;
        self.tag = TagState::Pending;
        flushed?;
        debug!(path = %self.location.path().display(), ?mode, "resetting stream");
        self.channel = Some(self.location.open(mode)?);
        self.mode = mode;
        Ok(())
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.channel.as_mut().ok_or(Error::Closed)?.write_bytes(bytes)
    }

    pub(crate) fn read_bytes(&mut self, bytes: &mut [u8]) -> Result<(), Error> {
        self.channel.as_mut().ok_or(Error::Closed)?.read_bytes(bytes)
    }

    pub(crate) fn write_count(&mut self, len: usize) -> Result<(), Error> {
        self.channel.as_mut().ok_or(Error::Closed)?.write_count(len)
    }

    pub(crate) fn read_count(&mut self) -> Result<usize, Error> {
        self.channel.as_mut().ok_or(Error::Closed)?.read_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //--------------------------------------------------------------------------
    // Mode introspection
    //--------------------------------------------------------------------------
    #[test]
    fn mode_flags_follow_the_constructor() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open_in(dir.path(), "data.bin", Mode::Save).unwrap();
        assert!(session.is_save());
        assert!(!session.is_load());
        assert_eq!(session.mode(), Mode::Save);
    }

    #[test]
    fn set_mode_to_the_current_mode_keeps_the_stream() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::open_in(dir.path(), "data.bin", Mode::Save).unwrap();
        session.serialize(&mut 5u8).unwrap();
        session.set_mode(Mode::Save).unwrap();
        // The tag block would be written again if the stream had reset.
        session.serialize(&mut 6u8).unwrap();
        drop(session);
        let written = std::fs::read(dir.path().join("data.bin")).unwrap();
        assert_eq!(written.len(), (4 + 2) + 1 + 1);
    }

    #[test]
    fn switching_modes_reopens_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::open_in(dir.path(), "data.bin", Mode::Save).unwrap();
        session.serialize(&mut 41u16).unwrap();
        session.set_mode(Mode::Load).unwrap();
        let mut restored = 0u16;
        session.serialize(&mut restored).unwrap();
        assert_eq!(restored, 41);
    }

    //--------------------------------------------------------------------------
    // Resets and rebinding
    //--------------------------------------------------------------------------
    #[test]
    fn change_name_writes_a_fresh_stream() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::open_in(dir.path(), "first.bin", Mode::Save).unwrap();
        session.serialize(&mut 1u32).unwrap();
        session.change_name("second.bin").unwrap();
        session.serialize(&mut 2u32).unwrap();
        drop(session);
        // Both files carry their own tag block and payload.
        let first = std::fs::read(dir.path().join("first.bin")).unwrap();
        let second = std::fs::read(dir.path().join("second.bin")).unwrap();
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn change_directory_resolves_under_the_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::open_in(dir.path(), "data.bin", Mode::Save).unwrap();
        let nested = dir.path().join("nested");
        session.change_directory(&nested).unwrap();
        session.serialize(&mut 9u8).unwrap();
        assert_eq!(session.path(), nested.join("data.bin"));
        assert!(nested.join("data.bin").exists());
    }

    #[test]
    fn reset_stream_truncates_in_save_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::open_in(dir.path(), "data.bin", Mode::Save).unwrap();
        session.serialize(&mut 7u64).unwrap();
        session.reset_stream().unwrap();
        session.flush().unwrap();
        let written = std::fs::read(dir.path().join("data.bin")).unwrap();
        assert!(written.is_empty());
    }

    #[test]
    fn a_failed_reset_leaves_the_session_closed() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"plain file").unwrap();
        let mut session = Session::open_in(dir.path(), "data.bin", Mode::Save).unwrap();
        // The new directory path runs through a plain file and cannot exist.
        assert!(session.change_directory(blocker.join("sub")).is_err());
        assert_eq!(session.serialize(&mut 1u8), Err(Error::Closed));
        assert_eq!(session.flush(), Err(Error::Closed));
    }

    //--------------------------------------------------------------------------
    // Root tag introspection
    //--------------------------------------------------------------------------
    #[test]
    fn root_tag_is_cached_after_the_first_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut saver = Session::open_in(dir.path(), "data.bin", Mode::Save).unwrap();
        saver.serialize(&mut 3.5f64).unwrap();
        drop(saver);
        let mut loader = Session::open_in(dir.path(), "data.bin", Mode::Load).unwrap();
        assert_eq!(loader.root_tag(), None);
        let mut restored = 0.0f64;
        loader.serialize(&mut restored).unwrap();
        assert_eq!(loader.root_tag(), Some("f64"));
    }
}
