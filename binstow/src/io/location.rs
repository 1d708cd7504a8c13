use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use tracing::debug;

use crate::error::Error;
use crate::io::channel::Channel;
use crate::session::Mode;

/// The `(directory, filename)` pair a session's stream is bound to.
#[derive(Debug, Clone)]
pub(crate) struct Location {
    directory: PathBuf,
    filename: String,
}

impl Location {
    pub(crate) fn new(directory: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self { directory: directory.into(), filename: filename.into() }
    }

    pub(crate) fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }

    pub(crate) fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = filename.into();
    }

    pub(crate) fn set_directory(&mut self, directory: impl Into<PathBuf>) {
        self.directory = directory.into();
    }

    /// Open a byte channel over the location's file.
    ///
    /// Save mode creates the directory if it is missing and truncates the
    /// file; load mode requires the file to exist.
    pub(crate) fn open(&self, mode: Mode) -> Result<Channel, Error> {
        if self.filename.is_empty() {
            return Err(Error::MissingFilename);
        }
        let path = self.path();
        match mode {
            Mode::Save => {
                fs::create_dir_all(&self.directory)
                    .map_err(|error| Error::CannotOpenForWrite { path: path.clone(), kind: error.kind() })?;
                let file = File::create(&path)
                    .map_err(|error| Error::CannotOpenForWrite { path: path.clone(), kind: error.kind() })?;
                debug!(path = %path.display(), "opened stream for writing");
                Ok(Channel::Sink(BufWriter::new(file)))
            }
            Mode::Load => {
                let file = File::open(&path)
                    .map_err(|error| Error::CannotOpenForRead { path: path.clone(), kind: error.kind() })?;
                debug!(path = %path.display(), "opened stream for reading");
                Ok(Channel::Source(BufReader::new(file)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let location = Location::new(&nested, "data.bin");
        assert!(location.open(Mode::Save).is_ok());
        assert!(nested.join("data.bin").exists());
    }

    #[test]
    fn load_of_a_missing_file_fails_at_open() {
        let dir = tempfile::tempdir().unwrap();
        let location = Location::new(dir.path(), "absent.bin");
        let error = location.open(Mode::Load).unwrap_err();
        assert!(matches!(error, Error::CannotOpenForRead { .. }));
    }

    #[test]
    fn empty_filename_is_rejected_in_both_modes() {
        let dir = tempfile::tempdir().unwrap();
        let location = Location::new(dir.path(), "");
        assert_eq!(location.open(Mode::Save).unwrap_err(), Error::MissingFilename);
        assert_eq!(location.open(Mode::Load).unwrap_err(), Error::MissingFilename);
    }

    #[test]
    fn renaming_changes_the_resolved_path() {
        let mut location = Location::new("base", "first.bin");
        location.set_filename("second.bin");
        location.set_directory("other");
        assert_eq!(location.path(), PathBuf::from("other").join("second.bin"));
    }
}
