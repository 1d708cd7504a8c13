use crate::error::Error;
use crate::serialize::{Serialize, Shape};
use crate::session::{Mode, Session};

impl Serialize for String {
    fn type_tag() -> String {
        "string".into()
    }

    fn shape() -> Shape {
        Shape::Text
    }

    fn serialize(&mut self, session: &mut Session) -> Result<(), Error> {
        match session.mode() {
            Mode::Save => {
                session.write_count(self.len())?;
                session.write_bytes(self.as_bytes())
            }
            Mode::Load => {
                let len = session.read_count()?;
                let mut bytes = vec![0u8; len];
                session.read_bytes(&mut bytes)?;
                *self = String::from_utf8(bytes)
                    .map_err(|_| Error::Corrupted("text payload is not valid UTF-8"))?;
                Ok(())
            }
        }
    }
}
