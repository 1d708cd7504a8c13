use std::collections::VecDeque;

use crate::error::Error;
use crate::serialize::{Serialize, Shape};
use crate::session::{Mode, Session};

impl<T: Serialize + Default> Serialize for Vec<T> {
    fn type_tag() -> String {
        format!("vec<{}>", T::type_tag())
    }

    fn shape() -> Shape {
        Shape::Sequence
    }

    fn serialize(&mut self, session: &mut Session) -> Result<(), Error> {
        match session.mode() {
            Mode::Save => {
                session.write_count(self.len())?;
                for item in self.iter_mut() {
                    session.serialize(item)?;
                }
                Ok(())
            }
            Mode::Load => {
                let count = session.read_count()?;
                self.clear();
                for _ in 0..count {
                    let mut item = T::default();
                    session.serialize(&mut item)?;
                    self.push(item);
                }
                Ok(())
            }
        }
    }
}

impl<T: Serialize + Default> Serialize for VecDeque<T> {
    fn type_tag() -> String {
        format!("deque<{}>", T::type_tag())
    }

    fn shape() -> Shape {
        Shape::Sequence
    }

    fn serialize(&mut self, session: &mut Session) -> Result<(), Error> {
        match session.mode() {
            Mode::Save => {
                session.write_count(self.len())?;
                for item in self.iter_mut() {
                    session.serialize(item)?;
                }
                Ok(())
            }
            Mode::Load => {
                let count = session.read_count()?;
                self.clear();
                for _ in 0..count {
                    let mut item = T::default();
                    session.serialize(&mut item)?;
                    self.push_back(item);
                }
                Ok(())
            }
        }
    }
}

impl<T: Serialize, const N: usize> Serialize for [T; N] {
    fn type_tag() -> String {
        format!("array<{}, {}>", T::type_tag(), N)
    }

    fn shape() -> Shape {
        Shape::FixedSequence(N)
    }

    // The length is part of the type on both ends, so no count field.
    fn serialize(&mut self, session: &mut Session) -> Result<(), Error> {
        for item in self.iter_mut() {
            session.serialize(item)?;
        }
        Ok(())
    }
}
