use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

use crate::error::Error;
use crate::serialize::{Serialize, Shape};
use crate::session::{Mode, Session};

impl<T: Serialize + Ord + Clone + Default> Serialize for BTreeSet<T> {
    fn type_tag() -> String {
        format!("btree_set<{}>", T::type_tag())
    }

    fn shape() -> Shape {
        Shape::SetLike
    }

    fn serialize(&mut self, session: &mut Session) -> Result<(), Error> {
        match session.mode() {
            Mode::Save => {
                session.write_count(self.len())?;
                // Set elements cannot be mutated in place; encode a copy.
                for item in self.iter() {
                    let mut item = item.clone();
                    session.serialize(&mut item)?;
                }
                Ok(())
            }
            Mode::Load => {
                let count = session.read_count()?;
                self.clear();
                for _ in 0..count {
                    let mut item = T::default();
                    session.serialize(&mut item)?;
                    self.insert(item);
                }
                Ok(())
            }
        }
    }
}

impl<T: Serialize + Eq + Hash + Clone + Default> Serialize for HashSet<T> {
    fn type_tag() -> String {
        format!("hash_set<{}>", T::type_tag())
    }

    fn shape() -> Shape {
        Shape::SetLike
    }

    fn serialize(&mut self, session: &mut Session) -> Result<(), Error> {
        match session.mode() {
            Mode::Save => {
                session.write_count(self.len())?;
                for item in self.iter() {
                    let mut item = item.clone();
                    session.serialize(&mut item)?;
                }
                Ok(())
            }
            Mode::Load => {
                let count = session.read_count()?;
                self.clear();
                for _ in 0..count {
                    let mut item = T::default();
                    session.serialize(&mut item)?;
                    self.insert(item);
                }
                Ok(())
            }
        }
    }
}
