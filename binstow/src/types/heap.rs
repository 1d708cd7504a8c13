use std::collections::BinaryHeap;

use crate::error::Error;
use crate::serialize::{AdapterKind, Serialize, Shape};
use crate::session::{Mode, Session};

impl<T: Serialize + Ord + Clone + Default> Serialize for BinaryHeap<T> {
    fn type_tag() -> String {
        format!("binary_heap<{}>", T::type_tag())
    }

    fn shape() -> Shape {
        Shape::Adapter(AdapterKind::PriorityOrder)
    }

    fn serialize(&mut self, session: &mut Session) -> Result<(), Error> {
        match session.mode() {
            Mode::Save => {
                session.write_count(self.len())?;
                // Drain a copy in pop order; the original heap stays intact.
                let mut drained = self.clone();
                while let Some(mut item) = drained.pop() {
                    session.serialize(&mut item)?;
                }
                Ok(())
            }
            Mode::Load => {
                let count = session.read_count()?;
                self.clear();
                // Re-inserting restores the heap property, so draining the
                // rebuilt heap reproduces the stored pop order.
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
