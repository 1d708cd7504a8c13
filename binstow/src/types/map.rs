use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::error::Error;
use crate::serialize::{Serialize, Shape};
use crate::session::{Mode, Session};

impl<K, V> Serialize for BTreeMap<K, V>
where
    K: Serialize + Ord + Clone + Default,
    V: Serialize + Default,
{
    fn type_tag() -> String {
        format!("btree_map<{}, {}>", K::type_tag(), V::type_tag())
    }

    fn shape() -> Shape {
        Shape::MapLike
    }

    fn serialize(&mut self, session: &mut Session) -> Result<(), Error> {
        match session.mode() {
            Mode::Save => {
                session.write_count(self.len())?;
                for (key, value) in self.iter_mut() {
                    let mut key = key.clone();
                    session.serialize(&mut key)?;
                    session.serialize(value)?;
                }
                Ok(())
            }
            Mode::Load => {
                let count = session.read_count()?;
                self.clear();
                for _ in 0..count {
                    let mut key = K::default();
                    let mut value = V::default();
                    session.serialize(&mut key)?;
                    session.serialize(&mut value)?;
                    self.insert(key, value);
                }
                Ok(())
            }
        }
    }
}

impl<K, V> Serialize for HashMap<K, V>
where
    K: Serialize + Eq + Hash + Clone + Default,
    V: Serialize + Default,
{
    fn type_tag() -> String {
        format!("hash_map<{}, {}>", K::type_tag(), V::type_tag())
    }

    fn shape() -> Shape {
        Shape::MapLike
    }

    fn serialize(&mut self, session: &mut Session) -> Result<(), Error> {
        match session.mode() {
            Mode::Save => {
                session.write_count(self.len())?;
                for (key, value) in self.iter_mut() {
                    let mut key = key.clone();
                    session.serialize(&mut key)?;
                    session.serialize(value)?;
                }
                Ok(())
            }
            Mode::Load => {
                let count = session.read_count()?;
                self.clear();
                for _ in 0..count {
                    let mut key = K::default();
                    let mut value = V::default();
                    session.serialize(&mut key)?;
                    session.serialize(&mut value)?;
                    self.insert(key, value);
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use crate::error::Error;
    use crate::serialize::{Serialize, Shape};
    use crate::testing;

    #[test]
    fn btree_map_round_trips() -> Result<(), Error> {
        let mut values: BTreeMap<String, u64> = BTreeMap::new();
        values.insert("one".into(), 1);
        values.insert("two".into(), 2);
        values.insert("three".into(), 3);
        assert_eq!(testing::round_trip(&mut values)?, values);
        Ok(())
    }

    #[test]
    fn hash_map_round_trips() -> Result<(), Error> {
        let mut values: HashMap<u32, String> = HashMap::new();
        values.insert(7, "seven".into());
        values.insert(11, "eleven".into());
        assert_eq!(testing::round_trip(&mut values)?, values);
        Ok(())
    }

    #[test]
    fn empty_map_round_trips() -> Result<(), Error> {
        let mut values: BTreeMap<u8, u8> = BTreeMap::new();
        assert!(testing::round_trip(&mut values)?.is_empty());
        Ok(())
    }

    #[test]
    fn map_values_can_be_containers() -> Result<(), Error> {
        let mut values: BTreeMap<String, Vec<i16>> = BTreeMap::new();
        values.insert("primes".into(), vec![2, 3, 5, 7]);
        values.insert("none".into(), vec![]);
        assert_eq!(testing::round_trip(&mut values)?, values);
        Ok(())
    }

    #[test]
    fn maps_classify_as_map_like() {
        assert_eq!(<BTreeMap<String, u64> as Serialize>::shape(), Shape::MapLike);
        assert_eq!(<BTreeMap<String, u64> as Serialize>::type_tag(), "btree_map<string, u64>");
    }
}
