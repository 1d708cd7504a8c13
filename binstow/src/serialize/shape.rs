/// The closed classification that selects a value's encoding algorithm.
///
/// Every [`crate::serialize::Serialize`] implementation reports exactly one
/// shape through [`crate::serialize::Serialize::shape`]. The shape fixes the
/// wire layout of the value's payload; the glossary is:
///
/// | Shape              | Payload                                    |
/// |--------------------|--------------------------------------------|
/// | `Scalar`           | raw fixed-width bytes                      |
/// | `Text`             | `u32` length, then raw bytes               |
/// | `Sequence`         | `u32` count, then each element             |
/// | `FixedSequence(n)` | each element, no count field               |
/// | `SetLike`          | `u32` count, then each element             |
/// | `MapLike`          | `u32` count, then a key and value per entry|
/// | `Adapter(_)`       | the drained elements as a sequence         |
/// | `Custom`           | whatever the type's own implementation does|
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A fixed-width value written as its raw byte pattern; the width is
    /// implicit in the static type on both ends.
    Scalar,
    /// Length-prefixed text bytes.
    Text,
    /// A resizable, ordered, homogeneous container.
    Sequence,
    /// An ordered container whose length is part of its type, so no count
    /// field is stored.
    FixedSequence(usize),
    /// Unique elements, encoded in the container's native iteration order.
    /// Whether that order survives a round trip is a property of the
    /// destination container, not of the codec.
    SetLike,
    /// Unique keys mapped to values. A map also iterates like a set of
    /// pairs; classification picks `MapLike` first, so maps always encode
    /// as keyed entries.
    MapLike,
    /// A container exposing only a restricted access order, encoded as the
    /// sequence of its elements in pop order.
    Adapter(AdapterKind),
    /// A user-defined aggregate that enumerates its own fields.
    Custom,
}

/// The access discipline of a [`Shape::Adapter`] container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    /// Last in, first out.
    Stack,
    /// First in, first out.
    Queue,
    /// Pops in the order defined by the elements' ordering rule.
    PriorityOrder,
}
