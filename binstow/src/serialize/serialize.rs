use crate::error::Error;
use crate::session::Session;

use super::Shape;

/// The contract a type implements to move through a [`Session`].
///
/// `Serialize` is implemented by binstow for scalars, text, and the standard
/// containers. User-defined aggregates opt in by implementing it themselves
/// with [`Shape::Custom`], enumerating their fields in a fixed order; the
/// engine never infers field lists. Because every field recurses back
/// through [`Session::serialize`], aggregates holding containers of other
/// aggregates compose without the engine knowing about them ahead of time:
///
/// ```
/// use binstow::error::Error;
/// use binstow::serialize::{Serialize, Shape};
/// use binstow::session::{Mode, Session};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Player {
///     name: String,
///     score: u32,
/// }
///
/// impl Serialize for Player {
///     fn type_tag() -> String {
///         "player".into()
///     }
///
///     fn shape() -> Shape {
///         Shape::Custom
///     }
///
///     fn serialize(&mut self, session: &mut Session) -> Result<(), Error> {
///         session.serialize(&mut self.name)?;
///         session.serialize(&mut self.score)
///     }
/// }
///
/// # fn main() -> Result<(), Error> {
/// let dir = std::env::temp_dir().join("binstow-doc-serialize");
/// let mut player = Player { name: "ada".into(), score: 7200 };
/// Session::open_in(&dir, "player.bin", Mode::Save)?.serialize(&mut player)?;
///
/// let mut restored = Player::default();
/// Session::open_in(&dir, "player.bin", Mode::Load)?.serialize(&mut restored)?;
/// assert_eq!(restored, player);
/// # Ok(())
/// # }
/// ```
pub trait Serialize {
    /// Stable identifier for this type on the wire.
    ///
    /// The first value serialized into a stream stamps its tag at the
    /// stream's start, and a loading session checks it before reading any
    /// payload. Pick an explicit name and keep it fixed across builds;
    /// container implementations compose their element tags structurally
    /// (for example `vec<i32>`), so type skew between writer and reader is
    /// caught at the root.
    fn type_tag() -> String;

    /// The structural shape whose algorithm encodes this type.
    fn shape() -> Shape;

    /// Write this value to the session's stream in save mode, or overwrite
    /// it with decoded stream contents in load mode.
    fn serialize(&mut self, session: &mut Session) -> Result<(), Error>;
}
