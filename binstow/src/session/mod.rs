//! The serializer session and its per-stream state.

mod session;
mod tag;

pub use session::{Mode, Session};
