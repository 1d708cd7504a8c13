use crate::error::Error;
use crate::serialize::{Serialize, Shape};
use crate::session::{Mode, Session};

macro_rules! impl_scalar {
    ($type:ty, $tag:literal) => {
        impl Serialize for $type {
            fn type_tag() -> String {
                $tag.into()
            }

            fn shape() -> Shape {
                Shape::Scalar
            }

            fn serialize(&mut self, session: &mut Session) -> Result<(), Error> {
                match session.mode() {
                    Mode::Save => session.write_bytes(&self.to_ne_bytes()),
                    Mode::Load => {
                        let mut bytes = [0u8; std::mem::size_of::<$type>()];
                        session.read_bytes(&mut bytes)?;
                        *self = <$type>::from_ne_bytes(bytes);
                        Ok(())
                    }
                }
            }
        }
    };
}

impl_scalar!(u8, "u8");
impl_scalar!(u16, "u16");
impl_scalar!(u32, "u32");
impl_scalar!(u64, "u64");
impl_scalar!(i8, "i8");
impl_scalar!(i16, "i16");
impl_scalar!(i32, "i32");
impl_scalar!(i64, "i64");
impl_scalar!(f32, "f32");
impl_scalar!(f64, "f64");

impl Serialize for bool {
    fn type_tag() -> String {
        "bool".into()
    }

    fn shape() -> Shape {
        Shape::Scalar
    }

    fn serialize(&mut self, session: &mut Session) -> Result<(), Error> {
        match session.mode() {
            Mode::Save => session.write_bytes(&[*self as u8]),
            Mode::Load => {
                let mut byte = [0u8; 1];
                session.read_bytes(&mut byte)?;
                *self = match byte[0] {
                    0 => false,
                    1 => true,
                    _ => return Err(Error::Corrupted("boolean byte is neither 0 nor 1")),
                };
                Ok(())
            }
        }
    }
}

impl Serialize for char {
    fn type_tag() -> String {
        "char".into()
    }

    fn shape() -> Shape {
        Shape::Scalar
    }

    fn serialize(&mut self, session: &mut Session) -> Result<(), Error> {
        match session.mode() {
            Mode::Save => session.write_bytes(&(*self as u32).to_ne_bytes()),
            Mode::Load => {
                let mut bytes = [0u8; 4];
                session.read_bytes(&mut bytes)?;
                *self = char::from_u32(u32::from_ne_bytes(bytes))
                    .ok_or(Error::Corrupted("character scalar is not a valid code point"))?;
                Ok(())
            }
        }
    }
}
