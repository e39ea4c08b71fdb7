#![deny(unsafe_code)]

pub mod error;
pub mod ids;
pub mod reflect;
pub mod value;

pub use error::{ReflectError, Result};
pub use ids::TypeKey;
pub use reflect::Reflect;
pub use value::{FromValue, IntoValue, Value};
