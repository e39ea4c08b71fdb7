//! Field-level reflection over plain structs.
//!
//! The mapping engine never sees concrete struct types: it enumerates a
//! source object's own field names and reads or writes them by name through
//! this capability. [`impl_reflect!`] derives the trait for a struct from
//! its field list; fields left out of the list are invisible to mapping.

use crate::error::ReflectError;
use crate::ids::TypeKey;
use crate::value::Value;

/// Reflection capability required of every mappable object.
///
/// Object safe so the engine can take sources as `&dyn Reflect`, which is
/// what makes chained mapping work: the output of one map call is a source
/// like any other.
pub trait Reflect {
    /// Identity of the concrete type, used as half of a registry key.
    fn type_key(&self) -> TypeKey;

    /// The object's own field names, in declaration order.
    ///
    /// Declaration order is observable: case-insensitive matching picks the
    /// first source field that matches a destination field.
    fn field_names(&self) -> Vec<&'static str>;

    /// Read a field by exact name. `None` if the field does not exist.
    fn get_field(&self, name: &str) -> Option<Value>;

    /// Write a field by exact name.
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), ReflectError>;
}

/// Implements [`Reflect`] for a struct over the listed fields.
///
/// Each listed field's type must implement `IntoValue` and `FromValue` and
/// be `Clone`. Fields omitted from the list are neither enumerated, read,
/// nor written.
///
/// ```
/// use objmap_model::{Reflect, Value, impl_reflect};
///
/// #[derive(Default)]
/// struct Person {
///     name: String,
///     age: i64,
/// }
///
/// impl_reflect!(Person { name, age });
///
/// let person = Person { name: "Igor".to_string(), age: 40 };
/// assert_eq!(person.field_names(), vec!["name", "age"]);
/// assert_eq!(person.get_field("name"), Some(Value::Text("Igor".to_string())));
/// ```
#[macro_export]
macro_rules! impl_reflect {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn type_key(&self) -> $crate::TypeKey {
                $crate::TypeKey::of::<$ty>()
            }

            fn field_names(&self) -> ::std::vec::Vec<&'static str> {
                ::std::vec![$(stringify!($field)),*]
            }

            fn get_field(&self, name: &str) -> ::std::option::Option<$crate::Value> {
                match name {
                    $(
                        stringify!($field) => ::std::option::Option::Some(
                            $crate::IntoValue::into_value(self.$field.clone()),
                        ),
                    )*
                    _ => ::std::option::Option::None,
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                value: $crate::Value,
            ) -> ::std::result::Result<(), $crate::ReflectError> {
                match name {
                    $(
                        stringify!($field) => match $crate::FromValue::from_value(value) {
                            ::std::option::Option::Some(converted) => {
                                self.$field = converted;
                                ::std::result::Result::Ok(())
                            }
                            ::std::option::Option::None => ::std::result::Result::Err(
                                $crate::ReflectError::Incompatible {
                                    field: name.to_string(),
                                },
                            ),
                        },
                    )*
                    _ => {
                        let _ = value;
                        ::std::result::Result::Err(
                            $crate::ReflectError::UnknownField(name.to_string()),
                        )
                    }
                }
            }
        }
    };
}
