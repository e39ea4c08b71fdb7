#![deny(unsafe_code)]

//! Runtime object-to-object mapping.
//!
//! A [`MappingRegistry`] holds one [`MappingDefinition`] per ordered
//! (source type, destination type) pair; a [`MappingEngine`] executes a
//! definition by constructing the destination with `Default` and filling
//! its fields from the source, either by name-based copying or through
//! per-field [`FieldOverrides`]. [`ObjectMapper`] bundles the two for the
//! common case of a single owned registry.

pub mod engine;
pub mod error;
pub mod overrides;
pub mod registry;

pub use engine::{MapOptions, MappingEngine};
pub use error::{MapError, Result};
pub use overrides::{FieldOverrides, FieldRule, TransformFn};
pub use registry::{MappingDefinition, MappingRegistry};

use objmap_model::Reflect;

/// Convenience facade owning a [`MappingRegistry`].
///
/// ```
/// use objmap_map::{FieldOverrides, MapOptions, ObjectMapper};
/// use objmap_model::{Reflect, Value, impl_reflect};
///
/// #[derive(Default)]
/// struct Person {
///     name: String,
///     surname: String,
/// }
/// impl_reflect!(Person { name, surname });
///
/// #[derive(Default)]
/// struct Badge {
///     name: String,
/// }
/// impl_reflect!(Badge { name });
///
/// let mut mapper = ObjectMapper::new();
/// mapper.register_with::<Person, Badge>(FieldOverrides::new().transform("name", |src| {
///     let name = src.get_field("name").unwrap_or(Value::Null);
///     let surname = src.get_field("surname").unwrap_or(Value::Null);
///     Ok(Value::Text(format!("{name} {surname}")))
/// }))?;
///
/// let person = Person {
///     name: "Igor".to_string(),
///     surname: "Hnizdo".to_string(),
/// };
/// let badge: Badge = mapper.map(&person, &MapOptions::default())?;
/// assert_eq!(badge.name, "Igor Hnizdo");
/// # Ok::<(), objmap_map::MapError>(())
/// ```
#[derive(Debug, Default)]
pub struct ObjectMapper {
    registry: MappingRegistry,
}

impl ObjectMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// The owned registry, for direct inspection.
    pub fn registry(&self) -> &MappingRegistry {
        &self.registry
    }

    /// See [`MappingRegistry::register`].
    pub fn register<S, D>(&mut self) -> Result<()>
    where
        S: Reflect + 'static,
        D: Reflect + Default + 'static,
    {
        self.registry.register::<S, D>()
    }

    /// See [`MappingRegistry::register_with`].
    pub fn register_with<S, D>(&mut self, overrides: FieldOverrides) -> Result<()>
    where
        S: Reflect + 'static,
        D: Reflect + Default + 'static,
    {
        self.registry.register_with::<S, D>(overrides)
    }

    /// See [`MappingEngine::map`].
    pub fn map<D>(&self, source: &dyn Reflect, options: &MapOptions) -> Result<D>
    where
        D: Reflect + Default + 'static,
    {
        MappingEngine::new(&self.registry).map(source, options)
    }

    /// See [`MappingEngine::map_opt`].
    pub fn map_opt<D>(&self, source: Option<&dyn Reflect>, options: &MapOptions) -> Result<Option<D>>
    where
        D: Reflect + Default + 'static,
    {
        MappingEngine::new(&self.registry).map_opt(source, options)
    }
}
