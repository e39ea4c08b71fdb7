//! The mapping registry: one definition per ordered (source, destination)
//! type pair.

use std::collections::BTreeMap;

use objmap_model::{Reflect, TypeKey};

use crate::error::{MapError, Result};
use crate::overrides::FieldOverrides;

/// One directed mapping: how instances of the source type populate fresh
/// instances of the destination type.
#[derive(Debug)]
pub struct MappingDefinition {
    source: TypeKey,
    destination: TypeKey,
    overrides: FieldOverrides,
}

impl MappingDefinition {
    pub fn source(&self) -> TypeKey {
        self.source
    }

    pub fn destination(&self) -> TypeKey {
        self.destination
    }

    pub fn overrides(&self) -> &FieldOverrides {
        &self.overrides
    }
}

/// Registry of mapping definitions, keyed by ordered type pair.
///
/// Created empty and mutated only through registration; definitions are
/// never removed. The registry is an explicit value owned by the caller —
/// there is no process-wide instance. It makes no internal concurrency
/// guarantee; `register*` takes `&mut self` and `map` reads through
/// `&self`, so within one thread the borrow rules already enforce the
/// populate-then-map pattern.
#[derive(Debug, Default)]
pub struct MappingRegistry {
    definitions: BTreeMap<(TypeKey, TypeKey), MappingDefinition>,
}

impl MappingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mapping from `S` to `D` with default copying for every
    /// destination field.
    pub fn register<S, D>(&mut self) -> Result<()>
    where
        S: Reflect + 'static,
        D: Reflect + Default + 'static,
    {
        self.register_with::<S, D>(FieldOverrides::new())
    }

    /// Register a mapping from `S` to `D` with per-field overrides.
    ///
    /// Fails if the ordered pair is already registered, whatever the
    /// overrides of either registration; the registry is left unchanged.
    pub fn register_with<S, D>(&mut self, overrides: FieldOverrides) -> Result<()>
    where
        S: Reflect + 'static,
        D: Reflect + Default + 'static,
    {
        let source = TypeKey::of::<S>();
        let destination = TypeKey::of::<D>();
        let key = (source, destination);
        if self.definitions.contains_key(&key) {
            return Err(MapError::AlreadyExists {
                source_type: source.name(),
                dest_type: destination.name(),
            });
        }
        tracing::debug!(
            source = source.name(),
            destination = destination.name(),
            overrides = overrides.len(),
            "registered mapping"
        );
        self.definitions.insert(
            key,
            MappingDefinition {
                source,
                destination,
                overrides,
            },
        );
        Ok(())
    }

    /// Look up the stored definition for the ordered pair `(S, D)`.
    pub fn lookup<S, D>(&self) -> Result<&MappingDefinition>
    where
        S: Reflect + 'static,
        D: Reflect + 'static,
    {
        self.lookup_keys(TypeKey::of::<S>(), TypeKey::of::<D>())
    }

    pub(crate) fn lookup_keys(
        &self,
        source: TypeKey,
        destination: TypeKey,
    ) -> Result<&MappingDefinition> {
        self.definitions
            .get(&(source, destination))
            .ok_or(MapError::NotFound {
                source_type: source.name(),
                dest_type: destination.name(),
            })
    }

    pub fn contains<S, D>(&self) -> bool
    where
        S: Reflect + 'static,
        D: Reflect + 'static,
    {
        self.definitions
            .contains_key(&(TypeKey::of::<S>(), TypeKey::of::<D>()))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
