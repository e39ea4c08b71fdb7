//! Mapping execution: populating a destination instance from a source
//! instance according to a registered definition.

use objmap_model::{Reflect, TypeKey};
use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};
use crate::overrides::FieldRule;
use crate::registry::MappingRegistry;

/// Options controlling one map call. Both switches default to off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MapOptions {
    /// Map a missing source to `None` instead of failing.
    pub allow_none: bool,
    /// Match source field names to destination field names ignoring ASCII
    /// case. When several source fields match one destination field, the
    /// first in enumeration order wins.
    pub ignore_case: bool,
}

impl MapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_none(mut self, allow: bool) -> Self {
        self.allow_none = allow;
        self
    }

    pub fn with_ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }
}

/// Executes registered mappings against concrete instances.
///
/// The engine borrows the registry and performs pure computation: a failed
/// map discards the partially populated destination and has no other
/// effect.
pub struct MappingEngine<'r> {
    registry: &'r MappingRegistry,
}

impl<'r> MappingEngine<'r> {
    pub fn new(registry: &'r MappingRegistry) -> Self {
        Self { registry }
    }

    /// Map a source instance to a new `D`.
    ///
    /// Fails with [`MapError::NotFound`] when the pair is unregistered and
    /// [`MapError::InvalidFunction`] when a transform override misbehaves.
    pub fn map<D>(&self, source: &dyn Reflect, options: &MapOptions) -> Result<D>
    where
        D: Reflect + Default + 'static,
    {
        self.map_instance(source, options)
    }

    /// Map an optional source instance.
    ///
    /// A missing source short-circuits to `Ok(None)` under `allow_none` —
    /// no registry lookup, no destination construction — and fails with
    /// [`MapError::NullSource`] otherwise.
    pub fn map_opt<D>(&self, source: Option<&dyn Reflect>, options: &MapOptions) -> Result<Option<D>>
    where
        D: Reflect + Default + 'static,
    {
        match source {
            None if options.allow_none => Ok(None),
            None => Err(MapError::NullSource),
            Some(source) => self.map_instance(source, options).map(Some),
        }
    }

    fn map_instance<D>(&self, source: &dyn Reflect, options: &MapOptions) -> Result<D>
    where
        D: Reflect + Default + 'static,
    {
        let destination_key = TypeKey::of::<D>();
        let definition = self
            .registry
            .lookup_keys(source.type_key(), destination_key)?;
        tracing::debug!(
            source = %definition.source(),
            destination = %definition.destination(),
            "mapping instance"
        );

        // The freshly constructed destination is authoritative: only its
        // own fields are eligible targets, so source-only fields never
        // leak across.
        let mut destination = D::default();
        let destination_fields = destination.field_names();
        let source_fields = source.field_names();

        for field in destination_fields {
            match definition.overrides().rule_for(field) {
                Some(FieldRule::Suppress) => {}
                Some(FieldRule::Transform(transform)) => {
                    let value = transform(source).map_err(|cause| MapError::InvalidFunction {
                        dest_type: destination_key.name(),
                        field: field.to_string(),
                        cause,
                    })?;
                    destination
                        .set_field(field, value)
                        .map_err(|err| MapError::InvalidFunction {
                            dest_type: destination_key.name(),
                            field: field.to_string(),
                            cause: anyhow::Error::new(err),
                        })?;
                }
                Some(FieldRule::Copy) | None => {
                    let matched = if options.ignore_case {
                        source_fields
                            .iter()
                            .copied()
                            .find(|name| name.eq_ignore_ascii_case(field))
                    } else {
                        source_fields.iter().copied().find(|name| *name == field)
                    };
                    let Some(source_field) = matched else {
                        continue;
                    };
                    let Some(value) = source.get_field(source_field) else {
                        continue;
                    };
                    if let Err(err) = destination.set_field(field, value) {
                        // Dynamic hosts assign anything; a typed field
                        // cannot, so the copy degrades to a no-op like an
                        // absent match would.
                        tracing::warn!(
                            field,
                            source_field,
                            error = %err,
                            "skipping copy of incompatible value"
                        );
                    }
                }
            }
        }

        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_strict_matching() {
        let options = MapOptions::default();
        assert!(!options.allow_none);
        assert!(!options.ignore_case);
    }

    #[test]
    fn options_builders_set_switches() {
        let options = MapOptions::new().with_allow_none(true).with_ignore_case(true);
        assert!(options.allow_none);
        assert!(options.ignore_case);
    }
}
