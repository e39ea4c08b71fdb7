//! Per-field rules that replace default name-based copying.

use std::collections::BTreeMap;
use std::fmt;

use objmap_model::{Reflect, Value};

/// A user-supplied transformation invoked with the source instance.
pub type TransformFn = Box<dyn Fn(&dyn Reflect) -> anyhow::Result<Value>>;

/// How one destination field is populated.
///
/// A field without an entry in [`FieldOverrides`] behaves as `Copy`; the
/// explicit variant exists so "no override provided" and "explicitly
/// suppress" can never be conflated.
pub enum FieldRule {
    /// Copy the like-named source field, if one exists.
    Copy,
    /// Compute the value from the source instance.
    Transform(TransformFn),
    /// Leave the field at the destination's constructed default.
    Suppress,
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => f.write_str("Copy"),
            Self::Transform(_) => f.write_str("Transform(..)"),
            Self::Suppress => f.write_str("Suppress"),
        }
    }
}

/// Per-field rules attached to one mapping definition.
#[derive(Debug, Default)]
pub struct FieldOverrides {
    rules: BTreeMap<String, FieldRule>,
}

impl FieldOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute `field` from the source instance instead of copying it.
    pub fn transform(
        mut self,
        field: impl Into<String>,
        transform: impl Fn(&dyn Reflect) -> anyhow::Result<Value> + 'static,
    ) -> Self {
        self.rules
            .insert(field.into(), FieldRule::Transform(Box::new(transform)));
        self
    }

    /// Keep `field` at its constructed default, regardless of the source.
    pub fn suppress(mut self, field: impl Into<String>) -> Self {
        self.rules.insert(field.into(), FieldRule::Suppress);
        self
    }

    /// Restore default copying for `field`, replacing an earlier rule.
    pub fn copy(mut self, field: impl Into<String>) -> Self {
        self.rules.insert(field.into(), FieldRule::Copy);
        self
    }

    /// The explicit rule for `field`, if one was registered.
    pub fn rule_for(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_rules_replace_earlier_ones() {
        let overrides = FieldOverrides::new()
            .suppress("name")
            .copy("name")
            .suppress("date");

        assert_eq!(overrides.len(), 2);
        assert!(matches!(overrides.rule_for("name"), Some(FieldRule::Copy)));
        assert!(matches!(
            overrides.rule_for("date"),
            Some(FieldRule::Suppress)
        ));
        assert!(overrides.rule_for("other").is_none());
    }

    #[test]
    fn debug_omits_closure_bodies() {
        let overrides = FieldOverrides::new().transform("name", |_| Ok(Value::Null));
        let rendered = format!("{:?}", overrides.rule_for("name"));
        assert_eq!(rendered, "Some(Transform(..))");
    }
}
