use objmap_map::{FieldOverrides, MapError, MappingRegistry, ObjectMapper};
use objmap_model::{Value, impl_reflect};

#[derive(Default)]
struct StoredUser {
    code: String,
    email: String,
}

impl_reflect!(StoredUser { code, email });

#[derive(Default)]
struct ApiUser {
    code: String,
}

impl_reflect!(ApiUser { code });

#[test]
fn register_then_lookup_returns_definition() {
    let mut registry = MappingRegistry::new();
    registry.register::<StoredUser, ApiUser>().expect("register");

    let definition = registry.lookup::<StoredUser, ApiUser>().expect("lookup");
    assert_eq!(definition.source().name(), "StoredUser");
    assert_eq!(definition.destination().name(), "ApiUser");
    assert!(definition.overrides().is_empty());
}

#[test]
fn duplicate_registration_fails_and_leaves_registry_unchanged() {
    let mut registry = MappingRegistry::new();
    registry.register::<StoredUser, ApiUser>().expect("register");

    let err = registry
        .register::<StoredUser, ApiUser>()
        .expect_err("duplicate");
    assert_eq!(
        err.to_string(),
        "Mapping for StoredUser -> ApiUser already exists"
    );
    assert_eq!(registry.len(), 1);

    // Different overrides do not make the pair re-registrable.
    let err = registry
        .register_with::<StoredUser, ApiUser>(
            FieldOverrides::new().transform("code", |_| Ok(Value::Text("X".to_string()))),
        )
        .expect_err("duplicate with overrides");
    assert!(matches!(err, MapError::AlreadyExists { .. }));
    assert_eq!(registry.len(), 1);
}

#[test]
fn lookup_of_unregistered_pair_fails() {
    let registry = MappingRegistry::new();
    let err = registry
        .lookup::<StoredUser, ApiUser>()
        .expect_err("not registered");
    assert_eq!(
        err.to_string(),
        "No mapping defined for StoredUser -> ApiUser"
    );
}

#[test]
fn directions_are_registered_independently() {
    let mut registry = MappingRegistry::new();
    registry.register::<StoredUser, ApiUser>().expect("forward");
    registry.register::<ApiUser, StoredUser>().expect("reverse");

    assert_eq!(registry.len(), 2);
    assert!(registry.contains::<StoredUser, ApiUser>());
    assert!(registry.contains::<ApiUser, StoredUser>());
}

#[test]
fn empty_registry_reports_empty() {
    let registry = MappingRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(!registry.contains::<StoredUser, ApiUser>());
}

#[test]
fn mapper_facade_exposes_its_registry() {
    let mut mapper = ObjectMapper::new();
    mapper.register::<StoredUser, ApiUser>().expect("register");

    assert_eq!(mapper.registry().len(), 1);
    assert!(mapper.registry().contains::<StoredUser, ApiUser>());
}
