use chrono::NaiveDate;
use fxhash::FxHashMap;
use syd_domain::{Flag, FlagDescriptor, FlagStatus};
use syd_registry::FlagRegistry;
use syd_resolver::{EnvironmentSource, ResolverError, ValueSource, is_enabled, refresh, resolve};

fn descriptor(name: &str, env_key: &str, default_value: bool, status: FlagStatus) -> FlagDescriptor {
    FlagDescriptor::builder()
        .name(name)
        .env_key(env_key)
        .default_value(default_value)
        .status(status)
        .created_at(NaiveDate::from_ymd_opt(2025, 2, 1).expect("valid date"))
        .build()
}

fn registry() -> FlagRegistry {
    let mut registry = FlagRegistry::builtin().expect("catalog is valid");
    registry
        .register(descriptor("NEW_CHECKOUT", "ENABLE_NEW_CHECKOUT", true, FlagStatus::Stable))
        .expect("valid descriptor");
    registry
        .register(descriptor("LEGACY_REPORTS", "ENABLE_LEGACY_REPORTS", false, FlagStatus::Deprecated))
        .expect("valid descriptor");
    registry
}

const NO_OVERRIDES: [(&str, &str); 0] = [];

#[test]
fn practice_adoption_defaults_to_off() {
    let flags = resolve(&registry(), &NO_OVERRIDES).expect("resolves");

    assert!(!flags.is_on(Flag::PracticeAdoption).expect("known flag"));
    let flag = flags.get("PRACTICE_ADOPTION").expect("resolved");
    assert_eq!(flag.source, ValueSource::Default);
    assert_eq!(flag.env_key, "ENABLE_PRACTICE_ADOPTION");
}

#[test]
fn recognised_literals_override_the_default() {
    let registry = registry();
    let cases = [
        ("true", true),
        ("TRUE", true),
        ("True", true),
        ("1", true),
        ("false", false),
        ("FaLsE", false),
        ("0", false),
        ("  true\t", true),
    ];
    for (raw, expected) in cases {
        let flags = resolve(&registry, &[("ENABLE_PRACTICE_ADOPTION", raw)]).expect("resolves");
        assert_eq!(flags.is_enabled("PRACTICE_ADOPTION").expect("known flag"), expected, "{raw:?}");
        assert_eq!(
            flags.get("PRACTICE_ADOPTION").map(|flag| flag.source),
            Some(ValueSource::Environment)
        );
    }
}

#[test]
fn empty_or_blank_values_keep_the_default() {
    let registry = registry();
    for raw in ["", "   ", "\t\n"] {
        let flags = resolve(&registry, &[("ENABLE_NEW_CHECKOUT", raw)]).expect("resolves");
        assert!(flags.is_enabled("NEW_CHECKOUT").expect("known flag"), "{raw:?}");
        assert_eq!(flags.get("NEW_CHECKOUT").map(|flag| flag.source), Some(ValueSource::Default));
    }
}

#[test]
fn unrecognised_value_fails_the_whole_resolution() {
    let registry = registry();
    for raw in ["yes", "on", "2", "tru", "-1"] {
        let err = resolve(&registry, &[("ENABLE_NEW_CHECKOUT", raw)]).unwrap_err();
        match err {
            ResolverError::InvalidFlagValue { ref flag, ref env_key, ref value, .. } => {
                assert_eq!(flag, "NEW_CHECKOUT");
                assert_eq!(env_key, "ENABLE_NEW_CHECKOUT");
                assert_eq!(value, raw);
            },
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn invalid_value_message_names_flag_key_and_value() {
    let err = resolve(&registry(), &[("ENABLE_PRACTICE_ADOPTION", "maybe")]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid flag value: PRACTICE_ADOPTION (ENABLE_PRACTICE_ADOPTION=\"maybe\"), expected true/false/1/0"
    );
    assert_eq!(err.kind(), "InvalidFlagValue");
}

#[test]
fn unknown_names_are_errors_not_false() {
    let flags = resolve(&registry(), &NO_OVERRIDES).expect("resolves");

    for name in ["PRACTICE_ADOPTON", "practice_adoption", ""] {
        let err = flags.is_enabled(name).unwrap_err();
        assert!(matches!(err, ResolverError::UnknownFlag { .. }), "{name:?}");
    }
    assert!(is_enabled(&flags, "NOPE").is_err());
}

#[test]
fn unrelated_variables_are_ignored() {
    let env: FxHashMap<String, String> = [
        ("PRACTICE_ADOPTION".to_owned(), "garbage".to_owned()),
        ("ENABLE_SOMETHING_ELSE".to_owned(), "garbage".to_owned()),
        ("SYD__LOGGING__LEVEL".to_owned(), "debug".to_owned()),
    ]
    .into_iter()
    .collect();

    let flags = resolve(&registry(), &env).expect("resolves");
    assert_eq!(flags.overrides().count(), 0);
}

#[test]
fn resolving_twice_is_idempotent() {
    let registry = registry();
    let env = [("ENABLE_PRACTICE_ADOPTION", "1"), ("ENABLE_NEW_CHECKOUT", "0")];

    let first = resolve(&registry, &env).expect("resolves");
    let second = refresh(&registry, &env).expect("resolves");
    assert!(first.same_values(&second));
    assert_eq!(first.enabled().collect::<Vec<_>>(), vec!["PRACTICE_ADOPTION"]);
}

#[test]
fn snapshot_keeps_registry_order_and_size() {
    let registry = registry();
    let flags = resolve(&registry, &NO_OVERRIDES).expect("resolves");

    assert_eq!(flags.len(), registry.len());
    let names: Vec<_> = flags.iter().map(|flag| flag.name.as_str()).collect();
    assert_eq!(names, registry.names().collect::<Vec<_>>());
}

#[test]
fn snapshot_outlives_deregistration() {
    let mut registry = registry();
    let before = resolve(&registry, &[("ENABLE_NEW_CHECKOUT", "false")]).expect("resolves");

    registry.deregister("NEW_CHECKOUT").expect("registered");
    assert!(!before.is_enabled("NEW_CHECKOUT").expect("captured in the snapshot"));

    let after = refresh(&registry, &[("ENABLE_NEW_CHECKOUT", "false")]).expect("resolves");
    assert!(after.is_enabled("NEW_CHECKOUT").is_err());
}

#[test]
fn deprecated_flags_still_resolve() {
    let flags = resolve(&registry(), &[("ENABLE_LEGACY_REPORTS", "1")]).expect("resolves");
    assert!(flags.is_enabled("LEGACY_REPORTS").expect("known flag"));
}

#[test]
fn empty_registry_resolves_to_empty_snapshot() {
    let flags = resolve(&FlagRegistry::new(), &[("ENABLE_PRACTICE_ADOPTION", "nonsense")])
        .expect("nothing to resolve");
    assert!(flags.is_empty());
}

#[test]
fn override_layer_forces_values_over_a_base_source() {
    let registry = registry();
    let base = [("ENABLE_PRACTICE_ADOPTION", "true"), ("ENABLE_NEW_CHECKOUT", "false")];
    let env = [("ENABLE_NEW_CHECKOUT", "")].over(base);

    let flags = resolve(&registry, &env).expect("resolves");
    assert!(flags.is_on(Flag::PracticeAdoption).expect("known flag"));
    assert!(flags.is_enabled("NEW_CHECKOUT").expect("known flag"), "empty override keeps the default");
}

#[test]
fn snapshot_serializes_flags_with_sources() {
    let flags = resolve(&registry(), &[("ENABLE_PRACTICE_ADOPTION", "true")]).expect("resolves");
    let json = serde_json::to_value(&flags).expect("serializes");

    let first = &json["flags"][0];
    assert_eq!(first["name"], "PRACTICE_ADOPTION");
    assert_eq!(first["value"], true);
    assert_eq!(first["source"], "environment");
    assert!(json.get("index").is_none());
}
