use std::fs;
use std::path::Path;
use std::sync::Arc;
use switchyard::prelude::*;
use switchyard::registry::RegistryError;
use switchyard::{SwitchyardError, bootstrap, bootstrap_with, build_registry, environment};
use tempfile::tempdir;

const MANIFEST: &str = r#"
[[flags]]
name = "NEW_CHECKOUT"
env_key = "SYD_TEST_ENABLE_NEW_CHECKOUT"
default_value = true
description = "Redesigned checkout"
owner = "payments"
status = "alpha"
created_at = 2025-03-01
"#;

fn settings_with(manifest: Option<&Path>, env_file: Option<&Path>) -> Settings {
    let mut settings = Settings::default();
    settings.flags.manifest = manifest.map(Path::to_path_buf);
    settings.flags.env_file = env_file.map(Path::to_path_buf);
    settings
}

#[test]
fn default_settings_register_the_catalog_only() {
    let registry = build_registry(&Settings::default()).expect("catalog is valid");
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["PRACTICE_ADOPTION"]);
}

#[test]
fn manifest_flags_join_the_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let manifest = dir.path().join("flags.toml");
    fs::write(&manifest, MANIFEST)?;

    let settings = settings_with(Some(&manifest), None);
    let flags = bootstrap_with(&settings, &[("SYD_TEST_ENABLE_NEW_CHECKOUT", "0")])?;

    assert_eq!(flags.registry().len(), 2);
    assert!(!flags.snapshot().is_enabled("NEW_CHECKOUT")?);
    assert!(!flags.handle().is_on(Flag::PracticeAdoption)?);
    Ok(())
}

fn write_manifest(dir: &Path, name: &str, env_key: &str) -> std::io::Result<std::path::PathBuf> {
    let manifest = dir.join("flags.toml");
    fs::write(
        &manifest,
        format!(
            "[[flags]]\nname = \"{name}\"\nenv_key = \"{env_key}\"\ndefault_value = true\n\
             status = \"beta\"\ncreated_at = 2025-03-01\n"
        ),
    )?;
    Ok(manifest)
}

#[test]
fn manifest_reusing_a_catalog_name_is_a_duplicate() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let manifest = write_manifest(dir.path(), "PRACTICE_ADOPTION", "SYD_TEST_OTHER")?;

    let err = build_registry(&settings_with(Some(&manifest), None)).unwrap_err();
    assert!(
        matches!(
            err,
            SwitchyardError::Registry { source: RegistryError::DuplicateFlag { ref name, .. }, .. }
                if name == "PRACTICE_ADOPTION"
        ),
        "{err}"
    );
    Ok(())
}

#[test]
fn manifest_reusing_a_catalog_env_key_is_a_duplicate() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let manifest = write_manifest(dir.path(), "ADOPTION_COPY", "ENABLE_PRACTICE_ADOPTION")?;

    let err = build_registry(&settings_with(Some(&manifest), None)).unwrap_err();
    match err {
        SwitchyardError::Registry {
            source: RegistryError::DuplicateFlag { ref name, ref message, .. },
            ..
        } => {
            assert_eq!(name, "ADOPTION_COPY");
            assert!(message.contains("ENABLE_PRACTICE_ADOPTION"), "{message}");
            assert!(message.contains("PRACTICE_ADOPTION"), "{message}");
        },
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[test]
fn env_file_feeds_the_bootstrap_environment() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let manifest = dir.path().join("flags.toml");
    let env_file = dir.path().join("flags.env");
    fs::write(&manifest, MANIFEST)?;
    fs::write(&env_file, "SYD_TEST_ENABLE_NEW_CHECKOUT=false\n")?;

    let settings = settings_with(Some(&manifest), Some(&env_file));
    let env = environment(&settings)?;
    assert_eq!(env.lookup("SYD_TEST_ENABLE_NEW_CHECKOUT").as_deref(), Some("false"));

    let flags = bootstrap(&settings)?;
    assert!(!flags.snapshot().is_enabled("NEW_CHECKOUT")?);
    Ok(())
}

#[test]
fn missing_env_file_fails_bootstrap() {
    let dir = tempdir().expect("tempdir");
    let settings = settings_with(None, Some(&dir.path().join("absent.env")));

    let err = bootstrap(&settings).unwrap_err();
    assert!(matches!(err, SwitchyardError::Resolver { .. }), "{err}");
    assert_eq!(err.kind(), "Resolver");
}

#[test]
fn invalid_override_fails_bootstrap_with_resolver_error() {
    let err = bootstrap_with(&Settings::default(), &[("ENABLE_PRACTICE_ADOPTION", "maybe")])
        .unwrap_err();
    assert!(err.to_string().contains("ENABLE_PRACTICE_ADOPTION=\"maybe\""), "{err}");
}

#[test]
fn refresh_with_publishes_and_keeps_old_snapshot_on_error() -> Result<(), Box<dyn std::error::Error>> {
    let flags = bootstrap_with(&Settings::default(), &[("ENABLE_PRACTICE_ADOPTION", "0")])?;
    let first = flags.snapshot();

    flags.refresh_with(&[("ENABLE_PRACTICE_ADOPTION", "1")])?;
    let second = flags.snapshot();
    assert!(second.is_enabled("PRACTICE_ADOPTION")?);

    assert!(flags.refresh_with(&[("ENABLE_PRACTICE_ADOPTION", "nope")]).is_err());
    assert!(Arc::ptr_eq(&second, &flags.snapshot()));
    assert!(!first.is_enabled("PRACTICE_ADOPTION")?);
    Ok(())
}
