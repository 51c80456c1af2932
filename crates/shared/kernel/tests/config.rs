use folio_kernel::config::load_config;
use folio_kernel::domain::config::ApiConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().expect("temp dir");
    let cfg: ApiConfig = load_config(Some(dir.path().join("absent.toml"))).expect("load");

    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.storage.static_dir, PathBuf::from("public"));
}

#[test]
fn toml_file_overrides_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
[server]
port = 9100

[database]
url = "mem://"

[security.admin]
email = "ops@example.com"
password = "hunter2"

[logging]
level = "debug"
json = true
"#,
    )
    .expect("write config");

    let cfg: ApiConfig = load_config(Some(&path)).expect("load");
    assert_eq!(cfg.server.port, 9100);
    assert_eq!(cfg.database.url, "mem://");
    assert_eq!(cfg.database.namespace, "folio");
    assert_eq!(cfg.security.admin.email, "ops@example.com");
    assert!(!cfg.security.admin.uses_dev_password());
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[server\nport = ").expect("write config");

    assert!(load_config::<ApiConfig>(Some(&path)).is_err());
}
