use folio::domain::config::ApiConfig;
use folio::features::{auth::Auth, content::Content, is_enabled};
use folio::kernel::server::ApiState;
use folio_database::Database;

async fn memory_db() -> Database {
    Database::builder().url("mem://").session("test", "facade").init().await.expect("mem db")
}

#[tokio::test]
async fn init_registers_every_slice() {
    let config = ApiConfig::default();
    let database = memory_db().await;
    let slices = folio::init(&config, &database).await.expect("init");
    assert_eq!(slices.len(), 2);

    let state = ApiState::builder()
        .config(config)
        .db(database)
        .register_slices(slices)
        .build()
        .expect("state");

    assert!(state.get_slice::<Auth>().is_some());
    let content = state.get_slice::<Content>().expect("content slice");
    let stored = content.store.fetch_all().await.expect("fetch");
    assert_eq!(stored["hero_name"], "Nama Anda");
}

#[tokio::test]
async fn blank_admin_identity_fails_init() {
    let mut config = ApiConfig::default();
    config.security.admin.password = String::new();

    let err = folio::init(&config, &memory_db().await).await.unwrap_err();
    assert!(matches!(err, folio::InitError::Auth { .. }));
}

#[test]
fn enabled_features_are_listed() {
    assert!(is_enabled("auth"));
    assert!(is_enabled("content"));
    assert!(!is_enabled("billing"));
}
