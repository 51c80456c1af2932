use folio_kernel::domain::config::ApiConfig;
use folio_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use folio_kernel::server::state::{ApiState, ApiStateError};
use folio_database::Database;
use std::any::Any;

#[derive(Debug)]
struct Counter(u32);

impl FeatureSlice for Counter {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Unregistered;

impl FeatureSlice for Unregistered {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

async fn memory_db() -> Database {
    Database::builder().url("mem://").session("test", "state").init().await.expect("mem db")
}

#[tokio::test]
async fn registered_slices_are_found_by_type() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .db(memory_db().await)
        .register_slice(InitializedSlice::new(Counter(7)))
        .build()
        .expect("state");

    assert_eq!(state.slice_count(), 1);
    assert_eq!(state.get_slice::<Counter>().map(|c| c.0), Some(7));
    assert!(matches!(
        state.try_get_slice::<Unregistered>(),
        Err(ApiStateError::MissingSlice { .. })
    ));
}

#[tokio::test]
async fn build_requires_config_and_database() {
    let err = ApiState::builder().db(memory_db().await).build().unwrap_err();
    assert!(matches!(err, ApiStateError::Validation { .. }));

    let err = ApiState::builder().config(ApiConfig::default()).build().unwrap_err();
    assert!(matches!(err, ApiStateError::Validation { .. }));
}
