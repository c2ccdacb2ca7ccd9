use walkies::server::model::app::AppState;
use walkies_test_utils::prelude::*;

/// Returns the fixture context plus an [`AppState`] sharing its database,
/// used across the controller integration tests.
pub async fn test_setup() -> Result<(TestSetup, AppState), TestError> {
    let test = test_setup_with_walk_tables!()?;
    let state = AppState {
        db: test.state.db.clone(),
    };

    Ok((test, state))
}
