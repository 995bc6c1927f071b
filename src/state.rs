use crate::db::TriviaStore;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub store: TriviaStore,
}

impl FromRef<AppState> for TriviaStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
