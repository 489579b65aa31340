//! State

use std::sync::Arc;

use produit_app::context::AppContext;

/// Shared request state, injected into the depot for every request.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
