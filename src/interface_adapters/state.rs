use crate::domain::AuthApi;
use crate::use_cases::LoginChecker;
use std::sync::Arc;

pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub checker: LoginChecker<Arc<dyn AuthApi>>,
}
