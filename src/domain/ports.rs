use async_trait::async_trait;

use crate::domain::{AuthApiError, SessionCredentials, UserInfo};

// Port for the remote session check. The use case depends on this trait,
// not on the reqwest client.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn check_session(
        &self,
        credentials: &SessionCredentials,
    ) -> Result<UserInfo, AuthApiError>;
}

// Port for the outbound HTTP response body.
pub trait ResponseWriter {
    fn write(&mut self, body: String);
}

// Lets shared handles (`Arc<dyn AuthApi>`) stand in wherever an API is expected.
#[async_trait]
impl<T> AuthApi for std::sync::Arc<T>
where
    T: AuthApi + ?Sized,
{
    async fn check_session(
        &self,
        credentials: &SessionCredentials,
    ) -> Result<UserInfo, AuthApiError> {
        (**self).check_session(credentials).await
    }
}
