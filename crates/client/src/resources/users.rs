//! `/users`

use stockdesk_core::models::{NewUser, User};
use stockdesk_core::validation::UserForm;
use tracing::{info, instrument};

use super::USERS;
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get(USERS).await
    }

    /// # Errors
    ///
    /// Returns error if the API request fails or the backend rejects it.
    #[instrument(skip(self, user), fields(email = %user.email, role = %user.role))]
    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        self.post(USERS, user).await
    }

    /// Validate the form and invite the user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if the form
    /// is invalid, otherwise any error from [`Self::create_user`].
    pub async fn submit_user(&self, form: UserForm) -> Result<User, ApiError> {
        let payload = form.into_payload()?;
        let user = self.create_user(&payload).await?;
        info!(user_id = %user.id, role = %user.role, "User invited");
        Ok(user)
    }
}
