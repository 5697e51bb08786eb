//! `stockdesk users ...`

use stockdesk_client::ApiClient;
use stockdesk_core::validation::UserForm;
use tracing::info;

use super::{CommandError, Output};

pub async fn list(client: &ApiClient, out: Output) -> Result<(), CommandError> {
    let users = client.list_users().await?;
    if out.json("users", &users)? {
        return Ok(());
    }
    for user in &users {
        info!(email = %user.email, role = %user.role, "{}", user.full_name);
    }
    Ok(())
}

pub async fn invite(client: &ApiClient, form: UserForm) -> Result<(), CommandError> {
    client.submit_user(form).await?;
    Ok(())
}
