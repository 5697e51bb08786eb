//! `stockdesk customers ...`

use stockdesk_client::ApiClient;
use stockdesk_core::validation::CustomerForm;
use tracing::info;

use super::{CommandError, Output};

pub async fn list(client: &ApiClient, out: Output) -> Result<(), CommandError> {
    let customers = client.list_customers().await?;
    if out.json("customers", &customers)? {
        return Ok(());
    }
    for customer in &customers {
        info!(id = %customer.id, phone = %customer.phone, "{}", customer.name);
    }
    info!(count = customers.len(), "Customers listed");
    Ok(())
}

pub async fn add(client: &ApiClient, form: CustomerForm) -> Result<(), CommandError> {
    client.submit_customer(form).await?;
    Ok(())
}
