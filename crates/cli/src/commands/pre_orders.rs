//! `stockdesk preorders ...`

use stockdesk_client::ApiClient;
use stockdesk_core::validation::PreOrderForm;
use stockdesk_core::{CustomerId, PreOrderId, ProductId};
use tracing::info;

use super::{CommandError, Output};

pub async fn list(client: &ApiClient, out: Output) -> Result<(), CommandError> {
    let orders = client.list_pre_orders().await?;
    if out.json("pre_orders", &orders)? {
        return Ok(());
    }
    for order in &orders {
        info!(
            id = %order.id,
            customer = %order.customer.name,
            total = %order.total_amount,
            due = %order.due_amount,
            status = %order.status,
            "{}",
            order.product.name
        );
    }
    Ok(())
}

pub async fn create(
    client: &ApiClient,
    product: &ProductId,
    customer: &CustomerId,
    discount: String,
) -> Result<(), CommandError> {
    let (product, customer) =
        tokio::try_join!(client.find_product(product), client.get_customer(customer))?;
    let form = PreOrderForm {
        product: Some(product),
        customer: Some(customer),
        discount,
    };
    client.submit_pre_order(form).await?;
    Ok(())
}

pub async fn pay(client: &ApiClient, id: &PreOrderId) -> Result<(), CommandError> {
    client.settle_pre_order(id).await?;
    Ok(())
}

pub async fn cancel(client: &ApiClient, id: &PreOrderId) -> Result<(), CommandError> {
    client.cancel_pre_order(id).await?;
    info!(pre_order_id = %id, "Pre-order cancelled");
    Ok(())
}
