//! `stockdesk products ...` and `stockdesk inventory`

use stockdesk_client::ApiClient;
use stockdesk_core::ProductId;
use stockdesk_core::report::InventorySummary;
use stockdesk_core::validation::ProductForm;
use tracing::{info, warn};

use super::{CommandError, Output};

pub async fn list(client: &ApiClient, out: Output) -> Result<(), CommandError> {
    let products = client.list_products().await?;
    if out.json("products", &products)? {
        return Ok(());
    }
    for product in &products {
        info!(
            id = %product.id,
            category = %product.category,
            price = %product.price,
            quantity = product.quantity,
            "{}",
            product.name
        );
    }
    info!(count = products.len(), "Products listed");
    Ok(())
}

pub async fn add(client: &ApiClient, form: ProductForm) -> Result<(), CommandError> {
    client.submit_product(form).await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, id: &ProductId) -> Result<(), CommandError> {
    client.delete_product(id).await?;
    info!(product_id = %id, "Product deleted");
    Ok(())
}

pub async fn inventory(client: &ApiClient, out: Output) -> Result<(), CommandError> {
    let products = client.list_products().await?;
    let summary = InventorySummary::build(&products, client.low_stock_threshold());
    if out.json("inventory", &summary)? {
        return Ok(());
    }

    info!(
        products = summary.product_count,
        units = summary.total_units,
        stock_value = %summary.stock_value,
        retail_value = %summary.retail_value,
        potential_profit = %summary.potential_profit,
        "Inventory"
    );
    for category in &summary.by_category {
        info!(
            products = category.products,
            units = category.units,
            retail_value = %category.retail_value,
            "{}",
            category.category
        );
    }
    for alert in &summary.low_stock {
        warn!(id = %alert.id, quantity = alert.quantity, "Low stock: {}", alert.name);
    }
    for alert in &summary.out_of_stock {
        warn!(id = %alert.id, "Out of stock: {}", alert.name);
    }
    Ok(())
}
