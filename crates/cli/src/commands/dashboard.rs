//! `stockdesk dashboard`

use chrono::{DateTime, Utc};
use stockdesk_client::{ApiClient, Dashboard};
use tracing::{info, warn};

use super::{CommandError, Output};

pub async fn show(client: &ApiClient, out: Output, now: DateTime<Utc>) -> Result<(), CommandError> {
    let overview = Dashboard::new(client.clone()).overview(now).await?;
    if out.json("dashboard", &overview)? {
        return Ok(());
    }

    match &overview.revenue {
        Some(revenue) => info!(
            month = %revenue.month,
            revenue = %revenue.current,
            previous = %revenue.previous,
            growth = %revenue.growth,
            "Monthly revenue"
        ),
        None => info!("No sales recorded yet"),
    }

    let sales = &overview.sales;
    info!(
        count = sales.count,
        net = %sales.net_revenue,
        discounts = %sales.discounts,
        average = %sales.average_sale,
        "Sales"
    );

    let expenses = &overview.expenses;
    info!(
        count = expenses.count,
        total = %expenses.total,
        outstanding = %expenses.outstanding,
        "Expenses"
    );
    info!(net_profit = %overview.net_profit, "Net profit");

    let inventory = &overview.inventory;
    info!(
        products = inventory.product_count,
        units = inventory.total_units,
        stock_value = %inventory.stock_value,
        "Inventory"
    );
    for alert in &inventory.low_stock {
        warn!(product = %alert.name, quantity = alert.quantity, "Low stock");
    }
    for alert in &inventory.out_of_stock {
        warn!(product = %alert.name, "Out of stock");
    }

    Ok(())
}
