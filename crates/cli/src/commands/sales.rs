//! `stockdesk sales ...`

use stockdesk_client::ApiClient;
use stockdesk_core::report::{RevenueComparison, SalesReport, monthly_revenue, top_products};
use stockdesk_core::validation::SaleForm;
use stockdesk_core::{DateRange, ProductId, YearMonth};
use tracing::info;

use super::{CommandError, Output};

pub async fn list(client: &ApiClient, out: Output) -> Result<(), CommandError> {
    let sales = client.list_sales_items().await?;
    if out.json("sales", &sales)? {
        return Ok(());
    }
    for sale in &sales {
        info!(
            date = sale.created_at.map(|at| at.date_naive().to_string()),
            price = %sale.final_price(),
            discount = %sale.discount,
            manager = %sale.sales_manager,
            "{}",
            sale.product_name
        );
    }
    info!(count = sales.len(), "Sales listed");
    Ok(())
}

pub async fn report(client: &ApiClient, out: Output, range: DateRange) -> Result<(), CommandError> {
    let sales = client.list_sales_items().await?;
    let report = SalesReport::build(&sales, range);
    if out.json("sales_report", &report)? {
        return Ok(());
    }

    info!(
        count = report.count,
        gross = %report.gross,
        discounts = %report.discounts,
        net = %report.net_revenue,
        average = %report.average_sale,
        "Sales report"
    );
    for day in &report.by_date {
        info!(date = %day.key, count = day.count, total = %day.total, "Daily sales");
    }
    if !report.undated.is_zero() {
        info!(total = %report.undated, "Undated sales");
    }
    for category in &report.by_category {
        info!(
            count = category.count,
            total = %category.total,
            share = %category.share,
            "{}",
            category.key
        );
    }
    for manager in &report.by_sales_manager {
        info!(count = manager.count, total = %manager.total, "Sales by {}", manager.key);
    }
    Ok(())
}

pub async fn record(
    client: &ApiClient,
    product: &ProductId,
    discount: String,
    sales_manager: String,
) -> Result<(), CommandError> {
    let product = client.find_product(product).await?;
    let form = SaleForm {
        product: Some(product),
        discount,
        sales_manager,
    };
    client.submit_sale(form).await?;
    Ok(())
}

pub async fn revenue(client: &ApiClient, out: Output, month: YearMonth) -> Result<(), CommandError> {
    let mut series = client.monthly_revenue().await?;
    if series.is_empty() {
        series = monthly_revenue(&client.list_sales_items().await?);
    }
    let comparison = RevenueComparison::from_series(&series, month);
    if out.json("revenue", &comparison)? {
        return Ok(());
    }
    info!(
        month = %comparison.month,
        revenue = %comparison.current,
        previous = %comparison.previous,
        change = %comparison.change,
        growth = %comparison.growth,
        "Monthly revenue"
    );
    Ok(())
}

pub async fn top(client: &ApiClient, out: Output, limit: usize) -> Result<(), CommandError> {
    let sales = client.list_sales_items().await?;
    let best = top_products(&sales, limit);
    if out.json("top_products", &best)? {
        return Ok(());
    }
    for (rank, product) in best.iter().enumerate() {
        info!(
            rank = rank + 1,
            units = product.units,
            revenue = %product.revenue,
            "{}",
            product.product_name
        );
    }
    Ok(())
}
