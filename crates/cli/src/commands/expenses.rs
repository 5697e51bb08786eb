//! `stockdesk expenses ...` and `stockdesk categories ...`

use stockdesk_client::ApiClient;
use stockdesk_core::ExpenseCategoryId;
use stockdesk_core::report::ExpenseSummary;
use stockdesk_core::validation::{ExpenseCategoryForm, ExpenseForm};
use tracing::info;

use super::{CommandError, Output};

pub async fn list(client: &ApiClient, out: Output) -> Result<(), CommandError> {
    let expenses = client.list_expenses().await?;
    if out.json("expenses", &expenses)? {
        return Ok(());
    }
    for expense in &expenses {
        info!(
            category = %expense.category,
            cost = %expense.cost,
            payment_method = %expense.payment_method,
            status = %expense.status,
            "{}",
            expense.name
        );
    }
    info!(count = expenses.len(), "Expenses listed");
    Ok(())
}

pub async fn add(client: &ApiClient, form: ExpenseForm) -> Result<(), CommandError> {
    client.submit_expense(form).await?;
    Ok(())
}

pub async fn summary(client: &ApiClient, out: Output) -> Result<(), CommandError> {
    let expenses = client.list_expenses().await?;
    let summary = ExpenseSummary::build(&expenses);
    if out.json("expense_summary", &summary)? {
        return Ok(());
    }

    info!(
        count = summary.count,
        total = %summary.total,
        outstanding = %summary.outstanding,
        cancelled = %summary.cancelled,
        "Expense summary"
    );
    for bucket in &summary.by_category {
        info!(total = %bucket.total, share = %bucket.share, "{}", bucket.key);
    }
    for bucket in &summary.by_payment_method {
        info!(total = %bucket.total, count = bucket.count, "Paid by {}", bucket.key);
    }
    for bucket in &summary.by_status {
        info!(total = %bucket.total, count = bucket.count, "Status {}", bucket.key);
    }
    for bucket in &summary.by_month {
        info!(month = %bucket.key, total = %bucket.total, "Monthly expenses");
    }
    if !summary.undated.is_zero() {
        info!(total = %summary.undated, "Undated expenses");
    }
    Ok(())
}

pub async fn list_categories(client: &ApiClient, out: Output) -> Result<(), CommandError> {
    let categories = client.list_expense_categories().await?;
    if out.json("expense_categories", &categories)? {
        return Ok(());
    }
    for category in &categories {
        info!(id = %category.id, description = %category.description, "{}", category.name);
    }
    Ok(())
}

pub async fn add_category(client: &ApiClient, form: ExpenseCategoryForm) -> Result<(), CommandError> {
    client.submit_expense_category(form).await?;
    Ok(())
}

pub async fn delete_category(client: &ApiClient, id: &ExpenseCategoryId) -> Result<(), CommandError> {
    client.delete_expense_category(id).await?;
    info!(category_id = %id, "Expense category deleted");
    Ok(())
}
