//! Stockdesk CLI - inventory, sales and expense reports from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Dashboard overview for the current month
//! stockdesk dashboard
//!
//! # Sales report for May, as JSON
//! stockdesk --json sales report --from 2024-05-01 --to 2024-05-31
//!
//! # Record a sale with a 10% discount
//! stockdesk sales record --product 64f1c2 --discount 10 --manager "Rahim"
//!
//! # Take a pre-order and later collect the balance
//! stockdesk preorders create --product 64f1c2 --customer 650a11
//! stockdesk preorders pay 6511be
//! ```
//!
//! # Environment Variables
//!
//! See `stockdesk_client::config` for the backend connection and
//! `telemetry` for logging and Sentry.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use stockdesk_client::{ApiClient, ClientConfig};
use stockdesk_core::{ExpenseCategoryId, PreOrderId, ProductId, YearMonth};

mod commands;
mod telemetry;

use commands::{CommandError, Output};

#[derive(Parser)]
#[command(name = "stockdesk")]
#[command(author, version, about = "Inventory and expense dashboard")]
struct Cli {
    /// Log reports as a single JSON document instead of one line per figure
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Revenue, sales, expenses and stock at a glance
    Dashboard,
    /// Manage products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Stock levels, stock value and low-stock alerts
    Inventory,
    /// Manage customers
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },
    /// Sales records and reports
    Sales {
        #[command(subcommand)]
        action: SalesAction,
    },
    /// Expenses and expense reports
    Expenses {
        #[command(subcommand)]
        action: ExpenseAction,
    },
    /// Manage expense categories
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Pre-orders with a 50% advance
    Preorders {
        #[command(subcommand)]
        action: PreOrderAction,
    },
    /// Manage dashboard users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List every product
    List,
    /// Add a product
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        category: String,
        #[arg(short, long)]
        price: String,
        #[arg(long, default_value = "0")]
        cost_price: String,
        #[arg(short, long, default_value = "0")]
        quantity: String,
    },
    /// Delete a product
    Delete { id: ProductId },
}

#[derive(Subcommand)]
enum CustomerAction {
    /// List every customer
    List,
    /// Add a customer
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        phone: String,
        #[arg(short, long, default_value = "")]
        address: String,
    },
}

#[derive(Subcommand)]
enum SalesAction {
    /// List recorded sales
    List,
    /// Totals and breakdowns for a date range (inclusive)
    Report {
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Record the sale of one unit
    Record {
        #[arg(short, long)]
        product: ProductId,
        /// Discount percent, 0 to 100
        #[arg(short, long, default_value = "0")]
        discount: String,
        #[arg(short, long)]
        manager: String,
    },
    /// Compare a month's revenue with the month before (default: this month)
    Revenue {
        #[arg(short, long)]
        month: Option<YearMonth>,
    },
    /// Best-selling products
    Top {
        #[arg(short = 'n', long, default_value_t = 5)]
        limit: usize,
    },
}

#[derive(Subcommand)]
enum ExpenseAction {
    /// List expenses
    List,
    /// Add an expense
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        category: String,
        #[arg(long)]
        cost: String,
        /// `cash`, `card`, `bank_transfer` or `mobile_banking`
        #[arg(short, long)]
        payment_method: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// `pending`, `paid` or `cancelled` (default: pending)
        #[arg(short, long, default_value = "")]
        status: String,
    },
    /// Totals by category, payment method, status and month
    Summary,
}

#[derive(Subcommand)]
enum CategoryAction {
    /// List expense categories
    List,
    /// Add an expense category
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Delete an expense category
    Delete { id: ExpenseCategoryId },
}

#[derive(Subcommand)]
enum PreOrderAction {
    /// List pre-orders
    List,
    /// Take a pre-order, collecting half up front
    Create {
        #[arg(short, long)]
        product: ProductId,
        #[arg(short, long)]
        customer: stockdesk_core::CustomerId,
        #[arg(short, long, default_value = "0")]
        discount: String,
    },
    /// Collect the balance and mark the pre-order delivered
    Pay { id: PreOrderId },
    /// Cancel a pending pre-order
    Cancel { id: PreOrderId },
}

#[derive(Subcommand)]
enum UserAction {
    /// List users
    List,
    /// Invite a user
    Invite {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        /// `admin`, `manager` or `sales_manager`
        #[arg(short, long, default_value = "sales_manager")]
        role: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env before Sentry reads its DSN
    let _ = dotenvy::dotenv();

    // Must be kept alive for the whole run
    let _sentry_guard = telemetry::init_sentry();
    telemetry::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("{}", e.user_message());
        tracing::debug!(error = %e, "Command failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let config = ClientConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");
    let client = ApiClient::new(&config)?;
    let out = Output::new(cli.json);

    match cli.command {
        Commands::Dashboard => commands::dashboard::show(&client, out, Utc::now()).await,
        Commands::Inventory => commands::products::inventory(&client, out).await,
        Commands::Products { action } => match action {
            ProductAction::List => commands::products::list(&client, out).await,
            ProductAction::Add {
                name,
                category,
                price,
                cost_price,
                quantity,
            } => {
                let form = stockdesk_core::validation::ProductForm {
                    name,
                    category,
                    price,
                    cost_price,
                    quantity,
                };
                commands::products::add(&client, form).await
            }
            ProductAction::Delete { id } => commands::products::delete(&client, &id).await,
        },
        Commands::Customers { action } => match action {
            CustomerAction::List => commands::customers::list(&client, out).await,
            CustomerAction::Add {
                name,
                phone,
                address,
            } => {
                let form = stockdesk_core::validation::CustomerForm {
                    name,
                    phone,
                    address,
                };
                commands::customers::add(&client, form).await
            }
        },
        Commands::Sales { action } => match action {
            SalesAction::List => commands::sales::list(&client, out).await,
            SalesAction::Report { from, to } => {
                commands::sales::report(&client, out, stockdesk_core::DateRange::new(from, to))
                    .await
            }
            SalesAction::Record {
                product,
                discount,
                manager,
            } => commands::sales::record(&client, &product, discount, manager).await,
            SalesAction::Revenue { month } => {
                let month = month.unwrap_or_else(|| YearMonth::of(Utc::now()));
                commands::sales::revenue(&client, out, month).await
            }
            SalesAction::Top { limit } => commands::sales::top(&client, out, limit).await,
        },
        Commands::Expenses { action } => match action {
            ExpenseAction::List => commands::expenses::list(&client, out).await,
            ExpenseAction::Add {
                name,
                category,
                cost,
                payment_method,
                description,
                status,
            } => {
                let form = stockdesk_core::validation::ExpenseForm {
                    name,
                    category,
                    cost,
                    payment_method,
                    description,
                    status,
                };
                commands::expenses::add(&client, form).await
            }
            ExpenseAction::Summary => commands::expenses::summary(&client, out).await,
        },
        Commands::Categories { action } => match action {
            CategoryAction::List => commands::expenses::list_categories(&client, out).await,
            CategoryAction::Add { name, description } => {
                let form = stockdesk_core::validation::ExpenseCategoryForm { name, description };
                commands::expenses::add_category(&client, form).await
            }
            CategoryAction::Delete { id } => {
                commands::expenses::delete_category(&client, &id).await
            }
        },
        Commands::Preorders { action } => match action {
            PreOrderAction::List => commands::pre_orders::list(&client, out).await,
            PreOrderAction::Create {
                product,
                customer,
                discount,
            } => commands::pre_orders::create(&client, &product, &customer, discount).await,
            PreOrderAction::Pay { id } => commands::pre_orders::pay(&client, &id).await,
            PreOrderAction::Cancel { id } => commands::pre_orders::cancel(&client, &id).await,
        },
        Commands::Users { action } => match action {
            UserAction::List => commands::users::list(&client, out).await,
            UserAction::Invite { name, email, role } => {
                let form = stockdesk_core::validation::UserForm {
                    full_name: name,
                    email,
                    role,
                };
                commands::users::invite(&client, form).await
            }
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_sales_report_range() {
        let cli = Cli::try_parse_from([
            "stockdesk",
            "--json",
            "sales",
            "report",
            "--from",
            "2024-05-01",
            "--to",
            "2024-05-31",
        ])
        .unwrap();
        assert!(cli.json);
        let Commands::Sales {
            action: SalesAction::Report { from, to },
        } = cli.command
        else {
            panic!("expected sales report");
        };
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(to, NaiveDate::from_ymd_opt(2024, 5, 31));
    }

    #[test]
    fn test_rejects_malformed_month() {
        assert!(Cli::try_parse_from(["stockdesk", "sales", "revenue", "--month", "May"]).is_err());
        assert!(
            Cli::try_parse_from(["stockdesk", "sales", "revenue", "--month", "2024-05"]).is_ok()
        );
    }
}
