use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use labelhub::app_config::env::env_or_default;
use labelhub::app_config::log::setup_logging;
use labelhub::model::{ListQuery, OrderStatus};
use labelhub::{ApiConfig, AppContext, FileTokenStore, SessionEvent};

#[derive(Parser)]
#[command(name = "labelhub", about = "Client for the label print-shop management backend")]
struct Cli {
    /// Backend base URL; falls back to API_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate and persist the session.
    Login { user_name: String, password: String },
    /// Clear the persisted session.
    Logout,
    /// Show the authenticated identity and roles.
    Whoami,
    /// List customers (follows the cursor chain).
    Customers {
        #[arg(long, default_value_t = 20)]
        page_size: i32,
    },
    /// List orders, optionally filtered by status.
    Orders {
        #[arg(long)]
        status: Option<String>,
        #[arg(long, default_value_t = 20)]
        page_size: i32,
    },
    /// Move an order through the status workflow.
    SetOrderStatus { id: i64, status: String },
    /// Download the quote PDF for an order.
    QuotePdf {
        id: i64,
        #[arg(long, default_value = "quote.pdf")]
        out: PathBuf,
    },
    /// Export orders in a date range to a spreadsheet.
    ExportOrders {
        start: String,
        end: String,
        #[arg(long, default_value = "orders-export.bin")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guards = setup_logging()?;
    let cli = Cli::parse();

    let config = match cli.base_url {
        Some(base_url) => ApiConfig::new(base_url),
        None => ApiConfig::from_env()?,
    };
    let store_path = env_or_default("SESSION_FILE", ".labelhub-session.json");
    let store = Arc::new(FileTokenStore::open(store_path).await);
    let ctx = AppContext::init(config, store).await?;

    // observe session transitions for the lifetime of the command
    let mut events = ctx.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                SessionEvent::LoggedOut { redirect } => {
                    info!("session ended, continue at {}", redirect)
                }
                other => debug!("session event: {:?}", other),
            }
        }
    });

    match cli.command {
        Commands::Login { user_name, password } => {
            let auth = ctx.login(&user_name, &password).await?;
            match auth.user {
                Some(user) => println!("logged in as {} ({})", user.name, user.login),
                None => println!("logged in"),
            }
            if !auth.roles.is_empty() {
                println!("roles: {}", auth.roles.join(", "));
            }
        }
        Commands::Logout => {
            ctx.logout().await;
            println!("session cleared");
        }
        Commands::Whoami => {
            if !ctx.session.is_authenticated().await {
                return Err(anyhow!("not logged in"));
            }
            match ctx.session.current_user().await {
                Some(user) => println!("{} ({})", user.name, user.login),
                None => println!("identity not stored; token present"),
            }
            let roles = ctx.session.roles().await;
            if !roles.is_empty() {
                println!("roles: {}", roles.join(", "));
            }
        }
        Commands::Customers { page_size } => {
            let customers = ctx
                .customers
                .list_all(&ListQuery::new().page_size(page_size))
                .await?;
            for customer in &customers {
                println!(
                    "{:>6}  {}",
                    customer.id,
                    customer.corporate_name.as_deref().unwrap_or("-")
                );
            }
            println!("{} customers", customers.len());
        }
        Commands::Orders { status, page_size } => {
            let mut query = ListQuery::new().page_size(page_size);
            if let Some(status) = status {
                let status = OrderStatus::from_str(&status).map_err(|e| anyhow!(e))?;
                query = query.status_code(status.into());
            }
            let page = ctx.orders.list(&query).await?;
            for order in &page.data {
                println!(
                    "{:>6}  #{:<8} {:<11} total {:.2}",
                    order.id,
                    order.order_number,
                    order.status.as_str(),
                    order.total
                );
            }
        }
        Commands::SetOrderStatus { id, status } => {
            let status = OrderStatus::from_str(&status).map_err(|e| anyhow!(e))?;
            let order = ctx.orders.get(id).await?;
            let updated = ctx.orders.set_status(&order, status).await?;
            println!("order {} is now {}", updated.id, updated.status.as_str());
        }
        Commands::QuotePdf { id, out } => {
            let bytes = ctx.orders.quote_pdf(id).await?;
            tokio::fs::write(&out, &bytes)
                .await
                .with_context(|| format!("writing {}", out.display()))?;
            println!("wrote {} bytes to {}", bytes.len(), out.display());
        }
        Commands::ExportOrders { start, end, out } => {
            let start = NaiveDate::parse_from_str(&start, "%Y-%m-%d").context("start date")?;
            let end = NaiveDate::parse_from_str(&end, "%Y-%m-%d").context("end date")?;
            let bytes = ctx.orders.export(start, end).await?;
            tokio::fs::write(&out, &bytes)
                .await
                .with_context(|| format!("writing {}", out.display()))?;
            println!("wrote {} bytes to {}", bytes.len(), out.display());
        }
    }

    Ok(())
}
