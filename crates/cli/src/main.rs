//! paywebform - admin CLI for the payment webform queue
//!
//! Operates directly on the SQLite database; no daemon involved.

mod app;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tabled::{Table, Tabled};

use app::App;
use logging::{init_logging, LogFormat};
use paywebform_core::domain::{NewComponent, PaymentId, PaymentStatus, QueueEntry};

const DEFAULT_DB_PATH: &str = "~/.paywebform/queue.db";
const NOT_FOUND: &str = "not found";

#[derive(Parser, Debug)]
#[command(name = "paywebform")]
#[command(about = "Payment webform queue administration", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// SQLite database path or URL (`~` is expanded)
    #[arg(long, global = true, env = "PAYWEBFORM_DB_PATH", default_value = DEFAULT_DB_PATH)]
    db: String,

    /// Log output format
    #[arg(long, global = true, env = "PAYWEBFORM_LOG_FORMAT", value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Queue a payment under a webform component
    QueueInsert {
        #[arg(long)]
        cid: i64,
        #[arg(long)]
        pid: i64,
    },

    /// Look up the payment queued under a component for a user
    QueueLoad {
        #[arg(long)]
        cid: i64,
        #[arg(long)]
        uid: i64,
    },

    /// List everything queued under a component
    QueueList {
        #[arg(long)]
        cid: i64,
    },

    /// Create a payment
    PaymentCreate {
        /// Owner of the payment
        #[arg(long)]
        uid: i64,

        /// PENDING, SUCCESS, FAILED or CANCELLED
        #[arg(long, default_value = "SUCCESS")]
        status: PaymentStatus,
    },

    /// Delete a payment (and its queue entries)
    DeletePayment {
        #[arg(long)]
        pid: i64,
    },

    /// Create a payment component on a webform node
    ComponentCreate {
        #[arg(long)]
        nid: i64,
        #[arg(long)]
        form_key: String,
    },

    /// Delete a webform component (and its queue entries)
    DeleteComponent {
        #[arg(long)]
        nid: i64,
        #[arg(long)]
        cid: i64,
    },
}

#[derive(Tabled)]
struct EntryRow {
    cid: i64,
    pid: i64,
    queued_at: String,
}

impl From<QueueEntry> for EntryRow {
    fn from(entry: QueueEntry) -> Self {
        let queued_at = chrono::DateTime::from_timestamp_millis(entry.queued_at)
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| entry.queued_at.to_string());
        Self {
            cid: entry.cid,
            pid: entry.pid,
            queued_at,
        }
    }
}

/// `queue-load` output: the pid, or `not found` (still a successful run)
fn lookup_line(pid: Option<PaymentId>) -> String {
    match pid {
        Some(pid) => pid.to_string(),
        None => NOT_FOUND.to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format)?;

    let db_path = shellexpand::tilde(&cli.db).into_owned();
    let app = App::open(&db_path)
        .await
        .with_context(|| format!("Failed to open database at {}", db_path))?;

    run(&app, cli.command).await
}

async fn run(app: &App, command: Commands) -> Result<()> {
    match command {
        Commands::QueueInsert { cid, pid } => {
            app.queue.insert(cid, pid).await?;
            println!(
                "{}",
                format!("✓ Payment {} queued under component {}", pid, cid)
                    .green()
                    .bold()
            );
        }

        Commands::QueueLoad { cid, uid } => {
            let pid = app.queue.load(cid, uid).await?;
            let line = lookup_line(pid);
            match pid {
                Some(_) => println!("{}", line),
                None => println!("{}", line.yellow()),
            }
        }

        Commands::QueueList { cid } => {
            let rows: Vec<EntryRow> = app
                .queue
                .entries(cid)
                .await?
                .into_iter()
                .map(EntryRow::from)
                .collect();

            if rows.is_empty() {
                println!("{}", format!("Nothing queued under component {}", cid).yellow());
            } else {
                println!("{}", Table::new(rows));
            }
        }

        Commands::PaymentCreate { uid, status } => {
            let pid = app.payments.create(uid, status).await?;
            println!("{}", format!("✓ Payment {} created", pid).green().bold());
        }

        Commands::DeletePayment { pid } => {
            if app.payments.delete(pid).await? {
                println!("{}", format!("✓ Payment {} deleted", pid).green().bold());
            } else {
                println!("{}", format!("○ Payment {} did not exist", pid).yellow());
            }
        }

        Commands::ComponentCreate { nid, form_key } => {
            let cid = app
                .components
                .insert(NewComponent::payment(nid, form_key))
                .await?;
            println!("{}", format!("✓ Component {} created", cid).green().bold());
        }

        Commands::DeleteComponent { nid, cid } => {
            if app.components.delete(nid, cid).await? {
                println!("{}", format!("✓ Component {} deleted", cid).green().bold());
            } else {
                println!("{}", format!("○ Component {} did not exist", cid).yellow());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_queue_insert() {
        let cli = Cli::try_parse_from([
            "paywebform",
            "--db",
            "sqlite::memory:",
            "queue-insert",
            "--cid",
            "1",
            "--pid",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.db, "sqlite::memory:");
        assert!(matches!(cli.command, Commands::QueueInsert { cid: 1, pid: 2 }));
    }

    #[test]
    fn test_parse_payment_status() {
        let cli = Cli::try_parse_from([
            "paywebform",
            "payment-create",
            "--uid",
            "4",
            "--status",
            "pending",
        ])
        .unwrap();

        match cli.command {
            Commands::PaymentCreate { uid, status } => {
                assert_eq!(uid, 4);
                assert_eq!(status, PaymentStatus::Pending);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(Cli::try_parse_from([
            "paywebform",
            "payment-create",
            "--uid",
            "4",
            "--status",
            "refunded",
        ])
        .is_err());
    }

    #[test]
    fn test_entry_row_formats_timestamp() {
        let row = EntryRow::from(QueueEntry {
            cid: 1,
            pid: 2,
            queued_at: 0,
        });
        assert!(row.queued_at.starts_with("1970-01-01T00:00:00"));
    }

    #[test]
    fn test_lookup_line() {
        assert_eq!(lookup_line(Some(2)), "2");
        assert_eq!(lookup_line(None), "not found");
    }

    #[tokio::test]
    async fn test_queue_load_not_found_succeeds() {
        let app = App::open("sqlite::memory:").await.unwrap();

        // Wrong component and wrong user are both a normal negative result
        run(&app, Commands::PaymentCreate { uid: 2, status: PaymentStatus::Success })
            .await
            .unwrap();
        run(&app, Commands::QueueInsert { cid: 1, pid: 1 }).await.unwrap();

        assert!(run(&app, Commands::QueueLoad { cid: 2, uid: 2 }).await.is_ok());
        assert!(run(&app, Commands::QueueLoad { cid: 1, uid: 3 }).await.is_ok());
        assert_eq!(app.queue.load(1, 3).await.unwrap(), None);
        assert!(run(&app, Commands::QueueLoad { cid: 1, uid: 2 }).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_against_memory_db() {
        let app = App::open("sqlite::memory:").await.unwrap();

        run(&app, Commands::PaymentCreate { uid: 2, status: PaymentStatus::Success })
            .await
            .unwrap();
        run(&app, Commands::QueueInsert { cid: 1, pid: 1 }).await.unwrap();
        assert_eq!(app.queue.load(1, 2).await.unwrap(), Some(1));

        run(&app, Commands::DeletePayment { pid: 1 }).await.unwrap();
        assert_eq!(app.queue.load(1, 2).await.unwrap(), None);
    }
}
