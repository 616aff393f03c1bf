use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};

use crate::api::{DEFAULT_BASE_URL, HttpApi, TransactionApi};
use crate::application::LedgerStore;
use crate::domain::{Transaction, TransactionInput, format_amount, parse_amount};

/// Moneta - Personal Finance Tracker Client
#[derive(Parser)]
#[command(name = "moneta")]
#[command(about = "A command line client for the personal finance tracker API")]
#[command(version)]
pub struct Cli {
    /// Base address of the tracker service
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show income and expense totals and the balance
    Summary,

    /// Show the most recent transactions across both collections
    History,

    /// List all income records
    Incomes,

    /// List all expense records
    Expenses,

    /// Record a new income
    AddIncome {
        /// Amount (e.g., "50.00" or "50")
        amount: String,

        /// Title of the income
        title: String,

        /// Category (e.g., "salary", "freelance")
        #[arg(short, long, default_value = "")]
        category: String,

        /// Description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Date of the income (ISO 8601 format: YYYY-MM-DD, defaults to now)
        #[arg(long)]
        date: Option<String>,
    },

    /// Record a new expense
    AddExpense {
        /// Amount (e.g., "50.00" or "50")
        amount: String,

        /// Title of the expense
        title: String,

        /// Category (e.g., "groceries", "rent")
        #[arg(short, long, default_value = "")]
        category: String,

        /// Description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Date of the expense (ISO 8601 format: YYYY-MM-DD, defaults to now)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete an income record
    DeleteIncome {
        /// Income identifier
        id: String,
    },

    /// Delete an expense record
    DeleteExpense {
        /// Expense identifier
        id: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut store = LedgerStore::new(HttpApi::new(self.base_url.clone()));

        match self.command {
            Commands::Summary => {
                store.refresh().await;
                println!("Income:   {}", format_amount(store.total_income()));
                println!("Expenses: {}", format_amount(store.total_expenses()));
                println!("Balance:  {}", format_amount(store.total_balance()));
            }

            Commands::History => {
                store.refresh().await;
                let history = store.transaction_history();
                if history.is_empty() {
                    println!("No transactions yet.");
                } else {
                    print_transactions(&history);
                }
            }

            Commands::Incomes => {
                store.load_incomes().await;
                print_transactions(store.incomes());
            }

            Commands::Expenses => {
                store.load_expenses().await;
                print_transactions(store.expenses());
            }

            Commands::AddIncome {
                amount,
                title,
                category,
                description,
                date,
            } => {
                let input = build_input(&amount, title, category, description, date)?;
                store.add_income(&input).await;
                report_mutation(&mut store, "Income recorded");
                print_transactions(store.incomes());
            }

            Commands::AddExpense {
                amount,
                title,
                category,
                description,
                date,
            } => {
                let input = build_input(&amount, title, category, description, date)?;
                store.add_expense(&input).await;
                report_mutation(&mut store, "Expense recorded");
                print_transactions(store.expenses());
            }

            Commands::DeleteIncome { id } => {
                store.delete_income(&id).await;
                println!("Deleted income {}", id);
                print_transactions(store.incomes());
            }

            Commands::DeleteExpense { id } => {
                store.delete_expense(&id).await;
                println!("Deleted expense {}", id);
                print_transactions(store.expenses());
            }
        }

        Ok(())
    }
}

fn build_input(
    amount: &str,
    title: String,
    category: String,
    description: String,
    date: Option<String>,
) -> Result<TransactionInput> {
    let amount = parse_amount(amount)?;
    let date = match date {
        Some(date_str) => parse_date(&date_str)?,
        None => Utc::now(),
    };

    Ok(TransactionInput::new(amount, title, date)
        .with_category(category)
        .with_description(description))
}

fn parse_date(date_str: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}', expected YYYY-MM-DD", date_str))?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// Print the outcome of a mutation and dismiss any captured error,
/// mirroring how a GUI would display and clear `last_error`.
fn report_mutation<C: TransactionApi>(store: &mut LedgerStore<C>, success: &str) {
    match store.last_error().map(str::to_string) {
        Some(message) => {
            eprintln!("Error: {}", message);
            store.set_error(None);
        }
        None => println!("{}", success),
    }
}

fn print_transactions(transactions: &[Transaction]) {
    for transaction in transactions {
        println!(
            "{}  {:>10}  {:<20} {:<12} {}",
            transaction.date.format("%Y-%m-%d"),
            format_amount(transaction.amount),
            transaction.title,
            transaction.category,
            transaction.id,
        );
    }
}
