use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::application::{
    ExpenseRow, ExpenseService, Summary, ALL_CATEGORIES, DEFAULT_TOTAL_INCOME,
};
use crate::domain::{format_amount, parse_amount, Category, CurrencyEntry, CurrencyTable, Ledger};

/// Outgo - Expense Tracker
#[derive(Parser)]
#[command(name = "outgo")]
#[command(about = "An in-memory expense ledger with multi-currency display")]
#[command(version)]
pub struct Cli {
    /// Display currency code (e.g. USD, EUR)
    #[arg(short, long, global = true, default_value = "GHS")]
    pub currency: String,

    /// Total income in the base currency, shown on the summary
    #[arg(long, global = true, default_value_t = DEFAULT_TOTAL_INCOME)]
    pub income: f64,

    /// JSON file with currency rates to use instead of the built-in table
    #[arg(long, global = true)]
    pub rates: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show total income, expenses and balance
    Summary {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List expenses, optionally filtered by category
    List {
        /// Category filter: food, transport, entertainment, utilities
        /// (omit for all)
        #[arg(long)]
        category: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Record a new expense and show the updated ledger
    Add {
        /// Short description (e.g. "Groceries")
        title: String,

        /// Amount in the base currency (e.g. "15.99")
        amount: String,

        /// Category: food, transport, entertainment, utilities
        category: String,

        /// Expense date (ISO 8601 format: YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete an expense by id and show the updated ledger
    Remove {
        /// Expense id
        id: u32,
    },

    /// List supported currencies and their rates
    Currencies,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let currencies = match &self.rates {
            Some(path) => load_rates(path)?,
            None => CurrencyTable::builtin(),
        };
        let mut service = ExpenseService::new(Ledger::seeded(), currencies, self.income);

        match self.command {
            Commands::Summary { format } => {
                let summary = service.summary(&self.currency)?;
                if format == "json" {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                } else {
                    print_summary(&summary);
                }
            }

            Commands::List { category, format } => {
                let filter = category.as_deref().unwrap_or(ALL_CATEGORIES);
                let rows = service.filtered_rows(filter, &self.currency)?;
                if format == "json" {
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                } else {
                    print_rows(&rows);
                }
            }

            Commands::Add {
                title,
                amount,
                category,
                date,
            } => {
                let amount = parse_amount(&amount)
                    .with_context(|| format!("invalid amount: {amount}"))?;
                let category = parse_category(&category)?;
                let date = match date {
                    Some(raw) => parse_date(&raw)?,
                    None => Local::now().date_naive(),
                };

                let record = service.add_expense(title, amount, category, date)?;
                let entry = service.currencies().get(&self.currency)?;
                println!(
                    "Recorded expense #{}: {} ({})",
                    record.id,
                    record.title,
                    format_amount(&entry.symbol, record.amount * entry.rate)
                );
                println!();
                print_summary(&service.summary(&self.currency)?);
                println!();
                print_rows(&service.filtered_rows(ALL_CATEGORIES, &self.currency)?);
            }

            Commands::Remove { id } => {
                if service.remove_expense(id) {
                    println!("Removed expense #{id}");
                } else {
                    println!("No expense with id {id}, nothing removed");
                }
                println!();
                print_summary(&service.summary(&self.currency)?);
                println!();
                print_rows(&service.filtered_rows(ALL_CATEGORIES, &self.currency)?);
            }

            Commands::Currencies => {
                println!("{:<6} {:<8} {:>10}", "CODE", "SYMBOL", "RATE");
                println!("{}", "-".repeat(26));
                for (code, entry) in service.currencies().iter() {
                    println!("{:<6} {:<8} {:>10}", code, entry.symbol, entry.rate);
                }
            }
        }

        Ok(())
    }
}

/// Load a currency table from a JSON file mapping code -> { symbol, rate }.
fn load_rates(path: &PathBuf) -> Result<CurrencyTable> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rates file: {}", path.display()))?;
    let entries: BTreeMap<String, CurrencyEntry> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid rates file: {}", path.display()))?;
    let table = CurrencyTable::new(entries)?;
    Ok(table)
}

fn parse_category(raw: &str) -> Result<Category> {
    match Category::from_str(raw) {
        Some(category) => Ok(category),
        None => bail!(
            "unknown category '{}' (expected one of: food, transport, entertainment, utilities)",
            raw
        ),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{raw}' (expected YYYY-MM-DD)"))
}

fn print_summary(summary: &Summary) {
    println!(
        "Total Balance:  {}",
        format_amount(&summary.symbol, summary.total_balance)
    );
    println!(
        "Total Income:   {}",
        format_amount(&summary.symbol, summary.total_income)
    );
    println!(
        "Total Expenses: {}",
        format_amount(&summary.symbol, summary.total_expenses)
    );
}

fn print_rows(rows: &[ExpenseRow]) {
    if rows.is_empty() {
        println!("No expenses found.");
        return;
    }

    println!(
        "{:<4} {:<14} {:<24} {:<15} {:>14}",
        "ID", "DATE", "TITLE", "CATEGORY", "AMOUNT"
    );
    println!("{}", "-".repeat(75));
    for row in rows {
        println!(
            "{:<4} {:<14} {:<24} {:<15} {:>14}",
            row.id, row.date, row.title, row.category, row.amount
        );
    }
}
