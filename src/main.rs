use std::io::{stderr, stdout, BufWriter};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use finance_tracker::aggregate::{AggregationResult, TransactionAggregator};
use finance_tracker::engine::ImportEngine;
use finance_tracker::filter::{AmountMode, AmountRule, DateMode, DateRule, FilterCriteria, FilterError, TextMode, TextRule};
use finance_tracker::models::{RecordField, SortOrder, TransactionRecord};
use finance_tracker::storage::{TransactionStorage, TransactionStore};

/// Filter and summarize personal finance transactions from a CSV file.
///
/// Results are written to stdout as CSV; logs go to stderr.
#[derive(Debug, Parser)]
#[command(name = "finance-tracker", version)]
struct Args {
    /// CSV file with a `date,category,amount,vendor,owner` header
    input: String,

    /// Only include transactions belonging to this owner
    #[arg(long, default_value = "")]
    owner: String,

    /// Date filter: none, before, after, between
    #[arg(long = "date", default_value = "none")]
    date_mode: DateMode,
    /// Date used by before/after, and the start of a between range (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,
    /// End of a between range (YYYY-MM-DD)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Category filter: none, equals, contains
    #[arg(long = "category", default_value = "none")]
    category_mode: TextMode,
    #[arg(long)]
    category_text: Option<String>,

    /// Amount filter: none, equals, "greater than", "less than", between
    #[arg(long = "amount", default_value = "none")]
    amount_mode: AmountMode,
    /// Amount compared against, and the lower bound of a between range
    #[arg(long, allow_negative_numbers = true)]
    value: Option<Decimal>,
    /// Upper bound of a between range
    #[arg(long, allow_negative_numbers = true)]
    other_value: Option<Decimal>,

    /// Vendor filter: none, equals, contains
    #[arg(long = "vendor", default_value = "none")]
    vendor_mode: TextMode,
    #[arg(long)]
    vendor_text: Option<String>,

    /// Sort by column: date, category, amount, vendor, owner
    #[arg(long)]
    sort: Option<RecordField>,
    /// Sort in descending order
    #[arg(long)]
    descending: bool,

    /// Print per-category totals instead of transactions
    #[arg(long)]
    summary: bool,

    /// Available log levels: error, warn, info, debug, trace
    #[arg(long, default_value = "error")]
    log_level: String
}

impl Args {
    fn criteria(&self) -> Result<FilterCriteria, FilterError> {
        Ok(FilterCriteria::new()
            .with_date(DateRule::from_parts(self.date_mode, self.start, self.end)?)
            .with_category(TextRule::from_parts(RecordField::Category, self.category_mode, self.category_text.clone())?)
            .with_amount(AmountRule::from_parts(self.amount_mode, self.value, self.other_value)?)
            .with_vendor(TextRule::from_parts(RecordField::Vendor, self.vendor_mode, self.vendor_text.clone())?))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(parse_log_level(&args.log_level));

    let storage = Arc::new(TransactionStorage::new());
    let engine = ImportEngine::new(storage.clone());

    let timer = Instant::now();
    engine.run(&args.input).await?;
    let duration = timer.elapsed();

    info!("Loaded transactions in: {duration:?}");

    let mut records = match args.criteria()?.compile(&args.owner) {
        Ok(predicate) => storage.load_filtered(&predicate)?,
        Err(FilterError::NoActiveFilter) => {
            info!("No filter rule is active, loading every transaction");
            storage.load_all(&args.owner)?
        }
        Err(error) => return Err(error.into())
    };

    if let Some(column) = args.sort {
        SortOrder::new(column, !args.descending).apply(&mut records);
    }

    if args.summary {
        write_summary_to_stdout(&TransactionAggregator::aggregate(&records))?;
    } else {
        write_records_to_stdout(&records)?;
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the CSV output, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_records_to_stdout(records: &[TransactionRecord]) -> Result<()> {
    let mut output = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(stdout().lock()));

    output.write_record(["date", "category", "amount", "vendor", "owner"])?;

    for record in records {
        output.serialize(record)?;
    }

    output.flush()?;

    Ok(())
}

fn write_summary_to_stdout(result: &AggregationResult) -> Result<()> {
    let mut output = csv::Writer::from_writer(BufWriter::new(stdout().lock()));

    output.write_record(["category", "amount"])?;

    for (category, amount) in result.categories() {
        output.write_record([category, amount.to_string().as_str()])?;
    }

    output.write_record(["total", result.total_amount.to_string().as_str()])?;

    output.flush()?;

    Ok(())
}
