use super::import_engine::parse_row;
use super::{ImportEngine, ImportError};

use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

use crate::models::RecordError;
use crate::storage::{TransactionStorage, TransactionStore};

fn create_temporary_csv(rows: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "date,category,amount,vendor,owner")?;

    for row in rows {
        writeln!(file, "{row}")?;
    }

    Ok(file)
}

fn path_of(file: &NamedTempFile) -> Result<String> {
    file.path()
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("temporary path is not valid UTF-8"))
}

#[tokio::test]
async fn test_engine_imports_valid_csv_in_file_order() -> Result<()> {
    let file = create_temporary_csv(&[
        "2024-01-05,Grocery,50.00,Safeway,Sample",
        "2024-01-12,Grocery,30.00,Costco,Sample",
        "2024-01-20,Gas,20.00,Shell,Alice",
    ])?;

    let storage = Arc::new(TransactionStorage::new());
    let engine = ImportEngine::new(storage.clone());
    let imported = engine.run(&path_of(&file)?).await?;

    assert_eq!(imported, 3);

    let records = storage.load_all("")?;
    let vendors: Vec<&str> = records.iter().map(|record| record.vendor.as_str()).collect();

    assert_eq!(vendors, vec!["Safeway", "Costco", "Shell"]);
    assert_eq!(records[0].amount, Decimal::from_str("50")?);

    Ok(())
}

#[tokio::test]
async fn test_engine_skips_malformed_and_invalid_rows() -> Result<()> {
    let file = create_temporary_csv(&[
        "2024-01-05,Grocery,50.00,Safeway,Sample",
        "not-a-date,Grocery,10.00,Safeway,Sample",
        "2024-01-06,Grocery,abc,Safeway,Sample",
        "2024-01-07,Grocery,0,Safeway,Sample",
        "2024-01-08,Grocery,-5,Safeway,Sample",
        "2024-01-09,,5,Safeway,Sample",
        "2024-01-10,Gas,20.00,Shell,Sample",
    ])?;

    let storage = Arc::new(TransactionStorage::new());
    let engine = ImportEngine::new(storage.clone());
    let imported = engine.run(&path_of(&file)?).await?;

    assert_eq!(imported, 2);
    assert_eq!(storage.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_engine_trims_whitespace_around_fields() -> Result<()> {
    let file = create_temporary_csv(&["2024-01-05 , Dining Out , 12.50 , Bistro , Sample"])?;

    let storage = Arc::new(TransactionStorage::new());
    ImportEngine::new(storage.clone()).run(&path_of(&file)?).await?;

    let records = storage.load_all("Sample")?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].category, "Dining Out");
    assert_eq!(records[0].vendor, "Bistro");

    Ok(())
}

#[tokio::test]
async fn test_engine_handles_missing_csv_file_without_error() -> Result<()> {
    let storage = Arc::new(TransactionStorage::new());
    let engine = ImportEngine::new(storage.clone());

    assert_eq!(engine.run("missing.csv").await?, 0);
    assert!(storage.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_engine_handles_files_larger_than_the_channel() -> Result<()> {
    let rows: Vec<String> = (1..=1000)
        .map(|index| format!("2024-02-{:02},Grocery,{index},Store {index},Sample", index % 28 + 1))
        .collect();
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let file = create_temporary_csv(&row_refs)?;

    let storage = Arc::new(TransactionStorage::new());
    let imported = ImportEngine::new(storage.clone()).run(&path_of(&file)?).await?;

    assert_eq!(imported, 1000);
    assert_eq!(storage.load_all("Sample")?.len(), 1000);

    Ok(())
}

#[tokio::test]
async fn test_engine_keeps_amount_scale_and_every_digit() -> Result<()> {
    let file = create_temporary_csv(&[
        "2024-01-05,Dining Out,42.50,Bistro,Sample",
        "2024-01-06,Mortgage,12345678901234567.89,Bank,Sample",
    ])?;

    let storage = Arc::new(TransactionStorage::new());
    ImportEngine::new(storage.clone()).run(&path_of(&file)?).await?;

    let records = storage.load_all("Sample")?;

    assert_eq!(records[0].amount.to_string(), "42.50");
    assert_eq!(records[1].amount, Decimal::from_str("12345678901234567.89")?);
    assert_eq!(records[1].amount.to_string(), "12345678901234567.89");

    Ok(())
}

#[test]
fn test_rejected_rows_report_their_file_line() -> Result<()> {
    let contents = "date,category,amount,vendor,owner\n\
                    2024-01-05,Grocery,50.00,Safeway,Sample\n\
                    not-a-date,Grocery,10.00,Safeway,Sample\n\
                    2024-01-07,Grocery,0,Safeway,Sample\n";

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(contents.as_bytes());
    let headers = reader.headers()?.clone();
    let rows = reader.records().collect::<Result<Vec<_>, _>>()?;

    assert_eq!(parse_row(&rows[0], &headers)?.amount.to_string(), "50.00");

    let malformed = parse_row(&rows[1], &headers).err().ok_or_else(|| anyhow!("row 3 should be rejected"))?;
    assert!(matches!(malformed, ImportError::MalformedRow { line: 3, .. }));

    let invalid = parse_row(&rows[2], &headers).err().ok_or_else(|| anyhow!("row 4 should be rejected"))?;
    assert_eq!(invalid, ImportError::InvalidRecord { line: 4, source: RecordError::NonPositiveAmount { amount: Decimal::ZERO } });
    assert_eq!(invalid.line(), 4);

    Ok(())
}
