use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord, Trim};
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, info, warn};

use crate::engine::ImportError;
use crate::models::TransactionRecord;
use crate::storage::TransactionStore;

/// Streams transactions from a CSV file into a transaction store.
///
/// The file is parsed on a blocking task and records are handed to the store over a
/// bounded channel, so large files never sit fully in memory.
pub struct ImportEngine<S: TransactionStore> {
    store: Arc<S>,
    backpressure: usize
}

impl<S: TransactionStore> ImportEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            backpressure: 256
        }
    }

    /// Imports every valid row of the CSV file at `path` and returns how many were stored.
    ///
    /// Rows that fail to parse or validate are logged and skipped. A missing file is
    /// logged and imports nothing.
    pub async fn run(&self, path: &str) -> anyhow::Result<usize> {
        let (sender, receiver) = mpsc::channel::<TransactionRecord>(self.backpressure);
        let csv_handle = Self::spawn_csv_reader(path.to_string(), sender);
        let imported = self.store_transactions(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        info!("Imported {imported} transactions from {path}");

        Ok(imported)
    }

    fn spawn_csv_reader(path: String, sender: mpsc::Sender<TransactionRecord>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {path} | {error}");
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .from_reader(BufReader::new(file));

            let headers = match reader.headers() {
                Ok(headers) => headers.clone(),
                Err(error) => {
                    error!("Error reading CSV header at path: {path} | {error}");
                    return;
                }
            };

            let mut row = StringRecord::new();

            loop {
                match reader.read_record(&mut row) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(error) if error.is_io_error() => {
                        error!("Error reading CSV at path: {path} | {error}");
                        break;
                    }
                    Err(error) => {
                        error!("CSV read error in {path}: {error}");
                        continue;
                    }
                }

                let record = match parse_row(&row, &headers) {
                    Ok(record) => record,
                    Err(error) => {
                        warn!("Skipping line {} of {path}: {error}", error.line());
                        continue;
                    }
                };

                if sender.blocking_send(record).is_err() {
                    break;
                }
            }
        })
    }

    async fn store_transactions(&self, mut receiver: mpsc::Receiver<TransactionRecord>) -> usize {
        let mut imported = 0;

        while let Some(record) = receiver.recv().await {
            let id = self.store.insert(record);
            debug!("Stored transaction [{id}]");
            imported += 1;
        }

        imported
    }
}

/// Deserializes and validates one CSV row against the file's header.
///
/// # Errors
/// Returns `ImportError` carrying the row's file line if it cannot be read as a
/// transaction or fails validation.
pub(crate) fn parse_row(row: &StringRecord, headers: &StringRecord) -> Result<TransactionRecord, ImportError> {
    let line = row.position().map_or(0, |position| position.line());

    let record: TransactionRecord = row
        .deserialize(Some(headers))
        .map_err(|error| ImportError::MalformedRow { line, reason: error.to_string() })?;

    record.validate().map_err(|source| ImportError::InvalidRecord { line, source })?;

    Ok(record)
}
