use super::GstEngine;
use crate::balance::GstBalance;
use crate::cli_io::{output_report, read_raw_txns, txn_reader, CliOptions};
use crate::error::GstError;
use tracing::{info, warn};

/// Running state of a lenient pass over an input file
#[derive(Debug, Default, PartialEq)]
pub struct StreamOutcome {
    pub balance: GstBalance,
    pub processed: usize,
    pub skipped: usize,
}

impl GstEngine {
    /// Folds records into the balance one at a time.
    /// Malformed or rejected records are logged and skipped; overflow still aborts.
    fn stream_process_csv(
        &self,
        in_file_path: &str,
        has_header: bool,
    ) -> Result<StreamOutcome, GstError> {
        let mut rdr = txn_reader(in_file_path, has_header)?;
        let mut outcome = StreamOutcome::default();

        read_raw_txns(&mut rdr, |line, result| {
            let txn = match result {
                Ok(record) => record.convert_to_txn(),
                Err(e) => {
                    warn!(line, error = %e, "skipping unreadable record");
                    outcome.skipped += 1;
                    return Ok(());
                }
            };
            let txn = match txn {
                Ok(txn) => txn,
                Err(e) => {
                    warn!(line, error = %e, "skipping invalid record");
                    outcome.skipped += 1;
                    return Ok(());
                }
            };
            match self.fold_txn(&mut outcome.balance, &txn) {
                Ok(_) => outcome.processed += 1,
                Err(e @ GstError::NegativeAmount { .. }) => {
                    warn!(line, error = %e, "skipping rejected record");
                    outcome.skipped += 1;
                }
                Err(e) => return Err(e),
            }
            Ok(())
        })?;

        outcome.balance.input.total("input")?;
        outcome.balance.output.total("output")?;
        Ok(outcome)
    }

    /// Reports whatever could be read even when some records were bad
    pub(super) fn streaming_execute(&self, cli_input: &CliOptions) -> Result<StreamOutcome, GstError> {
        let outcome = self.stream_process_csv(&cli_input.input_file, !cli_input.no_header)?;
        info!(
            processed = outcome.processed,
            skipped = outcome.skipped,
            "streamed transactions"
        );

        let settlement = self.settle(&outcome.balance)?;
        output_report(&outcome.balance, &settlement, &cli_input.output())?;
        Ok(outcome)
    }
}
