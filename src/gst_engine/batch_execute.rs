use super::GstEngine;
use crate::balance::GstBalance;
use crate::cli_io::{output_report, parse_txns_csv, CliOptions};
use crate::error::GstError;
use crate::settlement::SettlementResult;
use tracing::info;

impl GstEngine {
    /// Reads the whole input strictly, then aggregates, settles and reports.
    /// Nothing is written if any record is bad.
    pub(super) fn batch_execute(
        &self,
        cli_input: &CliOptions,
    ) -> Result<(GstBalance, SettlementResult), GstError> {
        let txns = parse_txns_csv(cli_input.input_file.as_str(), !cli_input.no_header)?;
        info!(txns = txns.len(), "parsed transactions");

        let balance = self.aggregate(&txns)?;
        let settlement = self.settle(&balance)?;
        output_report(&balance, &settlement, &cli_input.output())?;
        Ok((balance, settlement))
    }
}
