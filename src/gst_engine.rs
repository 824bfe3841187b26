use crate::balance::GstBalance;
use crate::cli_io::CliOptions;
use crate::error::GstError;
use crate::settlement::SettlementResult;
use crate::transaction::Transaction;
use tracing::info;
pub use precedence::{PrecedenceRule, PrecedenceTable};
mod aggregate;
mod batch_execute;
mod precedence;
mod settle;
mod stream_process;

/// What the aggregator does with an amount below zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum NegativeAmountPolicy {
    /// Sum it as given
    #[default]
    Accept,
    /// Fail aggregation
    Reject,
    /// Count it as zero
    Clamp,
}

/// Turns tax transactions into a balance and a settlement.
/// Holds only configuration; every call starts from fresh values.
#[derive(Debug, Clone, Default)]
pub struct GstEngine {
    /// Which credit pools may settle which payable head, and in what order
    precedence: PrecedenceTable,
    negative_amounts: NegativeAmountPolicy,
}

impl GstEngine {
    pub fn new(precedence: PrecedenceTable, negative_amounts: NegativeAmountPolicy) -> Self {
        Self {
            precedence,
            negative_amounts,
        }
    }

    pub fn precedence(&self) -> &PrecedenceTable {
        &self.precedence
    }

    /// Runs the engine against the CLI's input file, strictly unless `--lenient`
    pub fn execute_cli(&self, cli_options: &CliOptions) -> Result<(), GstError> {
        info!(
            input = %cli_options.input_file,
            lenient = cli_options.lenient,
            negative_amounts = ?self.negative_amounts,
            "starting settlement run"
        );
        if cli_options.lenient {
            self.streaming_execute(cli_options)?;
        } else {
            self.batch_execute(cli_options)?;
        }
        Ok(())
    }
}

/// Aggregates with the statutory engine, accepting amounts as given
pub fn aggregate(transactions: &[Transaction]) -> Result<GstBalance, GstError> {
    GstEngine::default().aggregate(transactions)
}

/// Settles with the statutory precedence table
pub fn settle(balance: &GstBalance) -> Result<SettlementResult, GstError> {
    GstEngine::default().settle(balance)
}
