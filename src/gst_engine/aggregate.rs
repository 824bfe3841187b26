use super::{GstEngine, NegativeAmountPolicy};
use crate::balance::{GstBalance, HeadTotals};
use crate::error::GstError;
use crate::transaction::{TaxHead, Transaction, TxnType};
use rust_decimal::Decimal;
use tracing::{debug, warn};

impl GstEngine {
    /// Applies the negative amount policy to a single head amount
    fn admit_amount(&self, head: TaxHead, amount: Decimal) -> Result<Decimal, GstError> {
        if amount >= Decimal::ZERO {
            return Ok(amount);
        }
        match self.negative_amounts {
            NegativeAmountPolicy::Accept => Ok(amount),
            NegativeAmountPolicy::Reject => Err(GstError::NegativeAmount { head, amount }),
            NegativeAmountPolicy::Clamp => {
                warn!(%head, %amount, "clamping negative amount to zero");
                Ok(Decimal::ZERO)
            }
        }
    }

    /// Adds every head of `txn` into `bucket`. Leaves `bucket` untouched on error.
    fn process_bucket(
        &self,
        bucket: &mut HeadTotals,
        txn: &Transaction,
        label: &'static str,
    ) -> Result<(), GstError> {
        let mut next = *bucket;
        for head in TaxHead::ALL {
            let amount = self.admit_amount(head, txn.amount(head))?;
            next.add(head, amount, label)?;
        }
        *bucket = next;
        Ok(())
    }

    /// Folds a single transaction into a running balance
    pub fn fold_txn(&self, balance: &mut GstBalance, txn: &Transaction) -> Result<(), GstError> {
        match txn.txn_type {
            TxnType::Input => self.process_bucket(&mut balance.input, txn, "input"),
            TxnType::Output => self.process_bucket(&mut balance.output, txn, "output"),
        }
    }

    /// Sums input credit and output payable per head. Order of `transactions` is irrelevant.
    pub fn aggregate(&self, transactions: &[Transaction]) -> Result<GstBalance, GstError> {
        let mut balance = GstBalance::new();
        for txn in transactions {
            self.fold_txn(&mut balance, txn)?;
        }
        let display_str = balance.get_display_str()?;

        debug!(
            txns = transactions.len(),
            balance = %display_str,
            "aggregated transactions"
        );
        Ok(balance)
    }
}
