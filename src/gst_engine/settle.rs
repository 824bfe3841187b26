use super::GstEngine;
use crate::balance::GstBalance;
use crate::error::GstError;
use crate::settlement::{HeadSettlement, SettlementResult};
use crate::transaction::TaxHead;
use rust_decimal::Decimal;
use tracing::debug;

impl GstEngine {
    /// Offsets each head's payable against the credit pools its rule allows,
    /// walking rules in table order so earlier heads claim shared credit first.
    /// A head without a rule stays fully payable.
    pub fn settle(&self, balance: &GstBalance) -> Result<SettlementResult, GstError> {
        let mut result = SettlementResult::default();
        for head in TaxHead::ALL {
            *result.head_mut(head) = HeadSettlement::new(balance.output.get(head));
        }

        let mut credit = balance.input;
        for rule in self.precedence.rules() {
            let settlement = result.head_mut(rule.payable);
            let mut remaining = settlement.payable.max(Decimal::ZERO);

            for &pool in &rule.credit_order {
                if remaining.is_zero() {
                    break;
                }
                let available = credit.get(pool).max(Decimal::ZERO);
                let draw = remaining.min(available);
                if draw.is_zero() {
                    continue;
                }
                // draw <= available and draw <= remaining, neither subtraction can go negative
                credit.set(pool, available - draw);
                remaining -= draw;
                settlement.record_draw(rule.payable, pool, draw)?;
                debug!(payable = %rule.payable, %pool, %draw, "drew credit");
            }
        }
        result.unused_credit = credit;

        debug!(
            igst = %result.igst.final_payable(),
            cgst = %result.cgst.final_payable(),
            sgst = %result.sgst.final_payable(),
            "settled balance"
        );
        Ok(result)
    }
}
