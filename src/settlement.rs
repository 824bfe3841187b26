use crate::balance::HeadTotals;
use crate::constants::PRECISION;
use crate::error::GstError;
use crate::transaction::TaxHead;
use rust_decimal::Decimal;

/// How one head's payable was offset, broken down by the credit pool that paid it
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeadSettlement {
    /// Output tax for the head, copied from the balance
    pub payable: Decimal,
    pub settled_with_igst: Decimal,
    pub settled_with_cgst: Decimal,
    pub settled_with_sgst: Decimal,
}

impl HeadSettlement {
    pub fn new(payable: Decimal) -> Self {
        Self {
            payable,
            ..Self::default()
        }
    }

    pub fn settled_with(&self, pool: TaxHead) -> Decimal {
        match pool {
            TaxHead::Igst => self.settled_with_igst,
            TaxHead::Cgst => self.settled_with_cgst,
            TaxHead::Sgst => self.settled_with_sgst,
        }
    }

    pub(crate) fn record_draw(
        &mut self,
        head: TaxHead,
        pool: TaxHead,
        draw: Decimal,
    ) -> Result<(), GstError> {
        let slot = match pool {
            TaxHead::Igst => &mut self.settled_with_igst,
            TaxHead::Cgst => &mut self.settled_with_cgst,
            TaxHead::Sgst => &mut self.settled_with_sgst,
        };
        *slot = slot.checked_add(draw).ok_or(GstError::ArithmeticOverflow {
            head,
            bucket: "settled",
        })?;
        Ok(())
    }

    /// Draws never exceed the payable, so this cannot overflow
    pub fn total_settled(&self) -> Decimal {
        self.settled_with_igst + self.settled_with_cgst + self.settled_with_sgst
    }

    /// Amount left to remit after every permitted draw. Never below zero.
    pub fn final_payable(&self) -> Decimal {
        (self.payable - self.total_settled()).max(Decimal::ZERO)
    }

    pub fn get_display_str(&self) -> String {
        format!(
            "{:.*},{:.*},{:.*},{:.*},{:.*}",
            PRECISION as usize,
            self.payable,
            PRECISION as usize,
            self.settled_with_igst,
            PRECISION as usize,
            self.settled_with_cgst,
            PRECISION as usize,
            self.settled_with_sgst,
            PRECISION as usize,
            self.final_payable(),
        )
    }
}

/// Outcome of cross utilising input credit against output payable
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettlementResult {
    pub igst: HeadSettlement,
    pub cgst: HeadSettlement,
    pub sgst: HeadSettlement,
    /// Credit left in each pool once every payable head has drawn
    pub unused_credit: HeadTotals,
}

impl SettlementResult {
    pub fn head(&self, head: TaxHead) -> &HeadSettlement {
        match head {
            TaxHead::Igst => &self.igst,
            TaxHead::Cgst => &self.cgst,
            TaxHead::Sgst => &self.sgst,
        }
    }

    pub(crate) fn head_mut(&mut self, head: TaxHead) -> &mut HeadSettlement {
        match head {
            TaxHead::Igst => &mut self.igst,
            TaxHead::Cgst => &mut self.cgst,
            TaxHead::Sgst => &mut self.sgst,
        }
    }

    pub fn total_final_payable(&self) -> Result<Decimal, GstError> {
        TaxHead::ALL.iter().try_fold(Decimal::ZERO, |acc, h| {
            acc.checked_add(self.head(*h).final_payable())
                .ok_or(GstError::TotalOverflow {
                    bucket: "final_payable",
                })
        })
    }

    /// Sum drawn from one credit pool across every payable head
    pub fn total_settled_with(&self, pool: TaxHead) -> Result<Decimal, GstError> {
        TaxHead::ALL.iter().try_fold(Decimal::ZERO, |acc, h| {
            acc.checked_add(self.head(*h).settled_with(pool))
                .ok_or(GstError::ArithmeticOverflow {
                    head: pool,
                    bucket: "settled",
                })
        })
    }
}
