use crate::constants::PRECISION;
use crate::error::GstError;
use crate::transaction::TaxHead;
use rust_decimal::Decimal;

/// Per head amounts for one side of the ledger
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeadTotals {
    pub igst: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
}

impl HeadTotals {
    pub fn new(igst: Decimal, cgst: Decimal, sgst: Decimal) -> Self {
        Self { igst, cgst, sgst }
    }

    pub fn get(&self, head: TaxHead) -> Decimal {
        match head {
            TaxHead::Igst => self.igst,
            TaxHead::Cgst => self.cgst,
            TaxHead::Sgst => self.sgst,
        }
    }

    fn get_mut(&mut self, head: TaxHead) -> &mut Decimal {
        match head {
            TaxHead::Igst => &mut self.igst,
            TaxHead::Cgst => &mut self.cgst,
            TaxHead::Sgst => &mut self.sgst,
        }
    }

    /// Sum of the three heads, derived on every call; `bucket` only labels the overflow error
    pub fn total(&self, bucket: &'static str) -> Result<Decimal, GstError> {
        self.igst
            .checked_add(self.cgst)
            .and_then(|s| s.checked_add(self.sgst))
            .ok_or(GstError::TotalOverflow { bucket })
    }

    /// Checked add into a single head; `bucket` only labels the overflow error
    pub fn add(
        &mut self,
        head: TaxHead,
        amount: Decimal,
        bucket: &'static str,
    ) -> Result<(), GstError> {
        let slot = self.get_mut(head);
        *slot = slot
            .checked_add(amount)
            .ok_or(GstError::ArithmeticOverflow { head, bucket })?;
        Ok(())
    }

    pub fn set(&mut self, head: TaxHead, amount: Decimal) {
        *self.get_mut(head) = amount;
    }
}

/// Aggregated input credit and output payable, rebuilt from scratch on every run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GstBalance {
    pub input: HeadTotals,
    pub output: HeadTotals,
}

impl GstBalance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails only if a bucket total overflows
    pub fn get_display_str(&self) -> Result<String, GstError> {
        Ok(format!(
            "input[{:.*},{:.*},{:.*},{:.*}] output[{:.*},{:.*},{:.*},{:.*}]",
            PRECISION as usize,
            self.input.igst,
            PRECISION as usize,
            self.input.cgst,
            PRECISION as usize,
            self.input.sgst,
            PRECISION as usize,
            self.input.total("input")?,
            PRECISION as usize,
            self.output.igst,
            PRECISION as usize,
            self.output.cgst,
            PRECISION as usize,
            self.output.sgst,
            PRECISION as usize,
            self.output.total("output")?,
        ))
    }
}
