use rust_decimal::Decimal;
use std::fmt;

/// One of the three GST heads, each with its own credit and payable pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxHead {
    Igst,
    Cgst,
    Sgst,
}

impl TaxHead {
    pub const ALL: [TaxHead; 3] = [TaxHead::Igst, TaxHead::Cgst, TaxHead::Sgst];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxHead::Igst => "igst",
            TaxHead::Cgst => "cgst",
            TaxHead::Sgst => "sgst",
        }
    }

    pub fn parse(raw: &str) -> Option<TaxHead> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "igst" => Some(TaxHead::Igst),
            "cgst" => Some(TaxHead::Cgst),
            "sgst" => Some(TaxHead::Sgst),
            _ => None,
        }
    }
}

impl fmt::Display for TaxHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a transaction earns credit (purchase) or owes tax (sale)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnType {
    Input,
    Output,
}

/// A single taxable event. Heads absent from the source are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub txn_type: TxnType,
    pub igst: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
}

impl Transaction {
    pub fn input(igst: Decimal, cgst: Decimal, sgst: Decimal) -> Self {
        Self {
            txn_type: TxnType::Input,
            igst,
            cgst,
            sgst,
        }
    }

    pub fn output(igst: Decimal, cgst: Decimal, sgst: Decimal) -> Self {
        Self {
            txn_type: TxnType::Output,
            igst,
            cgst,
            sgst,
        }
    }

    pub fn amount(&self, head: TaxHead) -> Decimal {
        match head {
            TaxHead::Igst => self.igst,
            TaxHead::Cgst => self.cgst,
            TaxHead::Sgst => self.sgst,
        }
    }
}
