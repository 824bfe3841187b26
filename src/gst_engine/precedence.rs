use crate::error::GstError;
use crate::transaction::TaxHead;
use csv::{ReaderBuilder, Trim};
use std::io;

/// Credit pools one payable head may draw from, in draw order
#[derive(Debug, Clone, PartialEq)]
pub struct PrecedenceRule {
    pub payable: TaxHead,
    pub credit_order: Vec<TaxHead>,
}

/// Ordered cross utilisation rules. Rule order decides which payable head
/// gets first claim on a shared pool.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecedenceTable {
    rules: Vec<PrecedenceRule>,
}

impl Default for PrecedenceTable {
    fn default() -> Self {
        Self::statutory()
    }
}

impl PrecedenceTable {
    /// IGST payable takes IGST, CGST then SGST credit. CGST and SGST payables
    /// take IGST credit then their own; CGST and SGST never settle each other.
    pub fn statutory() -> Self {
        Self {
            rules: vec![
                PrecedenceRule {
                    payable: TaxHead::Igst,
                    credit_order: vec![TaxHead::Igst, TaxHead::Cgst, TaxHead::Sgst],
                },
                PrecedenceRule {
                    payable: TaxHead::Cgst,
                    credit_order: vec![TaxHead::Igst, TaxHead::Cgst],
                },
                PrecedenceRule {
                    payable: TaxHead::Sgst,
                    credit_order: vec![TaxHead::Igst, TaxHead::Sgst],
                },
            ],
        }
    }

    pub fn new(rules: Vec<PrecedenceRule>) -> Result<Self, GstError> {
        for (ii, rule) in rules.iter().enumerate() {
            if rules[..ii].iter().any(|r| r.payable == rule.payable) {
                return Err(GstError::InvalidPrecedence(format!(
                    "{} payable has more than one rule",
                    rule.payable
                )));
            }
            for (jj, pool) in rule.credit_order.iter().enumerate() {
                if rule.credit_order[..jj].contains(pool) {
                    return Err(GstError::InvalidPrecedence(format!(
                        "{} credit listed twice for {} payable",
                        pool, rule.payable
                    )));
                }
            }
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[PrecedenceRule] {
        &self.rules
    }

    pub fn allows(&self, payable: TaxHead, pool: TaxHead) -> bool {
        self.rules
            .iter()
            .any(|r| r.payable == payable && r.credit_order.contains(&pool))
    }

    /// Reads `payable,credit` rows, one pool per row in draw order
    pub fn from_csv_reader<R: io::Read>(rdr: R, has_header: bool) -> Result<Self, GstError> {
        let mut rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .has_headers(has_header)
            .from_reader(rdr);

        let mut rules: Vec<PrecedenceRule> = vec![];
        for result in rdr.records() {
            let record = result?;
            let (payable, pool) = match (record.get(0), record.get(1)) {
                (Some(p), Some(c)) => (parse_head(p)?, parse_head(c)?),
                _ => {
                    return Err(GstError::InvalidPrecedence(
                        "each row needs a payable and a credit head".to_string(),
                    ))
                }
            };
            match rules.iter_mut().find(|r| r.payable == payable) {
                Some(rule) => rule.credit_order.push(pool),
                None => rules.push(PrecedenceRule {
                    payable,
                    credit_order: vec![pool],
                }),
            }
        }
        Self::new(rules)
    }
}

fn parse_head(raw: &str) -> Result<TaxHead, GstError> {
    TaxHead::parse(raw)
        .ok_or_else(|| GstError::InvalidPrecedence(format!("unknown tax head `{}`", raw)))
}
