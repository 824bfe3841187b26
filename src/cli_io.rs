use crate::balance::GstBalance;
use crate::constants::PRECISION;
use crate::error::{GstError, InputTxnErr};
use crate::gst_engine::{GstEngine, NegativeAmountPolicy, PrecedenceTable};
use crate::settlement::SettlementResult;
use crate::transaction::{TaxHead, Transaction, TxnType};
use clap::Parser;
use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Write};
use tracing::info;

fn get_specified_precision(val: Decimal, decimal_precision: u32) -> Decimal {
    val.round_dp_with_strategy(decimal_precision, RoundingStrategy::MidpointAwayFromZero)
}

/// Options and data to export results
pub enum OutputMethod {
    /// Output to csv file
    Csv(String),
    /// Output to console
    StdOutput,
}

/// Settle GST input credit against output payable from a transactions CSV
#[derive(Parser, Debug)]
#[command(name = "gstsettlement", version)]
pub struct CliOptions {
    /// Transactions CSV with columns type,igst,cgst,sgst
    pub input_file: String,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<String>,

    /// Input file has no header row
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Skip malformed records instead of aborting
    #[arg(long)]
    pub lenient: bool,

    #[arg(long = "negative-amounts", value_enum, default_value_t = NegativeAmountPolicy::Accept)]
    pub negative_amounts: NegativeAmountPolicy,

    /// CSV of payable,credit rows replacing the statutory precedence table
    #[arg(long)]
    pub precedence: Option<String>,
}

impl CliOptions {
    pub fn output(&self) -> OutputMethod {
        match &self.output_file {
            Some(path) => OutputMethod::Csv(path.clone()),
            None => OutputMethod::StdOutput,
        }
    }

    pub fn build_engine(&self) -> Result<GstEngine, GstError> {
        let precedence = match &self.precedence {
            Some(path) => {
                info!(path = %path, "loading precedence table");
                PrecedenceTable::from_csv_reader(File::open(path)?, true)?
            }
            None => PrecedenceTable::statutory(),
        };
        Ok(GstEngine::new(precedence, self.negative_amounts))
    }
}

/// One line of the settlement report
#[derive(Debug, Serialize, PartialEq)]
pub struct ReportRow {
    pub head: String,
    pub input_credit: String,
    pub output_payable: String,
    pub settled_with_igst: String,
    pub settled_with_cgst: String,
    pub settled_with_sgst: String,
    pub final_payable: String,
    pub unused_credit: String,
}

fn fmt_amount(val: Decimal) -> String {
    format!("{:.*}", PRECISION as usize, val)
}

/// One row per head followed by a `total` row. Fails if a total overflows.
pub fn report_rows(
    balance: &GstBalance,
    settlement: &SettlementResult,
) -> Result<Vec<ReportRow>, GstError> {
    let mut rows: Vec<ReportRow> = TaxHead::ALL
        .iter()
        .map(|head| {
            let s = settlement.head(*head);
            ReportRow {
                head: head.to_string(),
                input_credit: fmt_amount(balance.input.get(*head)),
                output_payable: fmt_amount(s.payable),
                settled_with_igst: fmt_amount(s.settled_with_igst),
                settled_with_cgst: fmt_amount(s.settled_with_cgst),
                settled_with_sgst: fmt_amount(s.settled_with_sgst),
                final_payable: fmt_amount(s.final_payable()),
                unused_credit: fmt_amount(settlement.unused_credit.get(*head)),
            }
        })
        .collect();

    rows.push(ReportRow {
        head: "total".to_string(),
        input_credit: fmt_amount(balance.input.total("input")?),
        output_payable: fmt_amount(balance.output.total("output")?),
        settled_with_igst: fmt_amount(settlement.total_settled_with(TaxHead::Igst)?),
        settled_with_cgst: fmt_amount(settlement.total_settled_with(TaxHead::Cgst)?),
        settled_with_sgst: fmt_amount(settlement.total_settled_with(TaxHead::Sgst)?),
        final_payable: fmt_amount(settlement.total_final_payable()?),
        unused_credit: fmt_amount(settlement.unused_credit.total("unused_credit")?),
    });
    Ok(rows)
}

fn write_report<W: Write>(
    wtr: W,
    balance: &GstBalance,
    settlement: &SettlementResult,
) -> Result<(), GstError> {
    let rows = report_rows(balance, settlement)?;
    let mut wtr = Writer::from_writer(wtr);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Output the balance and its settlement
pub fn output_report(
    balance: &GstBalance,
    settlement: &SettlementResult,
    output: &OutputMethod,
) -> Result<(), GstError> {
    match output {
        OutputMethod::Csv(file_path) => {
            info!(path = %file_path, "writing report");
            write_report(File::create(file_path)?, balance, settlement)
        }
        OutputMethod::StdOutput => write_report(io::stdout().lock(), balance, settlement),
    }
}

/// A transaction row as it appears in the input CSV
#[derive(Debug, Deserialize)]
pub struct RawInputTxn {
    #[serde(rename = "type")]
    txn_type: String,
    #[serde(default)]
    igst: Option<String>,
    #[serde(default)]
    cgst: Option<String>,
    #[serde(default)]
    sgst: Option<String>,
}

fn parse_amount(head: TaxHead, raw: Option<&str>) -> Result<Decimal, InputTxnErr> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Decimal::ZERO),
        Some(val) => val
            .parse::<Decimal>()
            .map(|amt| get_specified_precision(amt, PRECISION))
            .map_err(|_| InputTxnErr::BadAmount {
                head,
                raw: val.to_string(),
            }),
    }
}

impl RawInputTxn {
    pub fn convert_to_txn(self) -> Result<Transaction, InputTxnErr> {
        let txn_type = match self.txn_type.trim().to_ascii_lowercase().as_str() {
            "input" | "purchase" => TxnType::Input,
            "output" | "sale" => TxnType::Output,
            _ => return Err(InputTxnErr::UnsupportedType(self.txn_type)),
        };
        Ok(Transaction {
            txn_type,
            igst: parse_amount(TaxHead::Igst, self.igst.as_deref())?,
            cgst: parse_amount(TaxHead::Cgst, self.cgst.as_deref())?,
            sgst: parse_amount(TaxHead::Sgst, self.sgst.as_deref())?,
        })
    }
}

pub fn txn_reader(in_file_path: &str, has_header: bool) -> Result<csv::Reader<File>, GstError> {
    Ok(ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .has_headers(has_header)
        .from_path(in_file_path)?)
}

/// Hands each row to `on_record` along with the file line the row starts on
pub fn read_raw_txns<F>(rdr: &mut csv::Reader<File>, mut on_record: F) -> Result<(), GstError>
where
    F: FnMut(u64, Result<RawInputTxn, csv::Error>) -> Result<(), GstError>,
{
    let headers = if rdr.has_headers() {
        Some(rdr.headers()?.clone())
    } else {
        None
    };
    let mut raw = StringRecord::new();
    while rdr.read_record(&mut raw)? {
        let line = raw.position().map_or(0, |pos| pos.line());
        on_record(line, raw.deserialize(headers.as_ref()))?;
    }
    Ok(())
}

/// Reads every transaction, failing on the first bad record
pub fn parse_txns_csv(in_file_path: &str, has_header: bool) -> Result<Vec<Transaction>, GstError> {
    let mut rdr = txn_reader(in_file_path, has_header)?;

    let mut txn_vec = vec![];
    read_raw_txns(&mut rdr, |line, result| {
        match result?.convert_to_txn() {
            Ok(txn) => txn_vec.push(txn),
            Err(source) => return Err(GstError::InvalidRecord { line, source }),
        }
        Ok(())
    })?;

    Ok(txn_vec)
}
