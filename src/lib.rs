//! GST input tax credit settlement.
//!
//! Tax transactions are folded into per head input credit and output payable
//! ([`aggregate`]), then output payable is offset against credit pools in
//! statutory precedence order ([`settle`]). Both steps are pure.

pub mod balance;
pub mod cli_io;
pub mod constants;
pub mod error;
pub mod gst_engine;
pub mod settlement;
pub mod transaction;


pub use balance::{GstBalance, HeadTotals};
pub use error::{GstError, InputTxnErr};
pub use gst_engine::{aggregate, settle, GstEngine, NegativeAmountPolicy};
pub use settlement::{HeadSettlement, SettlementResult};
pub use transaction::{TaxHead, Transaction, TxnType};
