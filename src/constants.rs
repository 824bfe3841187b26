/// Decimal places kept on every amount (paise)
pub const PRECISION: u32 = 2;

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "gstsettlement=info";
