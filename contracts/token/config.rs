//! Static token metadata, fixed at build time.

pub const NAME: &str = "Moo Token";

pub const SYMBOL: &str = "MOO";

pub const DECIMALS: u32 = 8;

/// Hard cap on `total_supply`. Every balance is bounded by it as well.
pub const MAX_SUPPLY: u64 = u64::MAX;
