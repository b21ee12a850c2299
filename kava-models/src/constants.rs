// Copyright (c) 2022 Kava Plugin Contributors

//! Chain level constants.

/// platform tag written on every journal entry
pub const PLATFORM: &str = "kava";
/// application tag written on every journal entry
pub const APPLICATION: &str = "kava";
/// gas denomination as it appears on chain
pub const NATIVE_DENOM: &str = "ukava";
/// ticker the gas denomination is reported under
pub const NATIVE_TICKER: &str = "kava";
/// the fee is charged in `NATIVE_DENOM`, which is `10^FEE_DECIMAL_EXPONENT` times smaller than the ticker
pub const FEE_DECIMAL_EXPONENT: u32 = 6;
/// last chain version using the amino (`type`/`value`) transaction envelope
pub const LAST_LEGACY_VERSION: u8 = 7;
/// prefix of the chain ids this plugin accepts
pub const CHAIN_ID_PREFIX: &str = "kava";
