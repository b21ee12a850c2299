// Copyright (c) 2022 Kava Plugin Contributors

//! Token symbol normalization.

use crate::constants::{NATIVE_DENOM, NATIVE_TICKER};

/// Map a symbol as found on chain to the symbol used as token table key.
///
/// The gas denomination is reported under its ticker, an empty symbol means no token,
/// everything else is kept as is.
///
/// ```
/// # use kava_models::token::get_token_original_id;
/// assert_eq!(get_token_original_id("ukava"), Some("kava"));
/// assert_eq!(get_token_original_id(""), None);
/// assert_eq!(get_token_original_id("busd:usdx"), Some("busd:usdx"));
/// ```
pub fn get_token_original_id(symbol: &str) -> Option<&str> {
    match symbol {
        NATIVE_DENOM => Some(NATIVE_TICKER),
        "" => None,
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_symbols_pass_through() {
        for symbol in [
            "kava", "hard", "usdx", "bnb", "swp", "xrpb", "UKAVA", "ukava2", " ",
        ] {
            assert_eq!(get_token_original_id(symbol), Some(symbol));
        }
    }
}
