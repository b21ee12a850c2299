// Copyright (c) 2022 Kava Plugin Contributors

//! This module provides the structures used to provide configuration parameters to the plugin

use kava_models::constants::{APPLICATION, FEE_DECIMAL_EXPONENT, PLATFORM};
use rust_decimal::Decimal;

/// Plugin configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PluginConfig {
    /// platform tag of the journal entries and token table lookups
    pub platform: String,
    /// application tag of the journal entries
    pub application: String,
    /// the transaction fee is divided by `10^fee_decimal_exponent`
    pub fee_decimal_exponent: u32,
    /// swap pool fee rate, used when the chain did not report the fee of a trade
    pub swap_fee_rate: Decimal,
    /// decimal places kept on a derived swap fee
    pub swap_fee_decimal_places: u32,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            platform: PLATFORM.to_string(),
            application: APPLICATION.to_string(),
            fee_decimal_exponent: FEE_DECIMAL_EXPONENT,
            swap_fee_rate: Decimal::new(15, 4),
            swap_fee_decimal_places: 8,
        }
    }
}
