// Copyright (c) 2022 Kava Plugin Contributors

//! CAAJ journal records, the accounting output of the plugin.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Kind of a journal posting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CaajType {
    /// tokens placed in a protocol, still owned
    Deposit,
    /// tokens taken back out of a protocol
    Withdraw,
    /// debt taken on
    Borrow,
    /// debt paid back
    Repay,
    /// tokens acquired
    Get,
    /// tokens given up
    Lose,
    /// pool shares acquired
    GetBonds,
    /// pool shares given up
    LoseBonds,
    /// transfer out
    Send,
    /// transfer in
    Receive,
}

/// One journal posting
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaajJournal {
    /// transaction timestamp
    pub executed_at: String,
    /// platform tag
    pub platform: String,
    /// application tag
    pub application: String,
    /// free-text action label
    pub service: String,
    /// transaction hash
    pub transaction_id: String,
    /// shared by every posting of the same transaction
    pub trade_uuid: Uuid,
    /// posting kind
    #[serde(rename = "type")]
    pub caaj_type: CaajType,
    /// amount as decimal text
    pub amount: String,
    /// unique token identifier
    pub uti: String,
    /// source actor
    pub from_address: String,
    /// destination actor
    pub to_address: String,
    /// free-text description
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caaj_type_names() {
        assert_eq!(CaajType::GetBonds.to_string(), "get_bonds");
        assert_eq!(
            serde_json::to_string(&CaajType::LoseBonds).unwrap(),
            "\"lose_bonds\""
        );
    }
}
