// Copyright (c) 2022 Kava Plugin Contributors

//! Resolution of platform symbols into unique token identifiers (UTI).

use crate::ModelsResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maps a `(platform, token original id)` pair to a unique token identifier.
///
/// Implementations must answer for every symbol; what to return for an unknown one is their call.
pub trait TokenTable {
    /// unique token identifier of `token_original_id` on `platform`
    fn get_uti(&self, platform: &str, token_original_id: Option<&str>) -> String;
}

/// one row of a token table file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTableEntry {
    /// platform tag
    pub platform: String,
    /// normalized symbol on that platform
    pub token_original_id: String,
    /// unique token identifier
    pub uti: String,
}

/// In-memory token table
///
/// Unknown symbols resolve to `<symbol>/<platform>`, a missing symbol to `unknown/<platform>`.
#[derive(Clone, Debug, Default)]
pub struct TokenOriginalIdTable {
    utis: HashMap<(String, String), String>,
}

impl TokenOriginalIdTable {
    /// Empty table, every lookup takes the fallback path
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from its rows
    pub fn from_entries(entries: impl IntoIterator<Item = TokenTableEntry>) -> Self {
        let utis = entries
            .into_iter()
            .map(|entry| ((entry.platform, entry.token_original_id), entry.uti))
            .collect();
        TokenOriginalIdTable { utis }
    }

    /// Build a table from a JSON list of rows
    pub fn from_json_str(json: &str) -> ModelsResult<Self> {
        let entries: Vec<TokenTableEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// number of rows
    pub fn len(&self) -> usize {
        self.utis.len()
    }

    /// true if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.utis.is_empty()
    }
}

impl TokenTable for TokenOriginalIdTable {
    fn get_uti(&self, platform: &str, token_original_id: Option<&str>) -> String {
        match token_original_id {
            Some(symbol) => self
                .utis
                .get(&(platform.to_string(), symbol.to_string()))
                .cloned()
                .unwrap_or_else(|| format!("{}/{}", symbol, platform)),
            None => format!("unknown/{}", platform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_fallback() {
        let table = TokenOriginalIdTable::from_json_str(
            r#"[
                {"platform": "kava", "token_original_id": "kava", "uti": "kava"},
                {"platform": "kava", "token_original_id": "bnb", "uti": "bnb"}
            ]"#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get_uti("kava", Some("kava")), "kava");
        assert_eq!(table.get_uti("kava", Some("bnb")), "bnb");
        assert_eq!(table.get_uti("kava", Some("swp")), "swp/kava");
        assert_eq!(table.get_uti("cosmos", Some("kava")), "kava/cosmos");
        assert_eq!(table.get_uti("kava", None), "unknown/kava");
    }
}
