// Copyright (c) 2022 Kava Plugin Contributors

//! Read-only view over a raw kava transaction record.

use crate::coin::{Coin, Event};
use crate::constants::NATIVE_DENOM;
use crate::{Amount, ModelsError, ModelsResult, SchemaVersion};
use serde_json::Value;
use std::str::FromStr;

/// A transaction as delivered by the indexer, with its header already validated
#[derive(Clone, Debug)]
pub struct KavaTransaction {
    raw: Value,
    chain_id: String,
    version: SchemaVersion,
    transaction_id: String,
    timestamp: String,
}

fn pointer_str<'a>(raw: &'a Value, pointer: &str) -> ModelsResult<&'a str> {
    raw.pointer(pointer)
        .and_then(Value::as_str)
        .ok_or_else(|| ModelsError::MissingField(pointer.to_string()))
}

impl KavaTransaction {
    /// Wrap a raw transaction record
    pub fn new(raw: Value) -> ModelsResult<Self> {
        let chain_id = pointer_str(&raw, "/header/chain_id")?.to_string();
        let version = SchemaVersion::from_str(&chain_id)?;
        let transaction_id = pointer_str(&raw, "/header/txhash")?.to_string();
        let timestamp = pointer_str(&raw, "/header/timestamp")?.to_string();
        Ok(KavaTransaction {
            raw,
            chain_id,
            version,
            transaction_id,
            timestamp,
        })
    }

    /// chain id from the header, like `kava-9`
    pub fn get_chain_id(&self) -> &str {
        &self.chain_id
    }

    /// schema version derived from the chain id
    pub fn get_version(&self) -> SchemaVersion {
        self.version
    }

    /// transaction hash
    pub fn get_transaction_id(&self) -> &str {
        &self.transaction_id
    }

    /// block time of the transaction, as given by the indexer
    pub fn get_timestamp(&self) -> &str {
        &self.timestamp
    }

    /// true if the transaction was included but failed on chain
    pub fn get_fail(&self) -> bool {
        match self.raw.pointer("/data/code") {
            Some(Value::Number(code)) => code.as_u64() != Some(0),
            Some(Value::String(code)) => !code.is_empty() && code != "0",
            _ => false,
        }
    }

    fn envelope(&self) -> Option<&Value> {
        let tx = self.raw.pointer("/data/tx")?;
        if self.version.is_legacy() {
            tx.get("value")
        } else {
            Some(tx)
        }
    }

    /// Fee paid in the smallest unit of the gas denomination
    pub fn get_transaction_fee(&self) -> ModelsResult<Amount> {
        let fee_pointer = if self.version.is_legacy() {
            "/fee/amount"
        } else {
            "/auth_info/fee/amount"
        };
        let coins = match self.envelope().and_then(|tx| tx.pointer(fee_pointer)) {
            Some(value) => Coin::list_from_value(value)?,
            None => return Ok(Amount::zero()),
        };
        coins
            .iter()
            .filter(|coin| coin.denom == NATIVE_DENOM)
            .try_fold(Amount::zero(), |total, coin| {
                total
                    .checked_add(coin.amount)
                    .ok_or_else(|| ModelsError::AmountParseError("fee overflow".to_string()))
            })
    }

    /// Raw messages of the transaction, from the version specific container
    ///
    /// amino versions keep them under `tx.value.msg`, protobuf versions under `tx.body.messages`
    pub fn get_raw_messages(&self) -> ModelsResult<&[Value]> {
        let pointer = if self.version.is_legacy() {
            "/msg"
        } else {
            "/body/messages"
        };
        match self.envelope().and_then(|tx| tx.pointer(pointer)) {
            Some(Value::Array(messages)) => Ok(messages.as_slice()),
            Some(_) => Err(ModelsError::InvalidField(format!("/data/tx{}", pointer))),
            None => Err(ModelsError::MissingField(format!("/data/tx{}", pointer))),
        }
    }

    /// Events emitted by the message at `msg_index`
    ///
    /// Logs are matched on their `msg_index` field, falling back to their position.
    pub fn get_events(&self, msg_index: usize) -> ModelsResult<Vec<Event>> {
        let logs = match self.raw.pointer("/data/logs").and_then(Value::as_array) {
            Some(logs) => logs,
            None => return Ok(Vec::new()),
        };
        let log = logs
            .iter()
            .find(|log| log.get("msg_index").and_then(Value::as_u64) == Some(msg_index as u64))
            .or_else(|| {
                logs.get(msg_index)
                    .filter(|log| log.get("msg_index").is_none())
            });
        match log.and_then(|log| log.get("events")) {
            Some(events) => Ok(serde_json::from_value(events.clone())?),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn legacy_send() -> Value {
        json!({
            "header": {"chain_id": "kava-2", "timestamp": "2020-06-01 10:00:00", "txhash": "AA01"},
            "data": {
                "tx": {"type": "cosmos-sdk/StdTx", "value": {
                    "msg": [{"type": "cosmos-sdk/MsgSend", "value": {}}],
                    "fee": {"amount": [{"denom": "ukava", "amount": "5000"}], "gas": "200000"}
                }},
                "logs": [{"msg_index": 0, "events": [{"type": "message", "attributes": [{"key": "action", "value": "send"}]}]}]
            }
        })
    }

    #[test]
    fn test_legacy_envelope() {
        let tx = KavaTransaction::new(legacy_send()).unwrap();
        assert_eq!(tx.get_transaction_id(), "AA01");
        assert_eq!(tx.get_timestamp(), "2020-06-01 10:00:00");
        assert_eq!(tx.get_version(), SchemaVersion::new(2));
        assert!(!tx.get_fail());
        assert_eq!(tx.get_transaction_fee().unwrap().to_string(), "5000");
        assert_eq!(tx.get_raw_messages().unwrap().len(), 1);
        assert_eq!(tx.get_events(0).unwrap()[0].event_type, "message");
        assert!(tx.get_events(1).unwrap().is_empty());
    }

    #[test]
    fn test_protobuf_envelope() {
        let raw = json!({
            "header": {"chain_id": "kava-9", "timestamp": "2022-02-01 10:00:00", "txhash": "BB02"},
            "data": {
                "code": 5,
                "tx": {"@type": "/cosmos.tx.v1beta1.Tx",
                    "body": {"messages": [{"@type": "/cosmos.gov.v1beta1.MsgVote"}]},
                    "auth_info": {"fee": {"amount": [
                        {"denom": "ukava", "amount": "1000"},
                        {"denom": "hard", "amount": "7"},
                        {"denom": "ukava", "amount": "1500"}
                    ]}}
                }
            }
        });
        let tx = KavaTransaction::new(raw).unwrap();
        assert!(tx.get_fail());
        assert_eq!(tx.get_transaction_fee().unwrap().to_string(), "2500");
        assert_eq!(tx.get_raw_messages().unwrap().len(), 1);
        assert!(tx.get_events(0).unwrap().is_empty());
    }

    #[test]
    fn test_missing_header() {
        assert_matches!(
            KavaTransaction::new(json!({"data": {}})),
            Err(ModelsError::MissingField(..))
        );
    }
}
