// Copyright (c) 2022 Kava Plugin Contributors

//! Fixture builders for raw transactions

use kava_models::{KavaTransaction, SchemaVersion, TokenOriginalIdTable};
use serde_json::{json, Value};
use std::str::FromStr;

pub const OWNER: &str = "kava1owner0000000000000000000000000000000";
pub const OTHER: &str = "kava1other0000000000000000000000000000000";
pub const STRANGER: &str = "kava1stranger00000000000000000000000000000";

pub fn coin(denom: &str, amount: &str) -> Value {
    json!({"denom": denom, "amount": amount})
}

pub fn event(event_type: &str, attributes: &[(&str, Value)]) -> Value {
    let attributes: Vec<Value> = attributes
        .iter()
        .map(|(key, value)| json!({"key": key, "value": value}))
        .collect();
    json!({"type": event_type, "attributes": attributes})
}

/// `withdraw_rewards` event paying `amount` ukava from `validator`
pub fn withdraw_rewards(amount: &str, validator: &str) -> Value {
    event(
        "withdraw_rewards",
        &[
            ("amount", json!([coin("ukava", amount)])),
            ("validator", json!(validator)),
        ],
    )
}

/// A message in the envelope of `chain_id`: amino `{type, value}` up to version 7, `@type` after
pub fn message(chain_id: &str, msg_type: &str, body: Value) -> Value {
    let version = SchemaVersion::from_str(chain_id).unwrap();
    if version.is_legacy() {
        return json!({"type": msg_type, "value": body});
    }
    let mut message = body;
    message
        .as_object_mut()
        .unwrap()
        .insert("@type".to_string(), json!(msg_type));
    message
}

/// Raw transaction with one log per message, the fee given in ukava smallest unit
pub fn raw_transaction(
    chain_id: &str,
    code: u64,
    messages: Vec<Value>,
    events: Vec<Vec<Value>>,
    fee: &str,
) -> Value {
    let version = SchemaVersion::from_str(chain_id).unwrap();
    let fee_amount = if fee.is_empty() {
        json!([])
    } else {
        json!([coin("ukava", fee)])
    };
    let tx = if version.is_legacy() {
        json!({
            "type": "cosmos-sdk/StdTx",
            "value": {"msg": messages, "fee": {"amount": fee_amount, "gas": "250000"}, "memo": ""}
        })
    } else {
        json!({
            "@type": "/cosmos.tx.v1beta1.Tx",
            "body": {"messages": messages, "memo": ""},
            "auth_info": {"fee": {"amount": fee_amount, "gas_limit": "250000"}}
        })
    };
    let logs: Vec<Value> = events
        .into_iter()
        .enumerate()
        .map(|(msg_index, events)| json!({"msg_index": msg_index, "log": "", "events": events}))
        .collect();
    json!({
        "header": {
            "chain_id": chain_id,
            "timestamp": "2022-01-11 06:22:52",
            "txhash": "5C9B3E41E1A0B7E4D1CD2A6A1F8E56D7F2C3B4A5968778695A4B3C2D1E0F1A2B"
        },
        "data": {"code": code, "tx": tx, "logs": logs}
    })
}

/// Successful transaction holding a single message
pub fn single_message(
    chain_id: &str,
    msg_type: &str,
    body: Value,
    events: Vec<Value>,
) -> KavaTransaction {
    let raw = raw_transaction(
        chain_id,
        0,
        vec![message(chain_id, msg_type, body)],
        vec![events],
        "",
    );
    KavaTransaction::new(raw).unwrap()
}

pub fn token_table() -> TokenOriginalIdTable {
    TokenOriginalIdTable::from_json_str(
        r#"[
            {"platform": "kava", "token_original_id": "kava", "uti": "kava"},
            {"platform": "kava", "token_original_id": "hard", "uti": "hard"},
            {"platform": "kava", "token_original_id": "usdx", "uti": "usdx"},
            {"platform": "kava", "token_original_id": "bnb", "uti": "bnb"},
            {"platform": "kava", "token_original_id": "busd", "uti": "busd"},
            {"platform": "kava", "token_original_id": "swp", "uti": "swp"}
        ]"#,
    )
    .unwrap()
}
