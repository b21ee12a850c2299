// Copyright (c) 2022 Kava Plugin Contributors

//! Flattening of the version specific message container of a transaction.

use crate::config::PluginConfig;
use crate::error::PluginResult;
use crate::message::Message;
use kava_models::{Event, KavaTransaction, ModelsError, SchemaVersion};
use serde_json::{Map, Value};
use tracing::debug;

/// batch wrapper executing its inner messages on behalf of a granter
const MSG_EXEC: &str = "/cosmos.authz.v1beta1.MsgExec";

/// Builds the ordered message list of a transaction
pub struct MessageFactory;

impl MessageFactory {
    /// Messages of `transaction` in execution order, batches flattened.
    ///
    /// A failed transaction has no messages to account for.
    pub fn get_messages<'a>(
        transaction: &'a KavaTransaction,
        config: &'a PluginConfig,
    ) -> PluginResult<Vec<Message<'a>>> {
        let transaction_id = transaction.get_transaction_id();
        if transaction.get_fail() {
            debug!("transaction {} failed, no messages", transaction_id);
            return Ok(Vec::new());
        }
        let version = transaction.get_version();
        let mut messages = Vec::new();
        for (msg_index, raw) in transaction.get_raw_messages()?.iter().enumerate() {
            let events = transaction.get_events(msg_index)?;
            let mut unwrapper = Unwrapper {
                version,
                msg_index,
                events: &events,
                transaction_id,
                config,
                messages: &mut messages,
            };
            unwrapper.flatten(raw)?;
        }
        debug!(
            "transaction {} ({}) holds {} messages",
            transaction_id,
            version,
            messages.len()
        );
        Ok(messages)
    }
}

struct Unwrapper<'a, 'b> {
    version: SchemaVersion,
    msg_index: usize,
    events: &'b [Event],
    transaction_id: &'a str,
    config: &'a PluginConfig,
    messages: &'b mut Vec<Message<'a>>,
}

impl<'a, 'b> Unwrapper<'a, 'b> {
    fn flatten(&mut self, raw: &Value) -> PluginResult<()> {
        let (msg_type, body) = split_envelope(raw).ok_or_else(|| {
            ModelsError::MissingField(format!(
                "type of message {} in transaction {}",
                self.msg_index, self.transaction_id
            ))
        })?;
        if msg_type == MSG_EXEC {
            let inner = body
                .get("msgs")
                .and_then(Value::as_array)
                .ok_or_else(|| ModelsError::MissingField(format!("{}.msgs", MSG_EXEC)))?;
            for raw in inner {
                self.flatten(raw)?;
            }
            return Ok(());
        }
        self.messages.push(Message::new(
            msg_type,
            self.version,
            self.msg_index,
            body,
            self.events.to_vec(),
            self.transaction_id,
            self.config,
        ));
        Ok(())
    }
}

/// Split a raw message into its type discriminator and body
///
/// amino messages are `{"type": T, "value": body}`, protobuf ones are `{"@type": T, ..body}`
fn split_envelope(raw: &Value) -> Option<(String, Value)> {
    let object = raw.as_object()?;
    if let Some(msg_type) = object.get("@type").and_then(Value::as_str) {
        let body: Map<String, Value> = object
            .iter()
            .filter(|(key, _)| key.as_str() != "@type")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        return Some((msg_type.to_string(), Value::Object(body)));
    }
    let msg_type = object.get("type").and_then(Value::as_str)?;
    let body = object.get("value").cloned().unwrap_or(Value::Null);
    Some((msg_type.to_string(), body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_envelope_shapes() {
        let (msg_type, body) = split_envelope(&json!({
            "type": "cdp/MsgDrawDebt",
            "value": {"sender": "kava1x", "principal": {"denom": "usdx", "amount": "10"}}
        }))
        .unwrap();
        assert_eq!(msg_type, "cdp/MsgDrawDebt");
        assert_eq!(body["sender"], "kava1x");

        let (msg_type, body) = split_envelope(&json!({
            "@type": "/cosmos.gov.v1beta1.MsgVote",
            "voter": "kava1x",
            "option": "VOTE_OPTION_YES"
        }))
        .unwrap();
        assert_eq!(msg_type, "/cosmos.gov.v1beta1.MsgVote");
        assert!(body.get("@type").is_none());
        assert_eq!(body["voter"], "kava1x");

        assert!(split_envelope(&json!({"value": {}})).is_none());
        assert!(split_envelope(&json!("cdp/MsgDrawDebt")).is_none());
    }
}
