// Copyright (c) 2022 Kava Plugin Contributors

//! Raw messages bound to their events, and canonical results read back from JSON.

use crate::classifier::{self, MessageContext};
use crate::config::PluginConfig;
use crate::error::{PluginError, PluginResult};
use kava_models::{ActionKind, ActionResult, Event, ModelsError, SchemaVersion};
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, warn};

/// One raw message of a transaction, bound to the events it emitted.
///
/// Nothing is parsed at construction, `get_result` classifies on demand.
#[derive(Clone, Debug)]
pub struct Message<'a> {
    msg_type: String,
    version: SchemaVersion,
    msg_index: usize,
    body: Value,
    events: Vec<Event>,
    transaction_id: &'a str,
    config: &'a PluginConfig,
}

impl<'a> Message<'a> {
    /// Bind a raw message body to its type discriminator and events
    pub fn new(
        msg_type: String,
        version: SchemaVersion,
        msg_index: usize,
        body: Value,
        events: Vec<Event>,
        transaction_id: &'a str,
        config: &'a PluginConfig,
    ) -> Self {
        Message {
            msg_type,
            version,
            msg_index,
            body,
            events,
            transaction_id,
            config,
        }
    }

    /// type discriminator, like `/kava.cdp.v1beta1.MsgCreateCDP`
    pub fn get_msg_type(&self) -> &str {
        &self.msg_type
    }

    /// schema version of the enclosing transaction
    pub fn get_version(&self) -> SchemaVersion {
        self.version
    }

    /// position of the message in the transaction, the one its logs refer to
    pub fn get_msg_index(&self) -> usize {
        self.msg_index
    }

    /// message body without its type discriminator
    pub fn get_body(&self) -> &Value {
        &self.body
    }

    /// events emitted by the message
    pub fn get_events(&self) -> &[Event] {
        &self.events
    }

    /// Classify the message into its canonical action result
    ///
    /// Fails with `UnknownMessage` when no strategy is registered for the
    /// `(type, version)` pair of the message.
    pub fn get_result(&self) -> PluginResult<ActionResult> {
        let strategy = match classifier::lookup(&self.msg_type, self.version) {
            Some(strategy) => strategy,
            None => {
                warn!(
                    "unknown message {} ({}) in transaction {}",
                    self.msg_type, self.version, self.transaction_id
                );
                return Err(PluginError::UnknownMessage {
                    msg_type: self.msg_type.clone(),
                    version: self.version,
                    transaction_id: self.transaction_id.to_string(),
                });
            }
        };
        let ctx = MessageContext {
            msg_type: &self.msg_type,
            body: &self.body,
            events: &self.events,
            transaction_id: self.transaction_id,
            config: self.config,
        };
        let result = strategy(&ctx)?;
        debug!(
            "message {} of transaction {} classified as {}",
            self.msg_index,
            self.transaction_id,
            result.kind()
        );
        Ok(result)
    }
}

/// Read a canonical `{action, result}` JSON value back into an `ActionResult`
///
/// An action outside the closed set is reported as `UnknownAction`.
pub fn from_canonical(value: &Value, transaction_id: &str) -> PluginResult<ActionResult> {
    let action = value
        .get("action")
        .and_then(Value::as_str)
        .ok_or_else(|| ModelsError::MissingField("action".to_string()))?;
    if ActionKind::from_str(action).is_err() {
        return Err(PluginError::UnknownAction {
            action: action.to_string(),
            transaction_id: transaction_id.to_string(),
        });
    }
    serde_json::from_value(value.clone()).map_err(|err| ModelsError::from(err).into())
}
