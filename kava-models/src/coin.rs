// Copyright (c) 2022 Kava Plugin Contributors

use crate::{Amount, ModelsError, ModelsResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An amount of a given denomination, as carried by message bodies and event attributes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// on-chain denomination
    pub denom: String,
    /// amount in token unit
    pub amount: Amount,
}

impl Coin {
    /// Read a coin from a JSON object, or the first coin of a JSON list
    pub fn from_value(value: &Value) -> ModelsResult<Option<Coin>> {
        match value {
            Value::Array(_) => Ok(Coin::list_from_value(value)?.into_iter().next()),
            Value::Null => Ok(None),
            other => Ok(Some(serde_json::from_value(other.clone())?)),
        }
    }

    /// Read a list of coins, accepting a single coin object as a one-element list
    pub fn list_from_value(value: &Value) -> ModelsResult<Vec<Coin>> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| serde_json::from_value(item.clone()).map_err(ModelsError::from))
                .collect(),
            Value::Null => Ok(Vec::new()),
            other => Ok(vec![serde_json::from_value(other.clone())?]),
        }
    }
}

/// One key/value attribute of an event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventAttribute {
    /// attribute key
    pub key: String,
    /// attribute value, either plain text or coins
    #[serde(default)]
    pub value: Value,
}

/// An event emitted while a message was executed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// event type, like `withdraw_rewards`
    #[serde(rename = "type")]
    pub event_type: String,
    /// attributes in emission order
    #[serde(default)]
    pub attributes: Vec<EventAttribute>,
}

impl Event {
    /// All values of the attribute `key`, in order
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.attributes
            .iter()
            .filter(move |attribute| attribute.key == key)
            .map(|attribute| &attribute.value)
    }
}
