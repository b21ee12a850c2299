// Copyright (c) 2022 Kava Plugin Contributors

//! this file defines all possible plugin error categories

use displaydoc::Display;
use kava_models::{ModelsError, SchemaVersion};
use thiserror::Error;

/// plugin result
pub type PluginResult<T, E = PluginError> = core::result::Result<T, E>;

/// Errors of the plugin. All of them abort the processing of the whole transaction.
#[non_exhaustive]
#[derive(Display, Error, Debug)]
pub enum PluginError {
    /// This type of message is not defined: {msg_type} ({version}). transaction_id: {transaction_id}
    UnknownMessage {
        /// message type discriminator
        msg_type: String,
        /// schema version of the transaction
        version: SchemaVersion,
        /// offending transaction
        transaction_id: String,
    },
    /// This type of action is not defined: {action}. transaction_id: {transaction_id}
    UnknownAction {
        /// action name
        action: String,
        /// offending transaction
        transaction_id: String,
    },
    /// Malformed {msg_type} message, bad or missing field `{field}`. transaction_id: {transaction_id}
    MalformedMessage {
        /// message type discriminator
        msg_type: String,
        /// field path
        field: String,
        /// offending transaction
        transaction_id: String,
    },
    /// models error: {0}
    ModelsError(#[from] ModelsError),
}
