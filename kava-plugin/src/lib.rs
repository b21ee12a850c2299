// Copyright (c) 2022 Kava Plugin Contributors

//! # General description
//!
//! Turns one kava transaction into the CAAJ journal of an address.
//!
//! ## Classification
//!
//! `MessageFactory` flattens the messages of a transaction, whatever the envelope of its
//! schema version, and binds each one to the events it emitted. Each `Message` is then
//! classified on demand into a canonical `ActionResult` by the strategy registered for its
//! `(type, version)` pair.
//!
//! ## Journal
//!
//! Every result is expanded into its postings, in order, followed by the fee posting.
//! All postings of one call share a trade uuid.
//!
//! ```
//! # use kava_models::{KavaTransaction, TokenOriginalIdTable};
//! # use kava_plugin::KavaPlugin;
//! let raw = serde_json::json!({
//!     "header": {"chain_id": "kava-9", "timestamp": "2022-01-11 06:22:52", "txhash": "AB12"},
//!     "data": {
//!         "code": 3,
//!         "tx": {"body": {"messages": []}, "auth_info": {"fee": {"amount": [{"denom": "ukava", "amount": "2500"}]}}}
//!     }
//! });
//! let transaction = KavaTransaction::new(raw).unwrap();
//! let plugin = KavaPlugin::default();
//! let caajs = plugin
//!     .get_caajs("kava1owner", &transaction, &TokenOriginalIdTable::new())
//!     .unwrap();
//! assert_eq!(caajs.len(), 1);
//! assert_eq!(caajs[0].amount, "0.0025");
//! ```

#![warn(missing_docs)]

mod classifier;
pub mod config;
pub mod error;
mod journal;
pub mod message;
pub mod message_factory;
mod plugin;

pub use config::PluginConfig;
pub use error::{PluginError, PluginResult};
pub use message::{from_canonical, Message};
pub use message_factory::MessageFactory;
pub use plugin::KavaPlugin;

#[cfg(test)]
mod tests;
