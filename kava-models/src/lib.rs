// Copyright (c) 2022 Kava Plugin Contributors

//! # Overview
//!
//! Value types shared by the kava plugin crates.
//!
//! ## amount.rs
//! Exact decimal amounts.
//!
//! ## transaction.rs
//! Read-only view over a raw transaction record: header fields, fee, failure flag,
//! version specific message container and per message events.
//!
//! ## action.rs
//! Canonical action results, one per message.
//!
//! ## caaj.rs
//! Journal postings produced from the action results.
//!
//! ## token.rs / token_table.rs
//! Symbol normalization and unique token identifier resolution.

pub mod action;
pub mod amount;
pub mod caaj;
pub mod coin;
pub mod constants;
pub mod error;
pub mod token;
pub mod token_table;
pub mod transaction;
mod version;

pub use action::{ActionKind, ActionResult, Reward, SwapInput, SwapOutput, Transfer};
pub use amount::Amount;
pub use caaj::{CaajJournal, CaajType};
pub use coin::{Coin, Event, EventAttribute};
pub use error::{ModelsError, ModelsResult};
pub use token_table::{TokenOriginalIdTable, TokenTable, TokenTableEntry};
pub use transaction::KavaTransaction;
pub use version::SchemaVersion;
