// Copyright (c) 2022 Kava Plugin Contributors

//! Message classification.
//!
//! A message is identified by its type discriminator and the schema version of its
//! transaction. The `STRATEGIES` table maps each type to the parsing strategies of
//! the versions it appeared in; supporting a new historical format is a table edit.

mod bank;
mod bep3;
mod cdp;
mod gov;
mod hard;
mod incentive;
mod staking;
mod swap;

use crate::config::PluginConfig;
use crate::error::{PluginError, PluginResult};
use kava_models::{ActionResult, Coin, Event, Reward, SchemaVersion};
use serde_json::Value;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use tracing::debug;

/// parsing strategy of one wire format
pub(crate) type Strategy = fn(&MessageContext<'_>) -> PluginResult<ActionResult>;

const AMINO: RangeInclusive<u8> = 2..=7;
const PROTOBUF: RangeInclusive<u8> = 8..=u8::MAX;

type StrategyTable = HashMap<&'static str, Vec<(RangeInclusive<u8>, Strategy)>>;

fn register(
    strategies: &mut StrategyTable,
    msg_type: &'static str,
    versions: RangeInclusive<u8>,
    strategy: Strategy,
) {
    strategies
        .entry(msg_type)
        .or_default()
        .push((versions, strategy));
}

lazy_static::lazy_static! {
    static ref STRATEGIES: StrategyTable = {
        let mut strategies = StrategyTable::new();
        // bank & gov
        register(&mut strategies, "cosmos-sdk/MsgSend", AMINO, bank::as_send);
        register(&mut strategies, "/cosmos.bank.v1beta1.MsgSend", PROTOBUF, bank::as_send);
        register(&mut strategies, "cosmos-sdk/MsgVote", AMINO, gov::as_vote);
        register(&mut strategies, "/cosmos.gov.v1beta1.MsgVote", PROTOBUF, gov::as_vote);
        // staking & distribution
        register(&mut strategies, "cosmos-sdk/MsgDelegate", AMINO, staking::as_delegate);
        register(&mut strategies, "/cosmos.staking.v1beta1.MsgDelegate", PROTOBUF, staking::as_delegate);
        register(&mut strategies, "cosmos-sdk/MsgBeginRedelegate", AMINO, staking::as_reward_only_delegate);
        register(&mut strategies, "/cosmos.staking.v1beta1.MsgBeginRedelegate", PROTOBUF, staking::as_reward_only_delegate);
        register(&mut strategies, "cosmos-sdk/MsgWithdrawDelegationReward", AMINO, staking::as_reward_only_delegate);
        register(&mut strategies, "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward", PROTOBUF, staking::as_reward_only_delegate);
        register(&mut strategies, "cosmos-sdk/MsgUndelegate", AMINO, staking::as_begin_unbonding);
        register(&mut strategies, "/cosmos.staking.v1beta1.MsgUndelegate", PROTOBUF, staking::as_begin_unbonding);
        // cdp
        register(&mut strategies, "cdp/MsgCreateCDP", AMINO, cdp::as_create_cdp);
        register(&mut strategies, "/kava.cdp.v1beta1.MsgCreateCDP", PROTOBUF, cdp::as_create_cdp);
        register(&mut strategies, "cdp/MsgDrawDebt", AMINO, cdp::as_draw_cdp);
        register(&mut strategies, "/kava.cdp.v1beta1.MsgDrawDebt", PROTOBUF, cdp::as_draw_cdp);
        register(&mut strategies, "cdp/MsgRepayDebt", AMINO, cdp::as_repay_cdp);
        register(&mut strategies, "/kava.cdp.v1beta1.MsgRepayDebt", PROTOBUF, cdp::as_repay_cdp);
        register(&mut strategies, "cdp/MsgDeposit", AMINO, cdp::as_deposit_cdp);
        register(&mut strategies, "/kava.cdp.v1beta1.MsgDeposit", PROTOBUF, cdp::as_deposit_cdp);
        register(&mut strategies, "cdp/MsgWithdraw", AMINO, cdp::as_withdraw_cdp);
        register(&mut strategies, "/kava.cdp.v1beta1.MsgWithdraw", PROTOBUF, cdp::as_withdraw_cdp);
        // incentive
        register(&mut strategies, "incentive/MsgClaimReward", 4..=6, incentive::as_claim_usdx_minting_reward);
        register(&mut strategies, "incentive/MsgClaimUSDXMintingReward", 7..=7, incentive::as_claim_usdx_minting_reward);
        register(&mut strategies, "/kava.incentive.v1beta1.MsgClaimUSDXMintingReward", PROTOBUF, incentive::as_claim_usdx_minting_reward);
        register(&mut strategies, "harvest/MsgClaimReward", 4..=4, incentive::as_claim_harvest_reward);
        register(&mut strategies, "incentive/MsgClaimHardReward", 5..=7, incentive::as_claim_hard_reward);
        register(&mut strategies, "/kava.incentive.v1beta1.MsgClaimHardReward", PROTOBUF, incentive::as_claim_hard_reward);
        register(&mut strategies, "/kava.incentive.v1beta1.MsgClaimSwapReward", PROTOBUF, incentive::as_claim_swap_reward);
        // hard lending, called harvest before version 5
        register(&mut strategies, "harvest/MsgDeposit", 4..=4, hard::as_harvest_deposit);
        register(&mut strategies, "harvest/MsgWithdraw", 4..=4, hard::as_harvest_withdraw);
        register(&mut strategies, "hard/MsgDeposit", 5..=7, hard::as_hard_deposit);
        register(&mut strategies, "/kava.hard.v1beta1.MsgDeposit", PROTOBUF, hard::as_hard_deposit);
        register(&mut strategies, "hard/MsgWithdraw", 5..=7, hard::as_hard_withdraw);
        register(&mut strategies, "/kava.hard.v1beta1.MsgWithdraw", PROTOBUF, hard::as_hard_withdraw);
        register(&mut strategies, "hard/MsgBorrow", 5..=7, hard::as_hard_borrow);
        register(&mut strategies, "/kava.hard.v1beta1.MsgBorrow", PROTOBUF, hard::as_hard_borrow);
        register(&mut strategies, "hard/MsgRepay", 5..=7, hard::as_hard_repay);
        register(&mut strategies, "/kava.hard.v1beta1.MsgRepay", PROTOBUF, hard::as_hard_repay);
        // swap
        register(&mut strategies, "/kava.swap.v1beta1.MsgSwapExactForTokens", PROTOBUF, swap::as_swap_exact_for_tokens);
        register(&mut strategies, "/kava.swap.v1beta1.MsgSwapForExactTokens", PROTOBUF, swap::as_swap_for_exact_tokens);
        register(&mut strategies, "/kava.swap.v1beta1.MsgDeposit", PROTOBUF, swap::as_swap_deposit);
        register(&mut strategies, "/kava.swap.v1beta1.MsgWithdraw", PROTOBUF, swap::as_swap_withdraw);
        // bep3
        register(&mut strategies, "bep3/MsgCreateAtomicSwap", AMINO, bep3::as_create_atomic_swap);
        register(&mut strategies, "/kava.bep3.v1beta1.MsgCreateAtomicSwap", PROTOBUF, bep3::as_create_atomic_swap);
        register(&mut strategies, "bep3/MsgClaimAtomicSwap", AMINO, bep3::as_claim_atomic_swap);
        register(&mut strategies, "/kava.bep3.v1beta1.MsgClaimAtomicSwap", PROTOBUF, bep3::as_claim_atomic_swap);
        register(&mut strategies, "bep3/MsgRefundAtomicSwap", AMINO, bep3::as_claim_atomic_swap);
        register(&mut strategies, "/kava.bep3.v1beta1.MsgRefundAtomicSwap", PROTOBUF, bep3::as_claim_atomic_swap);
        strategies
    };
}

/// Find the parsing strategy of a `(type, version)` pair
pub(crate) fn lookup(msg_type: &str, version: SchemaVersion) -> Option<Strategy> {
    STRATEGIES.get(msg_type).and_then(|strategies| {
        strategies
            .iter()
            .find(|(versions, _)| versions.contains(&version.number()))
            .map(|(_, strategy)| *strategy)
    })
}

/// Everything a strategy may read while parsing one message
pub(crate) struct MessageContext<'a> {
    pub msg_type: &'a str,
    pub body: &'a Value,
    pub events: &'a [Event],
    pub transaction_id: &'a str,
    pub config: &'a PluginConfig,
}

/// true if `event` names one of `validators`, or names none
fn emitted_for(event: &Event, validators: &[String]) -> bool {
    match event.values("validator").find_map(Value::as_str) {
        Some(validator) => validators.iter().any(|own| own == validator),
        None => true,
    }
}

impl<'a> MessageContext<'a> {
    pub fn malformed(&self, field: &str) -> PluginError {
        PluginError::MalformedMessage {
            msg_type: self.msg_type.to_string(),
            field: field.to_string(),
            transaction_id: self.transaction_id.to_string(),
        }
    }

    /// body field holding a string
    pub fn str_field(&self, name: &str) -> PluginResult<String> {
        self.body
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| self.malformed(name))
    }

    /// body field holding a coin, or a coin list of which the first coin is taken
    pub fn coin_field(&self, name: &str) -> PluginResult<Coin> {
        self.opt_coin_field(name)?
            .ok_or_else(|| self.malformed(name))
    }

    /// like `coin_field`, but a missing field is not an error
    pub fn opt_coin_field(&self, name: &str) -> PluginResult<Option<Coin>> {
        let value = match self.body.get(name) {
            Some(value) => value,
            None => return Ok(None),
        };
        if let Some(coins) = value.as_array().filter(|coins| coins.len() > 1) {
            debug!(
                "{} in transaction {}: {} coins in `{}`, only the first is accounted",
                self.msg_type,
                self.transaction_id,
                coins.len(),
                name
            );
        }
        Coin::from_value(value).map_err(|_| self.malformed(name))
    }

    fn events_of<'b>(&'b self, event_type: &'b str) -> impl Iterator<Item = &'b Event> + 'b
    where
        'a: 'b,
    {
        self.events
            .iter()
            .filter(move |event| event.event_type == event_type)
    }

    /// coins of the attribute `key` over `events`, in emission order
    fn coins_of<'b>(
        &self,
        events: impl Iterator<Item = &'b Event>,
        key: &str,
        field: &str,
    ) -> PluginResult<Vec<Coin>> {
        let mut coins = Vec::new();
        for value in events.flat_map(|event| event.values(key)) {
            let found = Coin::list_from_value(value)
                .map_err(|_| self.malformed(field))?;
            coins.extend(found);
        }
        Ok(coins)
    }

    /// first value of an event attribute, as text
    pub fn event_str(&self, event_type: &str, key: &str) -> Option<String> {
        self.events_of(event_type)
            .flat_map(|event| event.values(key))
            .find_map(|value| match value {
                Value::String(text) => Some(text.clone()),
                Value::Number(number) => Some(number.to_string()),
                _ => None,
            })
    }

    /// all coins of an event attribute across every event of that type, in emission order
    pub fn event_coins(&self, event_type: &str, key: &str) -> PluginResult<Vec<Coin>> {
        let field = format!("{}.{}", event_type, key);
        self.coins_of(self.events_of(event_type), key, &field)
    }

    /// first coin of an event attribute
    pub fn event_coin(&self, event_type: &str, key: &str) -> PluginResult<Option<Coin>> {
        Ok(self.event_coins(event_type, key)?.into_iter().next())
    }

    /// rewards paid out through an event attribute
    pub fn rewards(&self, event_type: &str, key: &str) -> PluginResult<Vec<Reward>> {
        let coins = self.event_coins(event_type, key)?;
        Ok(coins.into_iter().map(Reward::from).collect())
    }

    /// rewards of the events emitted for one of `validators`
    ///
    /// A batch shares its events between its messages, so each message only claims
    /// the events of its own validators. An event without a `validator` attribute
    /// cannot be attributed and is kept.
    pub fn validator_rewards(
        &self,
        event_type: &str,
        key: &str,
        validators: &[String],
    ) -> PluginResult<Vec<Reward>> {
        let field = format!("{}.{}", event_type, key);
        let events = self
            .events_of(event_type)
            .filter(|event| emitted_for(event, validators));
        let coins = self.coins_of(events, key, &field)?;
        Ok(coins.into_iter().map(Reward::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_respects_versions() {
        let v4 = SchemaVersion::new(4);
        let v7 = SchemaVersion::new(7);
        let v8 = SchemaVersion::new(8);
        assert!(lookup("harvest/MsgDeposit", v4).is_some());
        assert!(lookup("harvest/MsgDeposit", v7).is_none());
        assert!(lookup("cosmos-sdk/MsgDelegate", v7).is_some());
        assert!(lookup("cosmos-sdk/MsgDelegate", v8).is_none());
        assert!(lookup("/cosmos.staking.v1beta1.MsgDelegate", v8).is_some());
        assert!(lookup("/kava.swap.v1beta1.MsgDeposit", v7).is_none());
        assert!(lookup("kava/MsgLiquidate", v8).is_none());
    }
}
