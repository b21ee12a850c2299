// Copyright (c) 2022 Kava Plugin Contributors

//! Staking and distribution messages.
//!
//! Any staking operation first withdraws the pending rewards of the validators involved,
//! which shows up as `withdraw_rewards` events.

use super::MessageContext;
use crate::error::PluginResult;
use kava_models::{ActionResult, Reward};

const WITHDRAW_REWARDS_EVENT: &str = "withdraw_rewards";
const AMOUNT_KEY: &str = "amount";
const VALIDATOR_KEYS: [&str; 3] = [
    "validator_address",
    "validator_src_address",
    "validator_dst_address",
];

/// rewards withdrawn from the validators the message names
fn rewards(ctx: &MessageContext<'_>) -> PluginResult<Vec<Reward>> {
    let validators: Vec<String> = VALIDATOR_KEYS
        .iter()
        .filter_map(|key| ctx.str_field(key).ok())
        .collect();
    ctx.validator_rewards(WITHDRAW_REWARDS_EVENT, AMOUNT_KEY, &validators)
}

pub(crate) fn as_delegate(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    let stake = ctx.coin_field("amount")?;
    Ok(ActionResult::Delegate {
        staking_token: Some(stake.denom),
        staking_amount: Some(stake.amount),
        rewards: rewards(ctx)?,
    })
}

/// redelegation and reward withdrawal: no new stake, only rewards
pub(crate) fn as_reward_only_delegate(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    Ok(ActionResult::Delegate {
        staking_token: None,
        staking_amount: None,
        rewards: rewards(ctx)?,
    })
}

pub(crate) fn as_begin_unbonding(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    let unbonded = ctx.coin_field("amount")?;
    Ok(ActionResult::BeginUnbonding {
        unbonding_token: Some(unbonded.denom),
        unbonding_amount: Some(unbonded.amount),
        rewards: rewards(ctx)?,
    })
}
