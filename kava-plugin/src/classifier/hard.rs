// Copyright (c) 2022 Kava Plugin Contributors

//! Hard lending messages. Before version 5 the module was named harvest and carried a
//! single coin where hard carries a coin list; only the first coin is accounted.

use super::MessageContext;
use crate::error::PluginResult;
use kava_models::{ActionResult, Coin};

fn single_coin(ctx: &MessageContext<'_>) -> PluginResult<Coin> {
    ctx.coin_field("amount")
}

fn first_coin(ctx: &MessageContext<'_>) -> PluginResult<Coin> {
    match ctx.body.get("amount") {
        Some(value) if value.is_array() => ctx.coin_field("amount"),
        _ => Err(ctx.malformed("amount")),
    }
}

fn deposit(coin: Coin) -> ActionResult {
    ActionResult::HardDeposit {
        hard_deposit_token: coin.denom,
        hard_deposit_amount: coin.amount,
    }
}

fn withdraw(coin: Coin) -> ActionResult {
    ActionResult::HardWithdraw {
        hard_withdraw_token: coin.denom,
        hard_withdraw_amount: coin.amount,
    }
}

pub(crate) fn as_harvest_deposit(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    single_coin(ctx).map(deposit)
}

pub(crate) fn as_harvest_withdraw(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    single_coin(ctx).map(withdraw)
}

pub(crate) fn as_hard_deposit(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    first_coin(ctx).map(deposit)
}

pub(crate) fn as_hard_withdraw(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    first_coin(ctx).map(withdraw)
}

pub(crate) fn as_hard_borrow(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    let coin = first_coin(ctx)?;
    Ok(ActionResult::HardBorrow {
        hard_borrow_token: coin.denom,
        hard_borrow_amount: coin.amount,
    })
}

pub(crate) fn as_hard_repay(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    let coin = first_coin(ctx)?;
    Ok(ActionResult::HardRepay {
        hard_repay_token: coin.denom,
        hard_repay_amount: coin.amount,
    })
}
