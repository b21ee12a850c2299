// Copyright (c) 2022 Kava Plugin Contributors

//! Kava swap (AMM) messages.
//!
//! The executed amounts are reported by the module events; the message body only carries
//! the requested amounts and is used when an event is missing.

use super::MessageContext;
use crate::error::PluginResult;
use kava_models::{ActionResult, Amount, Coin, SwapInput, SwapOutput};
use std::str::FromStr;

const SWAP_TRADE_EVENT: &str = "swap_trade";
const SWAP_DEPOSIT_EVENT: &str = "swap_deposit";
const SWAP_WITHDRAW_EVENT: &str = "swap_withdraw";

fn trade(
    ctx: &MessageContext<'_>,
    body_input: &str,
    body_output: &str,
) -> PluginResult<ActionResult> {
    let input = match ctx.event_coin(SWAP_TRADE_EVENT, "swap_input")? {
        Some(coin) => coin,
        None => ctx.coin_field(body_input)?,
    };
    let output = match ctx.event_coin(SWAP_TRADE_EVENT, "swap_output")? {
        Some(coin) => coin,
        None => ctx.coin_field(body_output)?,
    };
    let fee = match ctx.event_coin(SWAP_TRADE_EVENT, "swap_fee")? {
        Some(coin) => coin,
        None => Coin {
            denom: input.denom.clone(),
            amount: input
                .amount
                .checked_mul_rate(ctx.config.swap_fee_rate, ctx.config.swap_fee_decimal_places)
                .ok_or_else(|| ctx.malformed(body_input))?,
        },
    };
    Ok(ActionResult::SwapExactForTokens {
        input_token: input.denom,
        input_amount: input.amount,
        output_token: output.denom,
        output_amount: output.amount,
        fee_token: fee.denom,
        fee_amount: fee.amount,
    })
}

pub(crate) fn as_swap_exact_for_tokens(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    trade(ctx, "exact_token_a", "token_b")
}

/// an exact output trade is accounted like an exact input one
pub(crate) fn as_swap_for_exact_tokens(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    trade(ctx, "token_a", "exact_token_b")
}

/// pool id from the event, or the pair denoms of the body sorted like the chain names pools
fn share_token(ctx: &MessageContext<'_>, event_type: &str, legs: &[Coin]) -> String {
    if let Some(pool_id) = ctx.event_str(event_type, "pool_id") {
        return pool_id;
    }
    let mut denoms: Vec<&str> = legs.iter().map(|coin| coin.denom.as_str()).collect();
    denoms.sort_unstable();
    denoms.join(":")
}

fn shares(ctx: &MessageContext<'_>, event_type: &str) -> PluginResult<Amount> {
    let field = format!("{}.shares", event_type);
    let text = match ctx.event_str(event_type, "shares") {
        Some(text) => text,
        None => ctx.str_field("shares").map_err(|_| ctx.malformed(&field))?,
    };
    Amount::from_str(&text).map_err(|_| ctx.malformed(&field))
}

/// legs reported by the event, or the two body coins
fn pool_legs(
    ctx: &MessageContext<'_>,
    event_type: &str,
    body_a: &str,
    body_b: &str,
) -> PluginResult<Vec<Coin>> {
    let legs = ctx.event_coins(event_type, "amount")?;
    if !legs.is_empty() {
        return Ok(legs);
    }
    let mut legs = Vec::with_capacity(2);
    for name in [body_a, body_b] {
        if let Some(coin) = ctx.opt_coin_field(name)? {
            legs.push(coin);
        }
    }
    if legs.is_empty() {
        return Err(ctx.malformed(&format!("{}.amount", event_type)));
    }
    Ok(legs)
}

pub(crate) fn as_swap_deposit(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    let legs = pool_legs(ctx, SWAP_DEPOSIT_EVENT, "token_a", "token_b")?;
    Ok(ActionResult::SwapDeposit {
        share_token: share_token(ctx, SWAP_DEPOSIT_EVENT, &legs),
        share_amount: shares(ctx, SWAP_DEPOSIT_EVENT)?,
        inputs: legs
            .into_iter()
            .map(|coin| SwapInput {
                input_token: coin.denom,
                input_amount: coin.amount,
            })
            .collect(),
    })
}

pub(crate) fn as_swap_withdraw(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    let legs = pool_legs(ctx, SWAP_WITHDRAW_EVENT, "min_token_a", "min_token_b")?;
    Ok(ActionResult::SwapWithdraw {
        share_token: share_token(ctx, SWAP_WITHDRAW_EVENT, &legs),
        share_amount: shares(ctx, SWAP_WITHDRAW_EVENT)?,
        outputs: legs
            .into_iter()
            .map(|coin| SwapOutput {
                output_token: coin.denom,
                output_amount: coin.amount,
            })
            .collect(),
    })
}
