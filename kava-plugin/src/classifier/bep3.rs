// Copyright (c) 2022 Kava Plugin Contributors

use super::MessageContext;
use crate::error::PluginResult;
use kava_models::{ActionResult, Coin, Transfer};

const TRANSFER_EVENT: &str = "transfer";

pub(crate) fn as_create_atomic_swap(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    let coin = ctx.coin_field("amount")?;
    Ok(ActionResult::CreateAtomicSwap(Transfer {
        sender: ctx.str_field("from")?,
        recipient: ctx.str_field("to")?,
        token: coin.denom,
        amount: coin.amount,
    }))
}

/// claim and refund only name the swap; the movement itself is read from the `transfer` event
pub(crate) fn as_claim_atomic_swap(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    let sender = ctx
        .event_str(TRANSFER_EVENT, "sender")
        .ok_or_else(|| ctx.malformed("transfer.sender"))?;
    let recipient = ctx
        .event_str(TRANSFER_EVENT, "recipient")
        .ok_or_else(|| ctx.malformed("transfer.recipient"))?;
    let coin: Coin = ctx
        .event_coin(TRANSFER_EVENT, "amount")?
        .ok_or_else(|| ctx.malformed("transfer.amount"))?;
    Ok(ActionResult::ClaimAtomicSwap(Transfer {
        sender,
        recipient,
        token: coin.denom,
        amount: coin.amount,
    }))
}
