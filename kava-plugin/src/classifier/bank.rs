// Copyright (c) 2022 Kava Plugin Contributors

use super::MessageContext;
use crate::error::PluginResult;
use kava_models::{ActionResult, Transfer};

/// `MsgSend`: only the first coin of the amount list is accounted
pub(crate) fn as_send(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    let coin = ctx.coin_field("amount")?;
    Ok(ActionResult::Send(Transfer {
        sender: ctx.str_field("from_address")?,
        recipient: ctx.str_field("to_address")?,
        token: coin.denom,
        amount: coin.amount,
    }))
}
