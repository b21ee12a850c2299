// Copyright (c) 2022 Kava Plugin Contributors

use super::MessageContext;
use crate::error::PluginResult;
use kava_models::ActionResult;

/// emitted when collateral goes back to the owner, which on repayment means the position was closed
const CDP_WITHDRAWAL_EVENT: &str = "cdp_withdrawal";

pub(crate) fn as_create_cdp(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    let collateral = ctx.coin_field("collateral")?;
    let principal = ctx.coin_field("principal")?;
    Ok(ActionResult::CreateCdp {
        deposit_token: collateral.denom,
        deposit_amount: collateral.amount,
        draw_token: principal.denom,
        draw_amount: principal.amount,
    })
}

pub(crate) fn as_draw_cdp(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    let principal = ctx.coin_field("principal")?;
    Ok(ActionResult::DrawCdp {
        draw_token: principal.denom,
        draw_amount: principal.amount,
    })
}

pub(crate) fn as_repay_cdp(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    let payment = ctx.coin_field("payment")?;
    let withdrawal = ctx.event_coin(CDP_WITHDRAWAL_EVENT, "collateral_amount")?;
    let (withdraw_token, withdraw_amount) = match withdrawal {
        Some(coin) => (Some(coin.denom), Some(coin.amount)),
        None => (None, None),
    };
    Ok(ActionResult::RepayCdp {
        repay_token: payment.denom,
        repay_amount: payment.amount,
        withdraw_token,
        withdraw_amount,
    })
}

pub(crate) fn as_deposit_cdp(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    let collateral = ctx.coin_field("collateral")?;
    Ok(ActionResult::DepositCdp {
        deposit_token: collateral.denom,
        deposit_amount: collateral.amount,
    })
}

pub(crate) fn as_withdraw_cdp(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    let collateral = ctx.coin_field("collateral")?;
    Ok(ActionResult::WithdrawCdp {
        withdraw_token: collateral.denom,
        withdraw_amount: collateral.amount,
    })
}
