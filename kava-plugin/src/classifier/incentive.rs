// Copyright (c) 2022 Kava Plugin Contributors

use super::MessageContext;
use crate::error::PluginResult;
use kava_models::ActionResult;

const CLAIM_REWARD_EVENT: &str = "claim_reward";
const CLAIM_AMOUNT_KEY: &str = "claim_amount";
const CLAIM_HARVEST_REWARD_EVENT: &str = "claim_harvest_reward";

pub(crate) fn as_claim_usdx_minting_reward(
    ctx: &MessageContext<'_>,
) -> PluginResult<ActionResult> {
    Ok(ActionResult::ClaimUsdxMintingReward {
        rewards: ctx.rewards(CLAIM_REWARD_EVENT, CLAIM_AMOUNT_KEY)?,
    })
}

pub(crate) fn as_claim_hard_reward(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    Ok(ActionResult::ClaimHardReward {
        rewards: ctx.rewards(CLAIM_REWARD_EVENT, CLAIM_AMOUNT_KEY)?,
    })
}

/// harvest paid its rewards through its own event
pub(crate) fn as_claim_harvest_reward(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    Ok(ActionResult::ClaimHardReward {
        rewards: ctx.rewards(CLAIM_HARVEST_REWARD_EVENT, "amount")?,
    })
}

pub(crate) fn as_claim_swap_reward(ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    Ok(ActionResult::ClaimSwapReward {
        rewards: ctx.rewards(CLAIM_REWARD_EVENT, CLAIM_AMOUNT_KEY)?,
    })
}
