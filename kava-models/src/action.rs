// Copyright (c) 2022 Kava Plugin Contributors

//! Canonical action results.
//!
//! Every message of a transaction, whatever its historical wire format, is reduced to
//! one `ActionResult`. The JSON form is `{"action": <kind>, "result": {...}}`.

use crate::{Amount, Coin};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Closed set of canonical actions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    /// staking, redelegation and reward withdrawal
    #[strum(to_string = "delegate", serialize = "begin_redelegate")]
    Delegate,
    BeginUnbonding,
    CreateCdp,
    DrawCdp,
    RepayCdp,
    DepositCdp,
    WithdrawCdp,
    ClaimUsdxMintingReward,
    HardWithdraw,
    HardDeposit,
    HardBorrow,
    HardRepay,
    ClaimHardReward,
    SwapExactForTokens,
    SwapDeposit,
    SwapWithdraw,
    ClaimSwapReward,
    Send,
    CreateAtomicSwap,
    ClaimAtomicSwap,
    Vote,
}

/// A reward paid out by a message, in on-chain order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub reward_token: String,
    pub reward_amount: Amount,
}

impl From<Coin> for Reward {
    fn from(coin: Coin) -> Self {
        Reward {
            reward_token: coin.denom,
            reward_amount: coin.amount,
        }
    }
}

/// One leg deposited into a swap pool
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapInput {
    pub input_token: String,
    pub input_amount: Amount,
}

/// One leg withdrawn from a swap pool
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOutput {
    pub output_token: String,
    pub output_amount: Amount,
}

/// A movement of tokens between two addresses
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub sender: String,
    pub recipient: String,
    pub token: String,
    pub amount: Amount,
}

/// Canonical result of one message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "result", rename_all = "snake_case")]
pub enum ActionResult {
    /// new stake (absent for redelegation and reward withdrawal) plus the rewards paid out
    #[serde(alias = "begin_redelegate")]
    Delegate {
        staking_token: Option<String>,
        staking_amount: Option<Amount>,
        rewards: Vec<Reward>,
    },
    BeginUnbonding {
        unbonding_token: Option<String>,
        unbonding_amount: Option<Amount>,
        rewards: Vec<Reward>,
    },
    CreateCdp {
        deposit_token: String,
        deposit_amount: Amount,
        draw_token: String,
        draw_amount: Amount,
    },
    DrawCdp {
        draw_token: String,
        draw_amount: Amount,
    },
    /// the withdraw leg is only present when the repayment closed the position
    RepayCdp {
        repay_token: String,
        repay_amount: Amount,
        withdraw_token: Option<String>,
        withdraw_amount: Option<Amount>,
    },
    DepositCdp {
        deposit_token: String,
        deposit_amount: Amount,
    },
    WithdrawCdp {
        withdraw_token: String,
        withdraw_amount: Amount,
    },
    ClaimUsdxMintingReward {
        rewards: Vec<Reward>,
    },
    HardWithdraw {
        hard_withdraw_token: String,
        hard_withdraw_amount: Amount,
    },
    HardDeposit {
        hard_deposit_token: String,
        hard_deposit_amount: Amount,
    },
    HardBorrow {
        hard_borrow_token: String,
        hard_borrow_amount: Amount,
    },
    HardRepay {
        hard_repay_token: String,
        hard_repay_amount: Amount,
    },
    ClaimHardReward {
        rewards: Vec<Reward>,
    },
    SwapExactForTokens {
        input_token: String,
        input_amount: Amount,
        output_token: String,
        output_amount: Amount,
        fee_token: String,
        fee_amount: Amount,
    },
    SwapDeposit {
        share_token: String,
        share_amount: Amount,
        inputs: Vec<SwapInput>,
    },
    SwapWithdraw {
        share_token: String,
        share_amount: Amount,
        outputs: Vec<SwapOutput>,
    },
    ClaimSwapReward {
        rewards: Vec<Reward>,
    },
    Send(Transfer),
    CreateAtomicSwap(Transfer),
    ClaimAtomicSwap(Transfer),
    Vote,
}

impl ActionResult {
    /// kind of this result
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionResult::Delegate { .. } => ActionKind::Delegate,
            ActionResult::BeginUnbonding { .. } => ActionKind::BeginUnbonding,
            ActionResult::CreateCdp { .. } => ActionKind::CreateCdp,
            ActionResult::DrawCdp { .. } => ActionKind::DrawCdp,
            ActionResult::RepayCdp { .. } => ActionKind::RepayCdp,
            ActionResult::DepositCdp { .. } => ActionKind::DepositCdp,
            ActionResult::WithdrawCdp { .. } => ActionKind::WithdrawCdp,
            ActionResult::ClaimUsdxMintingReward { .. } => ActionKind::ClaimUsdxMintingReward,
            ActionResult::HardWithdraw { .. } => ActionKind::HardWithdraw,
            ActionResult::HardDeposit { .. } => ActionKind::HardDeposit,
            ActionResult::HardBorrow { .. } => ActionKind::HardBorrow,
            ActionResult::HardRepay { .. } => ActionKind::HardRepay,
            ActionResult::ClaimHardReward { .. } => ActionKind::ClaimHardReward,
            ActionResult::SwapExactForTokens { .. } => ActionKind::SwapExactForTokens,
            ActionResult::SwapDeposit { .. } => ActionKind::SwapDeposit,
            ActionResult::SwapWithdraw { .. } => ActionKind::SwapWithdraw,
            ActionResult::ClaimSwapReward { .. } => ActionKind::ClaimSwapReward,
            ActionResult::Send(_) => ActionKind::Send,
            ActionResult::CreateAtomicSwap(_) => ActionKind::CreateAtomicSwap,
            ActionResult::ClaimAtomicSwap(_) => ActionKind::ClaimAtomicSwap,
            ActionResult::Vote => ActionKind::Vote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_kind_names() {
        assert_eq!(
            ActionKind::ClaimUsdxMintingReward.to_string(),
            "claim_usdx_minting_reward"
        );
        assert_eq!(
            ActionKind::from_str("begin_redelegate").unwrap(),
            ActionKind::Delegate
        );
        assert_eq!(
            ActionKind::from_str("hard_repay").unwrap(),
            ActionKind::HardRepay
        );
        assert!(ActionKind::from_str("liquidate").is_err());
    }

    #[test]
    fn test_canonical_json_shape() {
        let result = ActionResult::RepayCdp {
            repay_token: "usdx".to_string(),
            repay_amount: Amount::from_str("10.050333").unwrap(),
            withdraw_token: None,
            withdraw_amount: None,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "action": "repay_cdp",
                "result": {
                    "repay_token": "usdx",
                    "repay_amount": "10.050333",
                    "withdraw_token": null,
                    "withdraw_amount": null
                }
            })
        );
        assert_eq!(
            serde_json::to_value(ActionResult::Vote).unwrap(),
            json!({"action": "vote"})
        );
    }

    #[test]
    fn test_redelegate_alias() {
        let value = json!({
            "action": "begin_redelegate",
            "result": {
                "staking_token": null,
                "staking_amount": null,
                "rewards": [{"reward_token": "kava", "reward_amount": "3.687213"}]
            }
        });
        let result: ActionResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.kind(), ActionKind::Delegate);
    }
}
