// Copyright (c) 2022 Kava Plugin Contributors

//! Journal synthesis: turns the canonical results of one transaction into CAAJ postings.

use crate::config::PluginConfig;
use crate::error::PluginResult;
use kava_logging::kava_trace;
use kava_models::token::get_token_original_id;
use kava_models::{
    ActionResult, Amount, CaajJournal, CaajType, KavaTransaction, Reward, TokenTable, Transfer,
};
use uuid::Uuid;

const VALIDATOR: &str = "kava_validator";
const STAKING_REWARD: &str = "kava_staking_reward";
const CDP: &str = "kava_cdp";
const HARD_LENDING: &str = "hard_lending";
const SWAP: &str = "kava_swap";
const ATOMIC_SWAP: &str = "kava_bc_atomic_swap";
const FEE: &str = "fee";

/// one posting before its common fields are filled in
struct Leg<'l> {
    service: &'l str,
    caaj_type: CaajType,
    amount: Amount,
    token: &'l str,
    from: &'l str,
    to: &'l str,
    comment: String,
}

/// Accumulates the postings of one transaction for one address.
///
/// Every posting shares the trade uuid drawn when the builder is created.
pub(crate) struct JournalBuilder<'a> {
    address: &'a str,
    transaction: &'a KavaTransaction,
    table: &'a dyn TokenTable,
    config: &'a PluginConfig,
    trade_uuid: Uuid,
    entries: Vec<CaajJournal>,
}

/// symbol shown in descriptions
fn symbol(token: &str) -> &str {
    get_token_original_id(token).unwrap_or(token)
}

impl<'a> JournalBuilder<'a> {
    pub fn new(
        address: &'a str,
        transaction: &'a KavaTransaction,
        table: &'a dyn TokenTable,
        config: &'a PluginConfig,
    ) -> Self {
        JournalBuilder {
            address,
            transaction,
            table,
            config,
            trade_uuid: Uuid::new_v4(),
            entries: Vec::new(),
        }
    }

    fn push(&mut self, leg: Leg<'_>) {
        let uti = self
            .table
            .get_uti(&self.config.platform, get_token_original_id(leg.token));
        let entry = CaajJournal {
            executed_at: self.transaction.get_timestamp().to_string(),
            platform: self.config.platform.clone(),
            application: self.config.application.clone(),
            service: leg.service.to_string(),
            transaction_id: self.transaction.get_transaction_id().to_string(),
            trade_uuid: self.trade_uuid,
            caaj_type: leg.caaj_type,
            amount: leg.amount.to_string(),
            uti,
            from_address: leg.from.to_string(),
            to_address: leg.to.to_string(),
            comment: leg.comment,
        };
        kava_trace!("journal.push", {
            "transaction_id": entry.transaction_id,
            "type": entry.caaj_type.to_string(),
            "amount": entry.amount,
            "uti": entry.uti
        });
        self.entries.push(entry);
    }

    fn staking_rewards(&mut self, rewards: &[Reward]) {
        let address = self.address;
        for reward in rewards {
            self.push(Leg {
                service: "kava staking reward",
                caaj_type: CaajType::Get,
                amount: reward.reward_amount,
                token: &reward.reward_token,
                from: STAKING_REWARD,
                to: address,
                comment: format!(
                    "staking reward {} {}",
                    reward.reward_amount,
                    symbol(&reward.reward_token)
                ),
            });
        }
    }

    /// transfers only concern the address when it is one of the two ends, a transfer to
    /// itself counting as received; `counterparty` replaces the real other end when set
    fn transfer(&mut self, service: &str, transfer: &Transfer, counterparty: Option<&str>) {
        let address = self.address;
        let token = symbol(&transfer.token);
        if address == transfer.recipient {
            let from = counterparty.unwrap_or(&transfer.sender);
            self.push(Leg {
                service,
                caaj_type: CaajType::Receive,
                amount: transfer.amount,
                token: &transfer.token,
                from,
                to: address,
                comment: format!(
                    "{} receive {} {} from {}",
                    address, transfer.amount, token, from
                ),
            });
        } else if address == transfer.sender {
            let to = counterparty.unwrap_or(&transfer.recipient);
            self.push(Leg {
                service,
                caaj_type: CaajType::Send,
                amount: transfer.amount,
                token: &transfer.token,
                from: address,
                to,
                comment: format!("{} send {} {} to {}", address, transfer.amount, token, to),
            });
        }
    }

    /// Append the postings of one action result
    pub fn add_result(&mut self, result: &ActionResult) {
        let address = self.address;
        match result {
            ActionResult::Delegate {
                staking_token,
                staking_amount,
                rewards,
            } => {
                if let (Some(token), Some(amount)) = (staking_token, staking_amount) {
                    if !amount.is_zero() {
                        self.push(Leg {
                            service: "delegate",
                            caaj_type: CaajType::Deposit,
                            amount: *amount,
                            token,
                            from: address,
                            to: VALIDATOR,
                            comment: format!("staking {} {}", amount, symbol(token)),
                        });
                    }
                }
                self.staking_rewards(rewards);
            }
            ActionResult::BeginUnbonding {
                unbonding_token,
                unbonding_amount,
                rewards,
            } => {
                if let (Some(token), Some(amount)) = (unbonding_token, unbonding_amount) {
                    if !amount.is_zero() {
                        self.push(Leg {
                            service: "begin unbonding",
                            caaj_type: CaajType::Withdraw,
                            amount: *amount,
                            token,
                            from: VALIDATOR,
                            to: address,
                            comment: format!("unstaking {} {}", amount, symbol(token)),
                        });
                    }
                }
                self.staking_rewards(rewards);
            }
            ActionResult::CreateCdp {
                deposit_token,
                deposit_amount,
                draw_token,
                draw_amount,
            } => {
                self.push(Leg {
                    service: "cdp deposit",
                    caaj_type: CaajType::Deposit,
                    amount: *deposit_amount,
                    token: deposit_token,
                    from: address,
                    to: CDP,
                    comment: format!("cdp deposit {} {}", deposit_amount, symbol(deposit_token)),
                });
                self.push(Leg {
                    service: "cdp borrow",
                    caaj_type: CaajType::Borrow,
                    amount: *draw_amount,
                    token: draw_token,
                    from: CDP,
                    to: address,
                    comment: format!("cdp draw {} {}", draw_amount, symbol(draw_token)),
                });
            }
            // the drawn debt is posted with the address as source, as historical journals were
            ActionResult::DrawCdp {
                draw_token,
                draw_amount,
            } => self.push(Leg {
                service: "cdp draw",
                caaj_type: CaajType::Borrow,
                amount: *draw_amount,
                token: draw_token,
                from: address,
                to: CDP,
                comment: format!("cdp draw {} {}", draw_amount, symbol(draw_token)),
            }),
            ActionResult::RepayCdp {
                repay_token,
                repay_amount,
                withdraw_token,
                withdraw_amount,
            } => {
                self.push(Leg {
                    service: "cdp repay",
                    caaj_type: CaajType::Repay,
                    amount: *repay_amount,
                    token: repay_token,
                    from: address,
                    to: CDP,
                    comment: format!("cdp repay {} {}", repay_amount, symbol(repay_token)),
                });
                if let (Some(token), Some(amount)) = (withdraw_token, withdraw_amount) {
                    self.push(Leg {
                        service: "cdp withdraw",
                        caaj_type: CaajType::Withdraw,
                        amount: *amount,
                        token,
                        from: CDP,
                        to: address,
                        comment: format!("cdp withdraw {} {}", amount, symbol(token)),
                    });
                }
            }
            ActionResult::DepositCdp {
                deposit_token,
                deposit_amount,
            } => self.push(Leg {
                service: "cdp deposit",
                caaj_type: CaajType::Deposit,
                amount: *deposit_amount,
                token: deposit_token,
                from: address,
                to: CDP,
                comment: format!("cdp deposit {} {}", deposit_amount, symbol(deposit_token)),
            }),
            ActionResult::WithdrawCdp {
                withdraw_token,
                withdraw_amount,
            } => self.push(Leg {
                service: "cdp withdraw",
                caaj_type: CaajType::Withdraw,
                amount: *withdraw_amount,
                token: withdraw_token,
                from: CDP,
                to: address,
                comment: format!(
                    "cdp withdraw {} {}",
                    withdraw_amount,
                    symbol(withdraw_token)
                ),
            }),
            // only the first reward is posted
            ActionResult::ClaimUsdxMintingReward { rewards } => {
                if let Some(reward) = rewards.first() {
                    self.push(Leg {
                        service: "cdp claim reward",
                        caaj_type: CaajType::Get,
                        amount: reward.reward_amount,
                        token: &reward.reward_token,
                        from: CDP,
                        to: address,
                        comment: format!(
                            "cdp reward {} {}",
                            reward.reward_amount,
                            symbol(&reward.reward_token)
                        ),
                    });
                }
            }
            ActionResult::HardWithdraw {
                hard_withdraw_token,
                hard_withdraw_amount,
            } => self.push(Leg {
                service: "hard withdraw",
                caaj_type: CaajType::Withdraw,
                amount: *hard_withdraw_amount,
                token: hard_withdraw_token,
                from: HARD_LENDING,
                to: address,
                comment: format!(
                    "hard withdraw {} {}",
                    hard_withdraw_amount,
                    symbol(hard_withdraw_token)
                ),
            }),
            ActionResult::HardDeposit {
                hard_deposit_token,
                hard_deposit_amount,
            } => self.push(Leg {
                service: "hard deposit",
                caaj_type: CaajType::Deposit,
                amount: *hard_deposit_amount,
                token: hard_deposit_token,
                from: address,
                to: HARD_LENDING,
                comment: format!(
                    "hard deposit {} {}",
                    hard_deposit_amount,
                    symbol(hard_deposit_token)
                ),
            }),
            ActionResult::HardBorrow {
                hard_borrow_token,
                hard_borrow_amount,
            } => self.push(Leg {
                service: "hard borrow",
                caaj_type: CaajType::Borrow,
                amount: *hard_borrow_amount,
                token: hard_borrow_token,
                from: HARD_LENDING,
                to: address,
                comment: format!(
                    "hard borrow {} {}",
                    hard_borrow_amount,
                    symbol(hard_borrow_token)
                ),
            }),
            ActionResult::HardRepay {
                hard_repay_token,
                hard_repay_amount,
            } => self.push(Leg {
                service: "hard repay",
                caaj_type: CaajType::Repay,
                amount: *hard_repay_amount,
                token: hard_repay_token,
                from: address,
                to: HARD_LENDING,
                comment: format!(
                    "hard repay {} {}",
                    hard_repay_amount,
                    symbol(hard_repay_token)
                ),
            }),
            ActionResult::ClaimHardReward { rewards } => {
                for reward in rewards {
                    self.push(Leg {
                        service: "claim hard reward",
                        caaj_type: CaajType::Get,
                        amount: reward.reward_amount,
                        token: &reward.reward_token,
                        from: HARD_LENDING,
                        to: address,
                        comment: format!(
                            "hard lending reward receive {} {}",
                            reward.reward_amount,
                            symbol(&reward.reward_token)
                        ),
                    });
                }
            }
            ActionResult::SwapExactForTokens {
                input_token,
                input_amount,
                output_token,
                output_amount,
                fee_token,
                fee_amount,
            } => {
                let trade = format!(
                    "buy {} {} sell {} {}",
                    output_amount,
                    symbol(output_token),
                    input_amount,
                    symbol(input_token)
                );
                self.push(Leg {
                    service: "swap exact for tokens",
                    caaj_type: CaajType::Lose,
                    amount: *input_amount,
                    token: input_token,
                    from: address,
                    to: SWAP,
                    comment: trade.clone(),
                });
                self.push(Leg {
                    service: "swap exact for tokens",
                    caaj_type: CaajType::Get,
                    amount: *output_amount,
                    token: output_token,
                    from: SWAP,
                    to: address,
                    comment: trade,
                });
                self.push(Leg {
                    service: "swap exact for tokens",
                    caaj_type: CaajType::Lose,
                    amount: *fee_amount,
                    token: fee_token,
                    from: address,
                    to: SWAP,
                    comment: format!("pay {} {} as swap fee", fee_amount, symbol(fee_token)),
                });
            }
            ActionResult::SwapDeposit {
                share_token,
                share_amount,
                inputs,
            } => {
                self.push(Leg {
                    service: "swap deposit",
                    caaj_type: CaajType::GetBonds,
                    amount: *share_amount,
                    token: share_token,
                    from: SWAP,
                    to: address,
                    comment: format!("kava swap receive {} {}", share_amount, symbol(share_token)),
                });
                for input in inputs {
                    self.push(Leg {
                        service: "swap deposit",
                        caaj_type: CaajType::Deposit,
                        amount: input.input_amount,
                        token: &input.input_token,
                        from: address,
                        to: SWAP,
                        comment: format!(
                            "kava swap send {} {}",
                            input.input_amount,
                            symbol(&input.input_token)
                        ),
                    });
                }
            }
            ActionResult::SwapWithdraw {
                share_token,
                share_amount,
                outputs,
            } => {
                self.push(Leg {
                    service: "swap withdraw",
                    caaj_type: CaajType::LoseBonds,
                    amount: *share_amount,
                    token: share_token,
                    from: address,
                    to: SWAP,
                    comment: format!("kava swap send {} {}", share_amount, symbol(share_token)),
                });
                for output in outputs {
                    self.push(Leg {
                        service: "swap withdraw",
                        caaj_type: CaajType::Withdraw,
                        amount: output.output_amount,
                        token: &output.output_token,
                        from: SWAP,
                        to: address,
                        comment: format!(
                            "kava swap receive {} {}",
                            output.output_amount,
                            symbol(&output.output_token)
                        ),
                    });
                }
            }
            ActionResult::ClaimSwapReward { rewards } => {
                for reward in rewards {
                    self.push(Leg {
                        service: "claim swap reward",
                        caaj_type: CaajType::Get,
                        amount: reward.reward_amount,
                        token: &reward.reward_token,
                        from: SWAP,
                        to: address,
                        comment: format!(
                            "kava swap reward receive {} {}",
                            reward.reward_amount,
                            symbol(&reward.reward_token)
                        ),
                    });
                }
            }
            ActionResult::Send(transfer) => self.transfer("send", transfer, None),
            ActionResult::CreateAtomicSwap(transfer) | ActionResult::ClaimAtomicSwap(transfer) => {
                self.transfer("create atomic swap", transfer, Some(ATOMIC_SWAP))
            }
            ActionResult::Vote => {}
        }
    }

    /// Append the fee posting, if any fee was charged
    pub fn add_fee(&mut self) -> PluginResult<()> {
        let fee = self
            .transaction
            .get_transaction_fee()?
            .from_smallest_unit(self.config.fee_decimal_exponent)?;
        if fee.is_zero() {
            return Ok(());
        }
        let platform = self.config.platform.clone();
        let address = self.address;
        self.push(Leg {
            service: &platform,
            caaj_type: CaajType::Lose,
            amount: fee,
            token: &platform,
            from: address,
            to: FEE,
            comment: String::new(),
        });
        Ok(())
    }

    pub fn build(self) -> Vec<CaajJournal> {
        self.entries
    }
}
