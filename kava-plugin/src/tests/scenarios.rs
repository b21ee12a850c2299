// Copyright (c) 2022 Kava Plugin Contributors

//! End to end: raw transaction in, journal out

use super::tools::*;
use crate::KavaPlugin;
use kava_models::{CaajType, KavaTransaction};
use serde_json::json;

#[test]
fn test_failed_transaction_keeps_the_fee() {
    let chain_id = "kava-9";
    let raw = raw_transaction(
        chain_id,
        5,
        vec![message(
            chain_id,
            "/cosmos.bank.v1beta1.MsgSend",
            json!({
                "from_address": OWNER,
                "to_address": OTHER,
                "amount": [coin("ukava", "100")]
            }),
        )],
        vec![],
        "2500",
    );
    let transaction = KavaTransaction::new(raw).unwrap();
    let caajs = KavaPlugin::default()
        .get_caajs(OWNER, &transaction, &token_table())
        .unwrap();
    assert_eq!(caajs.len(), 1);
    assert_eq!(caajs[0].caaj_type, CaajType::Lose);
    assert_eq!(caajs[0].amount, "0.0025");
    assert_eq!(caajs[0].to_address, "fee");
}

#[test]
fn test_delegate_with_reward() {
    let transaction = single_message(
        "kava-4",
        "cosmos-sdk/MsgDelegate",
        json!({
            "delegator_address": OWNER,
            "validator_address": "kavavaloper1validator",
            "amount": coin("ukava", "0.00118")
        }),
        vec![withdraw_rewards("0.000039", "kavavaloper1validator")],
    );
    let caajs = KavaPlugin::default()
        .get_caajs(OWNER, &transaction, &token_table())
        .unwrap();
    assert_eq!(caajs.len(), 2);
    assert_eq!(caajs[0].caaj_type, CaajType::Deposit);
    assert_eq!(caajs[0].amount, "0.00118");
    assert_eq!(caajs[0].uti, "kava");
    assert_eq!(caajs[0].service, "delegate");
    assert_eq!(caajs[0].to_address, "kava_validator");
    assert_eq!(caajs[0].comment, "staking 0.00118 kava");
    assert_eq!(caajs[1].caaj_type, CaajType::Get);
    assert_eq!(caajs[1].amount, "0.000039");
    assert_eq!(caajs[1].service, "kava staking reward");
    assert_eq!(caajs[1].comment, "staking reward 0.000039 kava");
}

#[test]
fn test_redelegate_posts_only_the_reward() {
    let transaction = single_message(
        "kava-9",
        "/cosmos.staking.v1beta1.MsgBeginRedelegate",
        json!({
            "delegator_address": OWNER,
            "validator_src_address": "kavavaloper1src",
            "validator_dst_address": "kavavaloper1dst",
            "amount": coin("ukava", "1200")
        }),
        vec![withdraw_rewards("3.687213", "kavavaloper1src")],
    );
    let caajs = KavaPlugin::default()
        .get_caajs(OWNER, &transaction, &token_table())
        .unwrap();
    assert_eq!(caajs.len(), 1);
    assert_eq!(caajs[0].caaj_type, CaajType::Get);
    assert_eq!(caajs[0].amount, "3.687213");
}

#[test]
fn test_repay_cdp_with_and_without_close() {
    let body = json!({
        "sender": OWNER,
        "collateral_type": "bnb-a",
        "payment": coin("usdx", "10.050333")
    });
    let plugin = KavaPlugin::default();
    let table = token_table();

    let open = single_message(
        "kava-9",
        "/kava.cdp.v1beta1.MsgRepayDebt",
        body.clone(),
        vec![],
    );
    let caajs = plugin.get_caajs(OWNER, &open, &table).unwrap();
    assert_eq!(caajs.len(), 1);
    assert_eq!(caajs[0].caaj_type, CaajType::Repay);

    let closed = single_message(
        "kava-9",
        "/kava.cdp.v1beta1.MsgRepayDebt",
        body,
        vec![event(
            "cdp_withdrawal",
            &[("collateral_amount", json!(coin("bnb", "12.5")))],
        )],
    );
    let caajs = plugin.get_caajs(OWNER, &closed, &table).unwrap();
    let kinds: Vec<CaajType> = caajs.iter().map(|caaj| caaj.caaj_type).collect();
    assert_eq!(kinds, vec![CaajType::Repay, CaajType::Withdraw]);
    assert_eq!(caajs[1].uti, "bnb");
    assert_eq!(caajs[1].comment, "cdp withdraw 12.5 bnb");
}

#[test]
fn test_unrelated_send_with_fee() {
    let chain_id = "kava-3";
    let raw = raw_transaction(
        chain_id,
        0,
        vec![message(
            chain_id,
            "cosmos-sdk/MsgSend",
            json!({
                "from_address": OTHER,
                "to_address": STRANGER,
                "amount": [coin("ukava", "100")]
            }),
        )],
        vec![vec![]],
        "1000000",
    );
    let transaction = KavaTransaction::new(raw).unwrap();
    let plugin = KavaPlugin::default();
    assert!(plugin.can_handle(&transaction));
    let caajs = plugin
        .get_caajs(OWNER, &transaction, &token_table())
        .unwrap();
    assert_eq!(caajs.len(), 1);
    assert_eq!(caajs[0].amount, "1");
}
