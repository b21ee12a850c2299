// Copyright (c) 2022 Kava Plugin Contributors

use crate::config::PluginConfig;
use crate::error::PluginResult;
use crate::journal::JournalBuilder;
use crate::message::Message;
use crate::message_factory::MessageFactory;
use kava_logging::kava_trace;
use kava_models::constants::CHAIN_ID_PREFIX;
use kava_models::{ActionResult, CaajJournal, KavaTransaction, TokenTable};
use tracing::debug;

/// Accounting plugin of the kava chain
#[derive(Clone, Debug, Default)]
pub struct KavaPlugin {
    config: PluginConfig,
}

impl KavaPlugin {
    /// Plugin with the given configuration
    pub fn new(config: PluginConfig) -> Self {
        KavaPlugin { config }
    }

    /// true if the transaction comes from a kava chain
    pub fn can_handle(&self, transaction: &KavaTransaction) -> bool {
        transaction.get_chain_id().contains(CHAIN_ID_PREFIX)
    }

    /// Canonical results of every message, in order
    ///
    /// A failed transaction has none. The first message that cannot be classified
    /// aborts the whole transaction.
    pub fn classify(&self, transaction: &KavaTransaction) -> PluginResult<Vec<ActionResult>> {
        MessageFactory::get_messages(transaction, &self.config)?
            .iter()
            .map(Message::get_result)
            .collect()
    }

    /// Journal of `transaction` as seen from `address`
    pub fn get_caajs(
        &self,
        address: &str,
        transaction: &KavaTransaction,
        token_table: &dyn TokenTable,
    ) -> PluginResult<Vec<CaajJournal>> {
        let results = self.classify(transaction)?;
        self.get_caajs_from_results(address, transaction, &results, token_table)
    }

    /// Journal built from results already classified, the fee posting being read from `transaction`
    pub fn get_caajs_from_results(
        &self,
        address: &str,
        transaction: &KavaTransaction,
        results: &[ActionResult],
        token_table: &dyn TokenTable,
    ) -> PluginResult<Vec<CaajJournal>> {
        let mut builder = JournalBuilder::new(address, transaction, token_table, &self.config);
        for result in results {
            builder.add_result(result);
        }
        builder.add_fee()?;
        let caajs = builder.build();
        debug!(
            "transaction {}: {} journal entries for {}",
            transaction.get_transaction_id(),
            caajs.len(),
            address
        );
        kava_trace!("plugin.get_caajs", {
            "transaction_id": transaction.get_transaction_id(),
            "actions": results.len(),
            "entries": caajs.len()
        });
        Ok(caajs)
    }
}
