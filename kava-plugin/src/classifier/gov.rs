// Copyright (c) 2022 Kava Plugin Contributors

use super::MessageContext;
use crate::error::PluginResult;
use kava_models::ActionResult;

/// votes move no tokens
pub(crate) fn as_vote(_ctx: &MessageContext<'_>) -> PluginResult<ActionResult> {
    Ok(ActionResult::Vote)
}
