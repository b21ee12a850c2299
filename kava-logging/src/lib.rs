// Copyright (c) 2022 Kava Plugin Contributors

//! Structured trace logging shared by the plugin crates.

/// Emit a `tracing::trace!` line of the form `kava_trace:<event>:<json params>`.
///
/// ```
/// # use kava_logging::kava_trace;
/// let action = "delegate";
/// kava_trace!("plugin.classify", { "action": action, "msg_index": 0 });
/// ```
#[macro_export]
macro_rules! kava_trace {
    ($evt:expr, $params:tt) => {
        tracing::trace!("kava_trace:{}:{}", $evt, serde_json::json!($params));
    };
}
