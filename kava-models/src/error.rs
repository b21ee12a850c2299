// Copyright (c) 2022 Kava Plugin Contributors

use displaydoc::Display;
use thiserror::Error;

/// models result
pub type ModelsResult<T, E = ModelsError> = core::result::Result<T, E>;

/// models error
#[non_exhaustive]
#[derive(Display, Error, Debug)]
pub enum ModelsError {
    /// amount parse error: {0}
    AmountParseError(String),
    /// invalid schema version: {0}
    InvalidVersionError(String),
    /// missing field: {0}
    MissingField(String),
    /// invalid field: {0}
    InvalidField(String),
    /// serde error: {0}
    SerdeError(#[from] serde_json::Error),
}
