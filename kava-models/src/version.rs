// Copyright (c) 2022 Kava Plugin Contributors

use crate::constants::LAST_LEGACY_VERSION;
use crate::ModelsError;
use std::fmt;
use std::str::FromStr;

/// Schema version of a transaction, taken from the numeric suffix of its chain id
/// (`kava-4` is version 4). Each network upgrade bumped the suffix and some of them
/// changed the wire shape of the messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion(u8);

impl SchemaVersion {
    /// Wrap a raw version number
    pub const fn new(version: u8) -> Self {
        SchemaVersion(version)
    }

    /// Raw version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// true when transactions of this version use the amino `type`/`value` envelope
    pub fn is_legacy(&self) -> bool {
        self.0 <= LAST_LEGACY_VERSION
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Parse a chain id such as `kava-9`
impl FromStr for SchemaVersion {
    type Err = ModelsError;

    fn from_str(chain_id: &str) -> Result<Self, Self::Err> {
        let (_, suffix) = chain_id
            .rsplit_once('-')
            .ok_or_else(|| ModelsError::InvalidVersionError(chain_id.to_string()))?;
        let version = suffix
            .parse::<u8>()
            .map_err(|_| ModelsError::InvalidVersionError(chain_id.to_string()))?;
        Ok(SchemaVersion(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_version_from_chain_id() {
        let v4 = SchemaVersion::from_str("kava-4").unwrap();
        assert_eq!(v4.number(), 4);
        assert!(v4.is_legacy());
        let v9 = SchemaVersion::from_str("kava-9").unwrap();
        assert!(!v9.is_legacy());
        assert_eq!(v9.to_string(), "v9");
        assert_matches!(
            SchemaVersion::from_str("kava"),
            Err(ModelsError::InvalidVersionError(..))
        );
        assert_matches!(
            SchemaVersion::from_str("kava-testnet"),
            Err(ModelsError::InvalidVersionError(..))
        );
    }
}
