// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Dampfwerk platform bridge.

use serde::{Deserialize, Serialize};

use crate::error::DampfwerkError;

/// 32-bit application identifier assigned by the platform to a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppId(pub u32);

impl AppId {
    /// Reserved sentinel denoting "no application". The vendor runtime treats
    /// a restart check against this id as a diagnostic invocation.
    pub const INVALID: AppId = AppId(0);

    /// Whether this id is the reserved invalid-id sentinel.
    pub fn is_invalid(&self) -> bool {
        *self == Self::INVALID
    }
}

impl From<u32> for AppId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AppId {
    type Err = DampfwerkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(AppId)
            .map_err(|_| DampfwerkError::InvalidAppId(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sentinel_is_zero() {
        assert_eq!(AppId::INVALID, AppId(0));
        assert!(AppId::INVALID.is_invalid());
        assert!(!AppId(480).is_invalid());
    }

    #[test]
    fn parses_decimal_with_whitespace() {
        let id: AppId = " 480\n".parse().expect("parse");
        assert_eq!(id, AppId(480));
    }

    #[test]
    fn rejects_non_numeric() {
        assert!("spacewar".parse::<AppId>().is_err());
    }
}
