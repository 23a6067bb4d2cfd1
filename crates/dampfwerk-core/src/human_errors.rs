// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the doctor command.
//
// Initialisation failures all surface from the vendor runtime as a bare
// boolean, so the guidance here names the handful of real-world causes and
// what to do about each.

use crate::error::DampfwerkError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// User must do something (start the launcher, sign in).
    ActionRequired,
    /// Cannot be fixed without changing the build or the install.
    Permanent,
}

/// A plain-English error with an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level (drives presentation).
    pub severity: Severity,
}

/// Convert a `DampfwerkError` into guidance a non-developer can act on.
pub fn humanize_error(err: &DampfwerkError) -> HumanError {
    match err {
        DampfwerkError::Init(_) => HumanError {
            message: "The platform runtime refused to start.".into(),
            suggestion: "Make sure the platform launcher is running and you are signed in. \
                         If you are running a development build outside the launcher, put a \
                         steam_appid.txt file with your app id next to the executable."
                .into(),
            severity: Severity::ActionRequired,
        },

        DampfwerkError::RuntimeUnavailable => HumanError {
            message: "This build was made without the platform runtime.".into(),
            suggestion: "Rebuild with the \"steamworks\" feature enabled and link against \
                         the vendor's runtime library."
                .into(),
            severity: Severity::Permanent,
        },

        DampfwerkError::InvalidAppId(raw) => HumanError {
            message: "The app id could not be read.".into(),
            suggestion: format!("App ids are plain decimal numbers. (Got: {raw})"),
            severity: Severity::ActionRequired,
        },

        DampfwerkError::Io(_) | DampfwerkError::Serialization(_) => HumanError {
            message: "A configuration file could not be read or written.".into(),
            suggestion: "Check that the config path exists and is writable, then try again."
                .into(),
            severity: Severity::ActionRequired,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_runtime_is_permanent() {
        let human = humanize_error(&DampfwerkError::RuntimeUnavailable);
        assert_eq!(human.severity, Severity::Permanent);
    }

    #[test]
    fn init_failure_mentions_the_dev_app_id_file() {
        let human = humanize_error(&DampfwerkError::Init("runtime refused".into()));
        assert!(human.suggestion.contains("steam_appid.txt"));
        assert_eq!(human.severity, Severity::ActionRequired);
    }
}
