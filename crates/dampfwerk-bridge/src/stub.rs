// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub runtime for builds without the vendor binary.
//
// `init` reports the runtime as unavailable; everything else is a safe
// no-op. The real implementation lives in the `steam` module.

use dampfwerk_core::error::{DampfwerkError, Result};
use dampfwerk_core::types::AppId;

use crate::traits::PlatformRuntime;

/// No-op runtime compiled when the `steamworks` feature is off.
pub struct StubRuntime;

impl PlatformRuntime for StubRuntime {
    fn runtime_name(&self) -> &str {
        "stub (vendor runtime not linked)"
    }

    fn init(&self) -> Result<()> {
        tracing::warn!("PlatformRuntime::init called on stub runtime");
        Err(DampfwerkError::RuntimeUnavailable)
    }

    fn shutdown(&self) {
        tracing::debug!("PlatformRuntime::shutdown called on stub runtime");
    }

    fn restart_app_if_necessary(&self, _app_id: AppId) -> bool {
        tracing::warn!("PlatformRuntime::restart_app_if_necessary called on stub runtime");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_reports_runtime_unavailable() {
        let err = StubRuntime.init().expect_err("stub init must fail");
        assert!(matches!(err, DampfwerkError::RuntimeUnavailable));
    }

    #[test]
    fn shutdown_is_a_no_op_in_any_state() {
        // No prior init; must not trap.
        StubRuntime.shutdown();
        StubRuntime.shutdown();
    }

    #[test]
    fn restart_check_reports_no_relaunch() {
        assert!(!StubRuntime.restart_app_if_necessary(AppId(480)));
        assert!(!StubRuntime.restart_app_if_necessary(AppId::INVALID));
    }
}
