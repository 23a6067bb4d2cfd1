// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Steamworks runtime bridge.
//
// Compiled only with the `steamworks` feature. Requires linking against the
// vendor's import library at build time — see `sys` for the per-target
// library names.

#![cfg(feature = "steamworks")]

pub(crate) mod sys;

use dampfwerk_core::error::{DampfwerkError, Result};
use dampfwerk_core::types::AppId;

use crate::traits::PlatformRuntime;

/// Steamworks implementation of the platform runtime.
///
/// Zero-sized; all state lives in the vendor SDK's process-wide singleton.
pub struct SteamworksRuntime;

impl SteamworksRuntime {
    /// Create the bridge handle. Does **not** touch the vendor runtime —
    /// the first native call happens in `init`.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SteamworksRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformRuntime for SteamworksRuntime {
    fn runtime_name(&self) -> &str {
        "Steamworks"
    }

    fn init(&self) -> Result<()> {
        // SAFETY: no preconditions; the vendor initialises its own singleton
        // and reports failure through the return value.
        let ok = unsafe { sys::SteamAPI_Init() };
        if ok {
            tracing::info!("Steamworks runtime initialised");
            Ok(())
        } else {
            tracing::warn!("Steamworks runtime refused to initialise");
            Err(DampfwerkError::Init(
                "vendor runtime returned false (launcher not running, app not owned, \
                 or app-id file missing)"
                    .into(),
            ))
        }
    }

    fn shutdown(&self) {
        // SAFETY: the vendor tolerates shutdown in any state.
        unsafe { sys::SteamAPI_Shutdown() };
        tracing::info!("Steamworks runtime shut down");
    }

    fn restart_app_if_necessary(&self, app_id: AppId) -> bool {
        // SAFETY: plain value call; the vendor handles unknown ids itself.
        let relaunch = unsafe { sys::SteamAPI_RestartAppIfNecessary(app_id.0) };
        if relaunch {
            tracing::warn!(%app_id, "vendor has relaunched the title; caller must exit");
        }
        relaunch
    }
}
