// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dampfwerk — Foreign-function boundary and exported C surface.
//
// This crate bridges plain-C callers to the vendor platform runtime: a trait
// seam (`traits`), the Steamworks implementation behind the `steamworks`
// feature, a stub for builds without the vendor binary, and the four
// exported C symbols (`capi`). Declarations for C callers ship as
// `include/dampfwerk.h` at the repository root.

pub mod capi;
pub mod traits;

#[cfg(feature = "steamworks")]
pub mod steam;

#[cfg(not(feature = "steamworks"))]
pub mod stub;

use dampfwerk_core::error::Result;
use dampfwerk_core::types::AppId;

use traits::PlatformRuntime;

/// Retrieves the platform runtime implementation compiled into this build.
///
/// RETURNS: A boxed trait object (`dyn PlatformRuntime`) that abstracts away
/// the vendor SDK linkage.
pub fn platform_runtime() -> Box<dyn PlatformRuntime> {
    #[cfg(feature = "steamworks")]
    {
        Box::new(steam::SteamworksRuntime::new())
    }
    #[cfg(not(feature = "steamworks"))]
    {
        // DESKTOP/CI: no vendor binary on the link line; every call is a
        // safe no-op that reports the runtime as unavailable.
        Box::new(stub::StubRuntime)
    }
}

/// Start the vendor runtime singleton.
pub fn init() -> Result<()> {
    platform_runtime().init()
}

/// Release the vendor runtime singleton. Safe without a prior `init`.
pub fn shutdown() {
    platform_runtime().shutdown()
}

/// Ask the vendor whether the title must be relaunched under the launcher.
///
/// A `true` result means the vendor has already relaunched the title and
/// the calling process must exit immediately. The bridge itself takes no
/// action either way.
pub fn restart_app_if_necessary(app_id: AppId) -> bool {
    platform_runtime().restart_app_if_necessary(app_id)
}

/// Run the relaunch check with the reserved invalid-id sentinel.
///
/// Diagnostic hook for verifying launcher wiring without a real app id;
/// never the production path.
pub fn restart_app_if_necessary_diagnostic() -> bool {
    diagnostic_restart(platform_runtime().as_ref())
}

// The diagnostic variant always passes the sentinel, never a real id.
fn diagnostic_restart(runtime: &dyn PlatformRuntime) -> bool {
    runtime.restart_app_if_necessary(AppId::INVALID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Trait double that records the app id it was asked about.
    struct RecordingRuntime {
        seen: Cell<Option<AppId>>,
    }

    impl PlatformRuntime for RecordingRuntime {
        fn runtime_name(&self) -> &str {
            "recording"
        }

        fn init(&self) -> Result<()> {
            Ok(())
        }

        fn shutdown(&self) {}

        fn restart_app_if_necessary(&self, app_id: AppId) -> bool {
            self.seen.set(Some(app_id));
            false
        }
    }

    #[test]
    fn diagnostic_restart_always_uses_the_invalid_sentinel() {
        let runtime = RecordingRuntime {
            seen: Cell::new(None),
        };
        assert!(!diagnostic_restart(&runtime));
        assert_eq!(runtime.seen.get(), Some(AppId::INVALID));
    }
}
