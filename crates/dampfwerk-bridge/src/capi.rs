// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Exported C surface.
//
// Four unmangled symbols, each a pass-through to the compiled-in platform
// runtime. `Result` is flattened back to the vendor's plain boolean, so the
// value a C caller sees is the vendor's result unchanged — failure causes
// are not distinguishable through this surface. Matching declarations live
// in `include/dampfwerk.h`.

use dampfwerk_core::types::AppId;

/// `bool Init(void)` — start the vendor runtime singleton.
#[unsafe(export_name = "Init")]
pub extern "C" fn init() -> bool {
    crate::init().is_ok()
}

/// `void Shutdown(void)` — release the vendor runtime singleton. Safe to
/// call without a prior successful `Init`.
#[unsafe(export_name = "Shutdown")]
pub extern "C" fn shutdown() {
    crate::shutdown();
}

/// `bool RestartIfNecessary(uint32_t)` — a `true` result obligates the
/// calling process to exit immediately; the vendor has already relaunched
/// the title under the launcher.
#[unsafe(export_name = "RestartIfNecessary")]
pub extern "C" fn restart_if_necessary(app_id: u32) -> bool {
    crate::restart_app_if_necessary(AppId(app_id))
}

/// `bool RestartIfNecessary_Test(void)` — the relaunch check with the
/// reserved invalid-id sentinel, for diagnostics.
#[unsafe(export_name = "RestartIfNecessary_Test")]
pub extern "C" fn restart_if_necessary_test() -> bool {
    crate::restart_app_if_necessary_diagnostic()
}
