// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definition for the native runtime.
//
// The trait exposes exactly the operations the C surface exports. Builds
// without the vendor runtime get a stub implementation that keeps every
// call safe to make.

use dampfwerk_core::error::Result;
use dampfwerk_core::types::AppId;

/// The native platform runtime behind the exported C surface.
///
/// All real state lives inside the vendor SDK's process-wide singleton; an
/// implementation holds nothing of its own. The vendor's ordering contract
/// (init before use, shutdown before exit) is the caller's responsibility —
/// the bridge enforces no ordering itself.
pub trait PlatformRuntime {
    /// Human-readable runtime name (e.g. "Steamworks").
    fn runtime_name(&self) -> &str;

    /// Start the vendor runtime singleton.
    ///
    /// Fails if the runtime is absent, the development app-id file is
    /// missing, or the process was not started through the launcher.
    fn init(&self) -> Result<()>;

    /// Release the vendor runtime singleton. Must be safe to call without a
    /// prior successful `init`.
    fn shutdown(&self);

    /// Ask the vendor whether the title must be relaunched under the
    /// launcher. A `true` result means the vendor has already relaunched
    /// the title and the calling process must exit immediately.
    fn restart_app_if_necessary(&self, app_id: AppId) -> bool;
}
