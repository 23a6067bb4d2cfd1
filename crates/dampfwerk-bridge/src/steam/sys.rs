// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raw foreign-function boundary to the vendor runtime, declared once.
//
// The import library is `steam_api64` on 64-bit Windows and `steam_api`
// everywhere else; the vendor's redistributable runtime shim must be on the
// link line as well. The C++ `bool` return is layout-compatible with Rust
// `bool` on every supported target.

#![allow(non_snake_case)]

#[cfg_attr(
    all(target_os = "windows", target_pointer_width = "64"),
    link(name = "steam_api64")
)]
#[cfg_attr(
    not(all(target_os = "windows", target_pointer_width = "64")),
    link(name = "steam_api")
)]
unsafe extern "C" {
    pub fn SteamAPI_Init() -> bool;
    pub fn SteamAPI_Shutdown();
    pub fn SteamAPI_RestartAppIfNecessary(app_id: u32) -> bool;
}
