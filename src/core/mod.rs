// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core data model.
//!
//! ```text
//!              core
//!               |
//!       +-------+-------+
//!       |               |
//!       v               v
//!      env          platform
//!       |               |
//!   Env PathList    OsFamily CpuProbe
//!   key_map         Platform
//! ```

pub mod env;
pub mod platform;
