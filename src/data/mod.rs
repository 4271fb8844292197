// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Build-time embedded reference datasets.
//!
//! Both tables are plain `const` arrays; the [`registry`](crate::registry)
//! expands them into searchable form on first use.

pub(crate) mod jeol_table;
pub(crate) mod lunar_table;
