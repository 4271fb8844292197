// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Process-wide immutable reference registry.
//!
//! The expanded boundary table, VSOP87 series and lunar month table are
//! built once on first access and published through a [`OnceLock`]. A
//! racing initializer only ever observes a complete value.

use std::sync::OnceLock;

use super::jeol::JeolBoundaryTable;
use super::lunar::LunarTable;
use super::vsop87::Vsop87Series;

pub(crate) struct Registry {
    jeol: JeolBoundaryTable,
    vsop87: Vsop87Series,
    lunar: LunarTable,
}

impl Registry {
    fn build() -> Self {
        let registry = Self {
            jeol: JeolBoundaryTable::from_embedded(),
            vsop87: Vsop87Series::earth(),
            lunar: LunarTable::from_embedded(),
        };
        tracing::debug!(
            jeol_terms = registry.jeol.len(),
            vsop87_terms = registry.vsop87.term_count(),
            lunar_months = registry.lunar.month_count(),
            "reference registry initialised"
        );
        registry
    }

    pub(crate) fn jeol(&self) -> &JeolBoundaryTable {
        &self.jeol
    }

    pub(crate) fn vsop87(&self) -> &Vsop87Series {
        &self.vsop87
    }

    pub(crate) fn lunar(&self) -> &LunarTable {
        &self.lunar
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The shared registry, building it on first call.
pub(crate) fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::build)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concurrent_first_access_yields_one_instance() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| registry() as *const Registry as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }
}
