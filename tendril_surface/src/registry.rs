// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle → manipulator table for hosts with several interactive surfaces.

use alloc::vec::Vec;

use tendril_gestures::GestureConfig;
use tendril_zoom::ZoomConfig;

use crate::manipulator::Manipulator;

/// A flat table of manipulators keyed by a host-chosen handle.
///
/// Surfaces come and go with the host's layout, so the registry supports
/// explicit insertion and removal rather than implicit creation on lookup.
/// Counts are small (one entry per interactive surface on screen), so the
/// table is a plain vector scanned linearly.
#[derive(Clone, Debug, Default)]
pub struct ManipulatorRegistry<K: Copy + PartialEq> {
    entries: Vec<(K, Manipulator)>,
}

impl<K: Copy + PartialEq> ManipulatorRegistry<K> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a manipulator under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: K, manipulator: Manipulator) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, m)) => *m = manipulator,
            None => self.entries.push((key, manipulator)),
        }
    }

    /// Look up `key`, creating a fresh manipulator from the configurations if
    /// absent, and return it mutably.
    pub fn ensure(
        &mut self,
        key: K,
        gestures: GestureConfig,
        zoom: ZoomConfig,
    ) -> &mut Manipulator {
        let idx = match self.entries.iter().position(|(k, _)| *k == key) {
            Some(idx) => idx,
            None => {
                self.entries.push((key, Manipulator::new(gestures, zoom)));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Look up `key` without creating.
    pub fn get_mut(&mut self, key: K) -> Option<&mut Manipulator> {
        self.entries
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, m)| m)
    }

    /// Remove the entry for `key`, returning it if present. Any inertia it
    /// was running dies with it.
    pub fn remove(&mut self, key: K) -> Option<Manipulator> {
        let idx = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Number of registered surfaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no surfaces are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
