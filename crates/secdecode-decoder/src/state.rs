// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The once-per-process decoding gate.
//!
//! A host may run the decode goal several times in one build. The first
//! successful pass stores its [`DecodeReport`]; later passes reuse it without
//! touching the settings file or the cipher. The check and the store happen
//! under one mutex.

use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use secdecode_core::DecodeError;

use crate::decoder::DecodeReport;

static GLOBAL: LazyLock<Arc<DecodeState>> = LazyLock::new(|| Arc::new(DecodeState::new()));

/// Cached result of the first successful decoding pass.
#[derive(Debug, Default)]
pub struct DecodeState {
    report: Mutex<Option<Arc<DecodeReport>>>,
}

impl DecodeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide state shared by hosts that do not inject their own.
    pub fn global() -> Arc<DecodeState> {
        Arc::clone(&GLOBAL)
    }

    pub fn is_processed(&self) -> bool {
        self.lock().is_some()
    }

    /// The cached report, if a pass has completed.
    pub fn report(&self) -> Option<Arc<DecodeReport>> {
        self.lock().clone()
    }

    /// Return the cached report, or run `init` and cache its result.
    ///
    /// The lock is held while `init` runs, so concurrent callers wait for the
    /// first pass instead of starting their own. An `Err` from `init` leaves
    /// the state unprocessed.
    pub fn get_or_try_init<F>(&self, init: F) -> Result<Arc<DecodeReport>, DecodeError>
    where
        F: FnOnce() -> Result<DecodeReport, DecodeError>,
    {
        let mut guard = self.lock();
        if let Some(report) = guard.as_ref() {
            return Ok(Arc::clone(report));
        }
        let report = Arc::new(init()?);
        *guard = Some(Arc::clone(&report));
        Ok(report)
    }

    // A panic inside `init` never stores a partial report, so the cached
    // value is still valid after poisoning.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<DecodeReport>>> {
        self.report.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
