// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared rejection value for refused status changes.

use crate::error::DomainError;

/// A refused status change.
///
/// Carries the status the entity remains in alongside the requested
/// status, so callers can surface the failure without re-reading state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRejected<S> {
    /// The unchanged current status.
    pub current: S,
    /// The status that was requested.
    pub requested: S,
    /// The rule violation behind the refusal.
    pub violation: DomainError,
}

impl<S> TransitionRejected<S> {
    /// Creates a new rejection.
    #[must_use]
    pub const fn new(current: S, requested: S, violation: DomainError) -> Self {
        Self {
            current,
            requested,
            violation,
        }
    }
}

impl<S> std::fmt::Display for TransitionRejected<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.violation)
    }
}

impl<S: std::fmt::Debug> std::error::Error for TransitionRejected<S> {}
