// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use frota_rent_audit::{EntityKind, TransitionEvent};
use frota_rent_domain::{MaintenanceStatus, ReservationStatus, StatusBadge};

/// A lifecycle status from either status family.
///
/// Reservations and maintenance records move through different lifecycles,
/// but the engine reports both through the same transition result. This
/// wrapper keeps the typed status available to callers that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusValue {
    /// A reservation lifecycle status.
    Reservation(ReservationStatus),
    /// A maintenance lifecycle status.
    Maintenance(MaintenanceStatus),
}

impl StatusValue {
    /// Returns the canonical string form of the wrapped status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reservation(status) => status.as_str(),
            Self::Maintenance(status) => status.as_str(),
        }
    }

    /// Returns true if the wrapped status accepts no further transitions.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        match self {
            Self::Reservation(status) => status.is_terminal(),
            Self::Maintenance(status) => status.is_terminal(),
        }
    }

    /// Returns the presentation badge for the wrapped status.
    #[must_use]
    pub const fn badge(&self) -> StatusBadge {
        match self {
            Self::Reservation(status) => status.badge(),
            Self::Maintenance(status) => status.badge(),
        }
    }

    /// Returns the kind of entity this status belongs to.
    #[must_use]
    pub const fn entity_kind(&self) -> EntityKind {
        match self {
            Self::Reservation(_) => EntityKind::Reservation,
            Self::Maintenance(_) => EntityKind::Maintenance,
        }
    }
}

impl std::fmt::Display for StatusValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The result of a successful lifecycle transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The status before the transition.
    pub previous: StatusValue,
    /// The status after the transition.
    pub current: StatusValue,
    /// The audit event recording this transition.
    pub event: TransitionEvent,
}
