// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Maintenance record status tracking and transition logic.
//!
//! Structurally parallel to the reservation lifecycle, with one
//! deliberate difference: maintenance work cannot be cancelled once it
//! has begun.

use crate::error::DomainError;
use crate::presentation::StatusBadge;
use crate::transition::TransitionRejected;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maintenance record lifecycle states.
///
/// `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatus {
    /// Booked into the workshop calendar
    Scheduled,
    /// Work underway on the vehicle
    InProgress,
    /// Work finished, vehicle released
    Completed,
    /// Called off before work began
    Cancelled,
}

impl MaintenanceStatus {
    /// Returns the string representation of the status.
    ///
    /// This is the wire form used by the remote service.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMaintenanceStatus` if the string is not
    /// a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "SCHEDULED" => Ok(Self::Scheduled),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidMaintenanceStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (cannot transition to another state).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Scheduled → `InProgress` or Cancelled
    /// - `InProgress` → Completed
    ///
    /// Work that has begun must run to completion.
    #[must_use]
    pub const fn can_transition_to(&self, requested: Self) -> bool {
        matches!(
            (self, requested),
            (Self::Scheduled, Self::InProgress | Self::Cancelled)
                | (Self::InProgress, Self::Completed)
        )
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        // Cannot transition from terminal states
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        if self.can_transition_to(new_status) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by maintenance lifecycle rules".to_string(),
            })
        }
    }

    /// Applies a requested transition, yielding the new status.
    ///
    /// # Errors
    ///
    /// Returns `TransitionRejected` if the transition is not allowed.
    pub fn apply_transition(self, requested: Self) -> Result<Self, TransitionRejected<Self>> {
        match self.validate_transition(requested) {
            Ok(()) => Ok(requested),
            Err(violation) => Err(TransitionRejected::new(self, requested, violation)),
        }
    }

    /// Returns the display badge for this status.
    #[must_use]
    pub const fn badge(&self) -> StatusBadge {
        match self {
            Self::Scheduled => StatusBadge::new("Scheduled", "#2563eb"),
            Self::InProgress => StatusBadge::new("In progress", "#d97706"),
            Self::Completed => StatusBadge::new("Completed", "#16a34a"),
            Self::Cancelled => StatusBadge::new("Cancelled", "#6b7280"),
        }
    }
}

impl FromStr for MaintenanceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
