// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation status tracking and transition logic.
//!
//! This module defines the reservation lifecycle states and the legal
//! transitions between them. Transitions are caller-initiated; the
//! system never advances a reservation based on time alone.

use crate::error::DomainError;
use crate::presentation::StatusBadge;
use crate::transition::TransitionRejected;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reservation lifecycle states.
///
/// Exactly one status applies to a reservation at any time. `Completed`
/// and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Created by a customer, awaiting agent confirmation
    Pending,
    /// Confirmed by an agent, awaiting vehicle pickup
    Confirmed,
    /// Vehicle picked up, rental underway
    InProgress,
    /// Vehicle returned, reservation closed
    Completed,
    /// Called off before completion
    Cancelled,
}

impl ReservationStatus {
    /// Returns the string representation of the status.
    ///
    /// This is the wire form used by the remote service.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidReservationStatus` if the string is not
    /// a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidReservationStatus {
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
    /// - Pending → Confirmed or Cancelled
    /// - Confirmed → `InProgress` or Cancelled
    /// - `InProgress` → Completed or Cancelled
    ///
    /// Self-transitions are never valid.
    #[must_use]
    pub const fn can_transition_to(&self, requested: Self) -> bool {
        matches!(
            (self, requested),
            (Self::Pending, Self::Confirmed | Self::Cancelled)
                | (Self::Confirmed, Self::InProgress | Self::Cancelled)
                | (Self::InProgress, Self::Completed | Self::Cancelled)
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
                reason: "transition not permitted by reservation lifecycle rules".to_string(),
            })
        }
    }

    /// Applies a requested transition, yielding the new status.
    ///
    /// Total over all inputs: an illegal request comes back as a
    /// [`TransitionRejected`] carrying the unchanged current status, never
    /// a panic.
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
            Self::Pending => StatusBadge::new("Pending", "#d97706"),
            Self::Confirmed => StatusBadge::new("Confirmed", "#2563eb"),
            Self::InProgress => StatusBadge::new("In progress", "#7c3aed"),
            Self::Completed => StatusBadge::new("Completed", "#16a34a"),
            Self::Cancelled => StatusBadge::new("Cancelled", "#dc2626"),
        }
    }
}

impl FromStr for ReservationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
