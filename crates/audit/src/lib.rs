// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

/// The kind of entity performing a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    /// A customer acting on their own reservation.
    Customer,
    /// A rental-desk or workshop agent.
    Agent,
    /// An automated process.
    System,
}

impl ActorKind {
    /// Returns the string representation of the actor kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Agent => "agent",
            Self::System => "system",
        }
    }
}

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The kind of actor.
    pub kind: ActorKind,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `kind` - The kind of actor
    #[must_use]
    pub const fn new(id: String, kind: ActorKind) -> Self {
        Self { id, kind }
    }
}

/// Represents the reason or trigger for an action.
///
/// A cause describes why a status change was initiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID, event ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this action
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// The kind of entity whose status changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A vehicle reservation.
    Reservation,
    /// A maintenance record.
    Maintenance,
}

impl EntityKind {
    /// Returns the string representation of the entity kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reservation => "reservation",
            Self::Maintenance => "maintenance",
        }
    }
}

/// A reference to the entity whose status changed.
///
/// The entity itself lives with the remote collaborator; only its kind
/// and identifier are recorded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    /// The kind of entity.
    pub kind: EntityKind,
    /// The entity's identifier with the remote collaborator.
    pub id: String,
}

impl EntityRef {
    /// Creates a new `EntityRef`.
    ///
    /// # Arguments
    ///
    /// * `kind` - The kind of entity
    /// * `id` - The entity's identifier
    #[must_use]
    pub const fn new(kind: EntityKind, id: String) -> Self {
        Self { kind, id }
    }
}

/// An immutable record of an accepted status transition.
///
/// Every accepted transition produces exactly one event. Events are
/// immutable once created and capture:
/// - Who requested the change (actor)
/// - Why it was requested (cause)
/// - Which entity changed (entity)
/// - The status before and after the transition
///
/// Persisting the event is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEvent {
    /// The actor who initiated this status change.
    pub actor: Actor,
    /// The cause or reason for this status change.
    pub cause: Cause,
    /// The entity whose status changed.
    pub entity: EntityRef,
    /// The status before the transition, in wire form.
    pub previous: String,
    /// The status after the transition, in wire form.
    pub current: String,
}

impl TransitionEvent {
    /// Creates a new `TransitionEvent`.
    ///
    /// Once created, an event is immutable.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `entity` - The entity whose status changed
    /// * `previous` - The status before the transition
    /// * `current` - The status after the transition
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        entity: EntityRef,
        previous: String,
        current: String,
    ) -> Self {
        Self {
            actor,
            cause,
            entity,
            previous,
            current,
        }
    }
}
