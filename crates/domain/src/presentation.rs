// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display metadata for status values.
//!
//! Each status enumeration exposes exactly one badge table. Screens
//! consume these tables instead of mapping status to label or color
//! locally, so the lifecycle vocabulary stays authoritative.

/// The label and color shown for a single status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    /// Human-facing label.
    pub label: &'static str,
    /// Hex color in `#rrggbb` form.
    pub color: &'static str,
}

impl StatusBadge {
    /// Creates a new badge.
    #[must_use]
    pub const fn new(label: &'static str, color: &'static str) -> Self {
        Self { label, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_fields() {
        let badge = StatusBadge::new("Pending", "#d97706");
        assert_eq!(badge.label, "Pending");
        assert_eq!(badge.color, "#d97706");
    }
}
