// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! National identity number validation and formatting.
//!
//! An identity number is eleven digits: nine base digits followed by two
//! check digits, each derived from a weighted sum of the digits before
//! it. Validation is deterministic arithmetic; no registry lookup is
//! performed. Input arrives as free-form text with optional `.` and `-`
//! separators.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of digits in a complete identity number.
const IDENTITY_DIGITS: usize = 11;

/// Strips every non-digit character from the input, preserving digit order.
#[must_use]
pub fn normalize_identity(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Checks whether the input is a valid identity number.
///
/// Accepts free-form text; separators are stripped before validation.
/// Malformed input simply yields `false`, never a panic.
#[must_use]
pub fn is_valid_identity(raw: &str) -> bool {
    IdentityNumber::parse(raw).is_ok()
}

/// Formats identity digits with display separators as the user types.
///
/// Produces `ddd`, `ddd.ddd`, `ddd.ddd.ddd`, then `ddd.ddd.ddd-dd`
/// depending on how many digits are present. Non-digit characters are
/// dropped and digits beyond the eleventh are ignored, so the output
/// never exceeds fourteen characters.
#[must_use]
pub fn format_identity(raw: &str) -> String {
    let digits = normalize_identity(raw);
    let mut out = String::with_capacity(14);

    for (index, digit) in digits.chars().take(IDENTITY_DIGITS).enumerate() {
        match index {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(digit);
    }

    out
}

/// Computes a check digit over `digits` with descending weights starting
/// at `first_weight`.
///
/// The weighted sum is multiplied by ten and reduced modulo eleven;
/// remainders of ten or eleven map to zero.
fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    let remainder = (sum * 10) % 11;
    if remainder > 9 { 0 } else { remainder }
}

/// A validated identity number.
///
/// Stores the normalized eleven-digit form. Construction goes through
/// [`IdentityNumber::parse`], so an instance always satisfies the length,
/// repeated-digit, and checksum rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityNumber {
    /// The normalized digits (exactly 11 characters).
    digits: String,
}

impl IdentityNumber {
    /// Parses and validates free-form identity input.
    ///
    /// # Arguments
    ///
    /// * `raw` - Free-form text, digits optionally interspersed with
    ///   separators
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IdentityLength` if the input does not contain
    /// exactly eleven digits, `DomainError::IdentityRepeatedDigits` if all
    /// digits are identical, and `DomainError::IdentityChecksum` if either
    /// check digit does not match its computed value.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = normalize_identity(raw);
        if normalized.len() != IDENTITY_DIGITS {
            return Err(DomainError::IdentityLength {
                len: normalized.len(),
            });
        }

        // normalize() keeps ASCII digits only, so the subtraction is safe
        let digits: Vec<u32> = normalized.bytes().map(|b| u32::from(b - b'0')).collect();

        let first = digits[0];
        if digits.iter().all(|&d| d == first) {
            return Err(DomainError::IdentityRepeatedDigits);
        }

        if check_digit(&digits[..9], 10) != digits[9]
            || check_digit(&digits[..10], 11) != digits[10]
        {
            return Err(DomainError::IdentityChecksum);
        }

        Ok(Self { digits: normalized })
    }

    /// Returns the normalized eleven-digit form.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.digits
    }

    /// Returns the grouped display form (`ddd.ddd.ddd-dd`).
    #[must_use]
    pub fn formatted(&self) -> String {
        format_identity(&self.digits)
    }
}

impl std::fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
