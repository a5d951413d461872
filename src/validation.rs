//! ABN check-digit validation
//!
//! Reference: https://abr.business.gov.au/Help/AbnFormat
//!
//! 1. Subtract 1 from the first (left-most) digit.
//! 2. Multiply each digit by its weighting factor.
//! 3. Sum the products.
//! 4. The ABN is valid when the sum is divisible by 89.

use crate::messages::MessageKey;

pub const ABN_LENGTH: usize = 11;

const ABN_WEIGHTS: [i32; ABN_LENGTH] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
const ABN_MODULUS: i32 = 89;

/// Why a candidate ABN was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Not exactly 11 characters
    InvalidLength,
    /// 11 characters, but not all ASCII digits
    InvalidFormat,
    /// Well-formed, but the weighted sum is not a multiple of 89
    Invalid,
}

impl ValidationFailure {
    /// Catalog entry carrying the wording for this failure
    pub fn key(self) -> MessageKey {
        match self {
            Self::InvalidLength => MessageKey::AbnInvalidLength,
            Self::InvalidFormat => MessageKey::AbnInvalidFormat,
            Self::Invalid => MessageKey::AbnInvalid,
        }
    }
}

/// Validate `candidate` as an ABN
pub fn validate(candidate: &str) -> Result<(), ValidationFailure> {
    if candidate.chars().count() != ABN_LENGTH {
        return Err(ValidationFailure::InvalidLength);
    }

    let mut digits = [0i32; ABN_LENGTH];
    for (slot, c) in digits.iter_mut().zip(candidate.chars()) {
        *slot = match c.to_digit(10) {
            Some(d) => d as i32,
            None => return Err(ValidationFailure::InvalidFormat),
        };
    }

    // first digit may become -1, so the sum can be negative
    digits[0] -= 1;

    let sum: i32 = digits
        .iter()
        .zip(ABN_WEIGHTS.iter())
        .map(|(digit, weight)| digit * weight)
        .sum();

    if sum % ABN_MODULUS != 0 {
        return Err(ValidationFailure::Invalid);
    }

    Ok(())
}

pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_abns() {
        let valid = vec![
            // publicly listed ABNs
            "51824753556",
            "53004085616",
            "33102417032",
        ];
        for abn in valid {
            assert_eq!(validate(abn), Ok(()), "{abn} should be valid");
        }
    }

    #[test]
    fn test_invalid_length() {
        for abn in ["", "5", "5182475355", "518247535561", "51 824 753 556"] {
            assert_eq!(validate(abn), Err(ValidationFailure::InvalidLength), "{abn}");
        }
    }

    #[test]
    fn test_invalid_format() {
        for abn in ["5182475355a", "abcdefghijk", "-1824753556", "5182475355 ", "51824753.56"] {
            assert_eq!(validate(abn), Err(ValidationFailure::InvalidFormat), "{abn}");
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 11 chars, 12 bytes
        assert_eq!(
            validate("5182475355é"),
            Err(ValidationFailure::InvalidFormat)
        );
        // non-ASCII digits are not decimal digits for this scheme
        assert_eq!(
            validate("5182475355٦"),
            Err(ValidationFailure::InvalidFormat)
        );
    }

    #[test]
    fn test_checksum_mismatch() {
        assert_eq!(validate("51824753557"), Err(ValidationFailure::Invalid));
        assert_eq!(validate("52824753556"), Err(ValidationFailure::Invalid));
        assert_eq!(validate("12345678901"), Err(ValidationFailure::Invalid));
    }

    #[test]
    fn test_negative_sum_is_rejected() {
        // leading zero makes the sum -10; a `> 0` remainder check would accept it
        assert_eq!(validate("00000000000"), Err(ValidationFailure::Invalid));
        assert_eq!(validate("01000000000"), Err(ValidationFailure::Invalid));
    }

    #[test]
    fn test_failure_keys() {
        assert_eq!(
            ValidationFailure::InvalidLength.key(),
            MessageKey::AbnInvalidLength
        );
        assert_eq!(
            ValidationFailure::InvalidFormat.key(),
            MessageKey::AbnInvalidFormat
        );
        assert_eq!(ValidationFailure::Invalid.key(), MessageKey::AbnInvalid);
    }
}
