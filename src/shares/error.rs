// SPDX-License-Identifier: CC0-1.0

/// Input rejected by `split` or `combine` before any field arithmetic or randomness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The secret has no bytes
    EmptySecret,
    /// Requested number of shares is outside 2..=255
    ShareCountOutOfRange(usize),
    /// Requested threshold is outside 2..=255
    ThresholdOutOfRange(usize),
    /// Threshold is larger than the number of shares
    ThresholdExceedsShares {
        /// Requested threshold
        threshold: usize,
        /// Requested number of shares
        shares: usize,
    },
    /// A share identifier is zero, which would put the secret itself in the share
    ZeroIdentifier,
    /// The same share identifier appears more than once
    DuplicateIdentifier(u8),
    /// Number of shares to combine is outside 2..=255
    ShareSetSizeOutOfRange(usize),
    /// A share is shorter than one data byte plus its identifier
    ShareTooShort {
        /// Position of the share in the input
        index: usize,
        /// Its length in bytes
        len: usize,
    },
    /// A share's length differs from the first share's
    ShareLengthMismatch {
        /// Position of the share in the input
        index: usize,
        /// Length of the first share
        expected: usize,
        /// Length of this share
        found: usize,
    },
}

/// Broad class of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A count or threshold is outside its permitted range
    Range,
    /// The secret, a share, or the identifiers are malformed
    Shape,
}

impl Error {
    /// Returns the class of this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ShareCountOutOfRange(_)
            | Self::ThresholdOutOfRange(_)
            | Self::ThresholdExceedsShares { .. }
            | Self::ShareSetSizeOutOfRange(_) => ErrorKind::Range,
            Self::EmptySecret
            | Self::ZeroIdentifier
            | Self::DuplicateIdentifier(_)
            | Self::ShareTooShort { .. }
            | Self::ShareLengthMismatch { .. } => ErrorKind::Shape,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::EmptySecret => write!(f, "secret cannot be empty"),
            Self::ShareCountOutOfRange(n) => {
                write!(f, "shares must be between 2 and 255, got {n}")
            }
            Self::ThresholdOutOfRange(t) => {
                write!(f, "threshold must be between 2 and 255, got {t}")
            }
            Self::ThresholdExceedsShares { threshold, shares } => write!(
                f,
                "threshold ({threshold}) cannot be greater than number of shares ({shares})"
            ),
            Self::ZeroIdentifier => write!(f, "share identifiers cannot be zero"),
            Self::DuplicateIdentifier(id) => write!(f, "duplicate share identifier {id}"),
            Self::ShareSetSizeOutOfRange(n) => {
                write!(f, "must combine between 2 and 255 shares, got {n}")
            }
            Self::ShareTooShort { index, len } => {
                write!(f, "share {index} must be at least 2 bytes, got {len}")
            }
            Self::ShareLengthMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "all shares must have the same length: share {index} has {found} bytes, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::EmptySecret.kind(), ErrorKind::Shape);
        assert_eq!(Error::ShareCountOutOfRange(1).kind(), ErrorKind::Range);
        assert_eq!(
            Error::ThresholdExceedsShares {
                threshold: 4,
                shares: 3
            }
            .kind(),
            ErrorKind::Range
        );
        assert_eq!(Error::DuplicateIdentifier(7).kind(), ErrorKind::Shape);
        assert_eq!(
            Error::ShareLengthMismatch {
                index: 1,
                expected: 3,
                found: 2
            }
            .kind(),
            ErrorKind::Shape
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::ThresholdExceedsShares {
                threshold: 4,
                shares: 3
            }
            .to_string(),
            "threshold (4) cannot be greater than number of shares (3)"
        );
        assert_eq!(
            Error::DuplicateIdentifier(9).to_string(),
            "duplicate share identifier 9"
        );
    }
}
