//! Size differences against a stored baseline

use std::fmt;

/// Change of one artifact/compressor size relative to a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delta {
    /// Smaller than the baseline by this many bytes
    Shrunk(u64),
    /// Larger than the baseline by this many bytes
    Grown(u64),
    /// Same size as the baseline
    Unchanged,
    /// The label has no size for this artifact/compressor
    NoBaseline,
}

impl Delta {
    /// Compare a fresh size to an optional stored one
    pub fn between(fresh: u64, stored: Option<u64>) -> Self {
        match stored {
            None => Self::NoBaseline,
            Some(stored) if fresh < stored => Self::Shrunk(stored - fresh),
            Some(stored) if fresh > stored => Self::Grown(fresh - stored),
            Some(_) => Self::Unchanged,
        }
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shrunk(n) => f.pad(&format!("-{}", n)),
            Self::Grown(n) => f.pad(&format!("+{}", n)),
            Self::Unchanged => f.pad("="),
            Self::NoBaseline => f.pad("?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_convention() {
        assert_eq!(Delta::between(80, Some(100)).to_string(), "-20");
        assert_eq!(Delta::between(120, Some(100)).to_string(), "+20");
        assert_eq!(Delta::between(100, Some(100)).to_string(), "=");
        assert_eq!(Delta::between(100, None).to_string(), "?");
    }

    #[test]
    fn display_honours_width() {
        assert_eq!(format!("{:>5}", Delta::Grown(7)), "   +7");
        assert_eq!(format!("{:>3}", Delta::Unchanged), "  =");
    }

    #[test]
    fn zero_baseline_is_a_baseline() {
        assert_eq!(Delta::between(50, Some(0)), Delta::Grown(50));
        assert_eq!(Delta::between(0, Some(0)), Delta::Unchanged);
    }
}
