use crate::guard::ConfirmationTag;
use std::fmt;

/// Operation to act on confirmations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Allow confirmation.
    Allow,
    /// Decline or cancel confirmation.
    Cancel,
}

impl Operation {
    /// The tag the confirmation key for this operation is generated with.
    pub fn tag(&self) -> ConfirmationTag {
        match self {
            Self::Allow => ConfirmationTag::Allow,
            Self::Cancel => ConfirmationTag::Cancel,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}
