use serde::{Deserialize, Serialize};

/// Approval workflow state of an order document, using the backend's
/// integer codes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for ApprovalStatus {
    fn default() -> Self {
        ApprovalStatus::Pending
    }
}

impl From<ApprovalStatus> for u8 {
    fn from(status: ApprovalStatus) -> u8 {
        match status {
            ApprovalStatus::Pending => 0,
            ApprovalStatus::Approved => 1,
            ApprovalStatus::Rejected => 2,
        }
    }
}

impl TryFrom<u8> for ApprovalStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ApprovalStatus::Pending),
            1 => Ok(ApprovalStatus::Approved),
            2 => Ok(ApprovalStatus::Rejected),
            other => Err(format!("Invalid approval status code: {}", other)),
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalStatus::Pending => write!(f, "pending"),
            ApprovalStatus::Approved => write!(f, "approved"),
            ApprovalStatus::Rejected => write!(f, "rejected"),
        }
    }
}
