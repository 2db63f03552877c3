use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Review status of a KYC submission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    /// Submitted, awaiting review
    Pending,
    /// Approved by an admin
    Approved,
    /// Rejected by an admin
    Rejected,
}

impl KycStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::Pending => "pending",
            KycStatus::Approved => "approved",
            KycStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(KycStatus::Pending),
            "approved" => Some(KycStatus::Approved),
            "rejected" => Some(KycStatus::Rejected),
            _ => None,
        }
    }
}

/// Submission summary for list views, joined with the applicant profile
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KycSubmissionSummary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    pub fullname: Option<String>,
    pub pseudo: Option<String>,
}

/// Full submission details for the review screen
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KycSubmissionDetail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: String,

    /// Storage paths of the uploaded documents
    pub id_document_path: Option<String>,
    pub selfie_path: Option<String>,

    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewer_id: Option<Uuid>,

    pub fullname: Option<String>,
    pub phone: Option<String>,
}

/// Review-history entry recorded alongside each decision
#[derive(Debug, Clone)]
pub struct CreateHistoryEntry {
    pub submission_id: Uuid,
    pub action: String,
    pub actor_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_wire_strings() {
        for status in [KycStatus::Pending, KycStatus::Approved, KycStatus::Rejected] {
            assert_eq!(KycStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_does_not_parse() {
        assert_eq!(KycStatus::parse("archived"), None);
        assert_eq!(KycStatus::parse(""), None);
        assert_eq!(KycStatus::parse("Approved"), None);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&KycStatus::Approved).unwrap();
        assert_eq!(json, r#""approved""#);
    }
}
