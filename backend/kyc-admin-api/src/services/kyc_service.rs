// KYC service - submission review queries and state changes
use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{CreateHistoryEntry, KycStatus, KycSubmissionDetail, KycSubmissionSummary};

pub struct KycService {
    db: Database,
}

impl KycService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List submissions, newest first, optionally filtered by status.
    pub async fn list_submissions(
        &self,
        status: Option<KycStatus>,
    ) -> Result<Vec<KycSubmissionSummary>> {
        let submissions: Vec<KycSubmissionSummary> = sqlx::query_as(
            r#"
            SELECT s.id, s.user_id, s.status, s.submitted_at,
                   p.fullname, p.pseudo
            FROM livreur_kyc_submissions s
            LEFT JOIN user_profiles p ON p.user_id = s.user_id
            WHERE $1::text IS NULL OR s.status = $1
            ORDER BY s.submitted_at DESC
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.db.pg)
        .await?;

        Ok(submissions)
    }

    /// Fetch one submission with the applicant profile.
    pub async fn get_submission(&self, id: Uuid) -> Result<KycSubmissionDetail> {
        let submission: Option<KycSubmissionDetail> = sqlx::query_as(
            r#"
            SELECT s.id, s.user_id, s.status, s.id_document_path, s.selfie_path,
                   s.submitted_at, s.reviewed_at, s.reviewer_id,
                   p.fullname, p.phone
            FROM livreur_kyc_submissions s
            LEFT JOIN user_profiles p ON p.user_id = s.user_id
            WHERE s.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db.pg)
        .await?;

        submission.ok_or_else(|| AppError::NotFound(format!("KYC submission {} not found", id)))
    }

    /// Mark a submission approved and return the applicant's user id.
    ///
    /// The history insert is best-effort: a failure there is logged and
    /// never fails the approval itself.
    pub async fn approve_submission(
        &self,
        id: Uuid,
        reviewer_id: Option<Uuid>,
    ) -> Result<Uuid> {
        let updated: Option<(Uuid,)> = sqlx::query_as(
            r#"
            UPDATE livreur_kyc_submissions
            SET status = $2, reviewed_at = $3, reviewer_id = $4
            WHERE id = $1
            RETURNING user_id
            "#,
        )
        .bind(id)
        .bind(KycStatus::Approved.as_str())
        .bind(Utc::now())
        .bind(reviewer_id)
        .fetch_optional(&self.db.pg)
        .await?;

        let (user_id,) = updated
            .ok_or_else(|| AppError::NotFound(format!("KYC submission {} not found", id)))?;

        let entry = CreateHistoryEntry {
            submission_id: id,
            action: KycStatus::Approved.as_str().to_string(),
            actor_id: reviewer_id,
        };
        if let Err(e) = self.record_history(&entry).await {
            warn!("History insert failed for submission {}: {}", id, e);
        }

        Ok(user_id)
    }

    async fn record_history(&self, entry: &CreateHistoryEntry) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO livreur_kyc_history (submission_id, action, actor_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(entry.submission_id)
        .bind(&entry.action)
        .bind(entry.actor_id)
        .execute(&self.db.pg)
        .await?;

        Ok(())
    }
}
