// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Park issue reports.

use crate::db::BackendDb;
use crate::error::AppError;
use crate::models::report::REPORT_CATEGORIES;
use crate::models::{ParkReport, ReportStatus};
use crate::services::catalog::ParkCatalog;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use validator::{Validate, ValidationError};

/// Report as submitted from the issue form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReportDraft {
    #[serde(alias = "park")]
    #[validate(length(min = 1, max = 64))]
    pub park_id: String,
    #[validate(custom(function = "validate_category"))]
    pub category: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    if REPORT_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_category"))
    }
}

impl ReportDraft {
    fn normalized(self) -> Self {
        Self {
            park_id: self.park_id.trim().to_string(),
            category: self.category.trim().to_ascii_lowercase(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            email: self
                .email
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
        }
    }
}

/// Largest page of recent reports served at once.
pub const MAX_RECENT_REPORTS: usize = 100;

#[derive(Clone)]
pub struct ReportService {
    db: BackendDb,
    sequence: Arc<AtomicU64>,
}

impl ReportService {
    pub fn new(db: BackendDb) -> Self {
        Self {
            db,
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Validate a report and store it with status `pending`.
    pub async fn submit(
        &self,
        catalog: &ParkCatalog,
        draft: ReportDraft,
        now: DateTime<Utc>,
    ) -> Result<ParkReport, AppError> {
        let draft = draft.normalized();
        draft.validate()?;

        if catalog.find(&draft.park_id).is_none() {
            return Err(AppError::BadRequest(format!(
                "Unknown park: {}",
                draft.park_id
            )));
        }

        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let report = ParkReport {
            id: format!("rpt-{}-{}", now.timestamp_millis(), seq),
            park_id: draft.park_id,
            category: draft.category,
            title: draft.title,
            description: draft.description,
            email: draft.email,
            status: ReportStatus::Pending,
            created_at: now,
        };

        self.db.insert_report(&report).await?;
        tracing::info!(
            report_id = %report.id,
            park_id = %report.park_id,
            category = %report.category,
            "Issue report submitted"
        );

        Ok(report)
    }

    /// Recently submitted reports, newest first.
    ///
    /// Reporter emails are private and never included.
    pub async fn recent(&self, limit: usize) -> Result<Vec<ParkReport>, AppError> {
        let limit = limit.clamp(1, MAX_RECENT_REPORTS);
        let reports = self.db.list_reports(limit).await?;
        Ok(reports
            .into_iter()
            .map(|report| ParkReport {
                email: None,
                ..report
            })
            .collect())
    }
}
