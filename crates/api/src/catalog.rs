//! Read-only job catalog backing the listing routes.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use topskyll_core::currency::{CurrencyError, CurrencyTable};
use topskyll_core::salary::{HasSalary, SalaryRange, StoredSalary, with_default_currency};
use topskyll_shared::{AppError, AppResult};
use uuid::Uuid;

/// Job record as persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredJob {
    /// Job identifier.
    pub id: Uuid,
    /// Job title.
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Work location, if stated.
    #[serde(default)]
    pub location: Option<String>,
    /// Salary fields, possibly without a currency.
    #[serde(flatten)]
    pub salary: StoredSalary,
    /// Publication time.
    pub posted_at: DateTime<Utc>,
}

/// Job with a validated salary range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    /// Job identifier.
    pub id: Uuid,
    /// Job title.
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Work location, if stated.
    pub location: Option<String>,
    /// Salary in the job's own currency.
    pub salary: SalaryRange,
    /// Publication time.
    pub posted_at: DateTime<Utc>,
}

impl HasSalary for JobListing {
    fn salary(&self) -> &SalaryRange {
        &self.salary
    }
}

/// In-memory job catalog, fixed after construction.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    jobs: Vec<JobListing>,
}

impl JobCatalog {
    /// Builds a catalog from stored records.
    ///
    /// Records without a currency get the table's base currency. Records with
    /// negative amounts or currencies missing from the table are rejected.
    pub fn from_stored(table: &CurrencyTable, stored: Vec<StoredJob>) -> Result<Self, CurrencyError> {
        let mut jobs = Vec::with_capacity(stored.len());
        for record in stored {
            let salary = with_default_currency(record.salary, table.base());
            salary.validate()?;
            table.get(salary.salary_currency)?;

            jobs.push(JobListing {
                id: record.id,
                title: record.title,
                company: record.company,
                location: record.location,
                salary,
                posted_at: record.posted_at,
            });
        }
        Ok(Self { jobs })
    }

    /// Parses a JSON array of stored jobs.
    pub fn from_json(table: &CurrencyTable, json: &str) -> AppResult<Self> {
        let stored: Vec<StoredJob> = serde_json::from_str(json)
            .map_err(|e| AppError::Internal(format!("Invalid job catalog: {e}")))?;
        Ok(Self::from_stored(table, stored)?)
    }

    /// All jobs in catalog order.
    pub fn list(&self) -> &[JobListing] {
        &self.jobs
    }

    /// Finds a job by id.
    pub fn get(&self, id: Uuid) -> Option<&JobListing> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns true if the catalog has no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
