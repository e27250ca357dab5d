//! Behavioral feature vector for one user.
//!
//! Profiles arrive from external sources as loosely-typed documents
//! (`RawFeatureVector`). Validation turns them into a `FeatureVector` whose
//! fields are all present and semantically valid, so nothing downstream has
//! to re-check them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::domain::foundation::{Percentage, ValidationError};

/// Industry category a user works in (e.g. "Data Analytics").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Industry(String);

impl Industry {
    /// Creates an industry label, rejecting blank values.
    pub fn new(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("industry"));
        }
        Ok(Self(label))
    }

    /// Returns the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Industry {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Industry> for String {
    fn from(industry: Industry) -> Self {
        industry.0
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated behavioral signals describing one user at a point in time.
///
/// # Invariants
///
/// - Every count is non-negative
/// - `profile_completeness` is within 0-100
/// - `industry` is non-blank
///
/// Immutable once loaded; a session replaces it wholesale when another user
/// is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub cv_refresh_count: u32,
    pub days_since_last_refresh: u32,
    pub profile_completeness: Percentage,
    pub emp_cv_views_last_week: u32,
    pub applications_count: u32,
    pub unique_jobs_applied: u32,
    pub login_count: u32,
    pub unique_skills_added: u32,
    pub job_searches: u32,
    pub industry: Industry,
}

impl FeatureVector {
    /// Template variables bound from the feature fields, keyed by field name.
    pub fn variables(&self) -> Vec<(&'static str, String)> {
        vec![
            ("cv_refresh_count", self.cv_refresh_count.to_string()),
            (
                "days_since_last_refresh",
                self.days_since_last_refresh.to_string(),
            ),
            (
                "profile_completeness",
                self.profile_completeness.value().to_string(),
            ),
            (
                "emp_cv_views_last_week",
                self.emp_cv_views_last_week.to_string(),
            ),
            ("applications_count", self.applications_count.to_string()),
            ("unique_jobs_applied", self.unique_jobs_applied.to_string()),
            ("login_count", self.login_count.to_string()),
            ("unique_skills_added", self.unique_skills_added.to_string()),
            ("job_searches", self.job_searches.to_string()),
            ("industry", self.industry.to_string()),
        ]
    }
}

/// Unvalidated feature document as delivered by a profile source.
///
/// Each field is kept as a raw JSON value so validation can report exactly
/// which field is missing or malformed instead of failing the whole parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFeatureVector {
    #[serde(default)]
    pub cv_refresh_count: Option<Value>,
    #[serde(default)]
    pub days_since_last_refresh: Option<Value>,
    #[serde(default)]
    pub profile_completeness: Option<Value>,
    #[serde(default)]
    pub emp_cv_views_last_week: Option<Value>,
    #[serde(default)]
    pub applications_count: Option<Value>,
    #[serde(default)]
    pub unique_jobs_applied: Option<Value>,
    #[serde(default)]
    pub login_count: Option<Value>,
    #[serde(default)]
    pub unique_skills_added: Option<Value>,
    #[serde(default)]
    pub job_searches: Option<Value>,
    #[serde(default)]
    pub industry: Option<Value>,
}

impl RawFeatureVector {
    /// Validates every field, failing on the first absent or malformed one.
    pub fn validate(&self) -> Result<FeatureVector, ValidationError> {
        Ok(FeatureVector {
            cv_refresh_count: count("cv_refresh_count", &self.cv_refresh_count)?,
            days_since_last_refresh: count(
                "days_since_last_refresh",
                &self.days_since_last_refresh,
            )?,
            profile_completeness: completeness(&self.profile_completeness)?,
            emp_cv_views_last_week: count("emp_cv_views_last_week", &self.emp_cv_views_last_week)?,
            applications_count: count("applications_count", &self.applications_count)?,
            unique_jobs_applied: count("unique_jobs_applied", &self.unique_jobs_applied)?,
            login_count: count("login_count", &self.login_count)?,
            unique_skills_added: count("unique_skills_added", &self.unique_skills_added)?,
            job_searches: count("job_searches", &self.job_searches)?,
            industry: industry(&self.industry)?,
        })
    }
}

impl From<&FeatureVector> for RawFeatureVector {
    fn from(features: &FeatureVector) -> Self {
        Self {
            cv_refresh_count: Some(features.cv_refresh_count.into()),
            days_since_last_refresh: Some(features.days_since_last_refresh.into()),
            profile_completeness: Some(features.profile_completeness.value().into()),
            emp_cv_views_last_week: Some(features.emp_cv_views_last_week.into()),
            applications_count: Some(features.applications_count.into()),
            unique_jobs_applied: Some(features.unique_jobs_applied.into()),
            login_count: Some(features.login_count.into()),
            unique_skills_added: Some(features.unique_skills_added.into()),
            job_searches: Some(features.job_searches.into()),
            industry: Some(Value::String(features.industry.to_string())),
        }
    }
}

fn integer(field: &str, value: &Option<Value>) -> Result<i64, ValidationError> {
    let value = value
        .as_ref()
        .filter(|v| !v.is_null())
        .ok_or_else(|| ValidationError::empty_field(field))?;
    value
        .as_i64()
        .ok_or_else(|| ValidationError::invalid_format(field, format!("expected an integer, got {}", value)))
}

fn count(field: &str, value: &Option<Value>) -> Result<u32, ValidationError> {
    let n = integer(field, value)?;
    u32::try_from(n).map_err(|_| ValidationError::out_of_range(field, 0, i64::from(u32::MAX), n))
}

fn completeness(value: &Option<Value>) -> Result<Percentage, ValidationError> {
    let n = integer("profile_completeness", value)?;
    Percentage::try_new(n)
        .map_err(|_| ValidationError::out_of_range("profile_completeness", 0, 100, n))
}

fn industry(value: &Option<Value>) -> Result<Industry, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::empty_field("industry")),
        Some(Value::String(s)) => Industry::new(s.clone()),
        Some(other) => Err(ValidationError::invalid_format(
            "industry",
            format!("expected a string, got {}", other),
        )),
    }
}
