use std::{fmt, str::FromStr};

use thiserror::Error;

/// Scores below this value fall into the low band.
const MEDIUM_BAND_FLOOR: u8 = 50;
/// Scores at or above this value fall into the high band.
const HIGH_BAND_FLOOR: u8 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value `{value}`, expected one of: {expected}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl ParseEnumError {
    pub(crate) fn new(
        kind: &'static str,
        value: &str,
        slugs: impl Iterator<Item = &'static str>,
    ) -> Self {
        Self {
            kind,
            value: value.to_owned(),
            expected: slugs.collect::<Vec<_>>().join(", "),
        }
    }
}

/// Pipeline stage of a client relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClientStatus {
    NewLead,
    AssessmentSent,
    ReportReady,
    FollowUpNeeded,
    ApplicationStarted,
    /// Assessed with no remaining insurance need.
    Protected,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 6] = [
        Self::NewLead,
        Self::AssessmentSent,
        Self::ReportReady,
        Self::FollowUpNeeded,
        Self::ApplicationStarted,
        Self::Protected,
    ];

    pub fn as_slug(self) -> &'static str {
        match self {
            Self::NewLead => "new-lead",
            Self::AssessmentSent => "assessment-sent",
            Self::ReportReady => "report-ready",
            Self::FollowUpNeeded => "follow-up-needed",
            Self::ApplicationStarted => "application-started",
            Self::Protected => "protected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NewLead => "New Lead",
            Self::AssessmentSent => "Assessment Sent",
            Self::ReportReady => "Report Ready",
            Self::FollowUpNeeded => "Follow-up Needed",
            Self::ApplicationStarted => "Application Started",
            Self::Protected => "Protected (No Insurance Need)",
        }
    }

    /// Next status in pipeline order, wrapping after `Protected`.
    pub fn cycled(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|status| *status == self)
            .unwrap_or_default();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_slug())
    }
}

impl FromStr for ClientStatus {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_slug() == value)
            .ok_or_else(|| {
                ParseEnumError::new("status", value, Self::ALL.iter().map(|s| s.as_slug()))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportStatus {
    NotStarted,
    Pending,
    Completed,
}

impl ReportStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ApplicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// Coarse bucketing of a protection score used by list filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreBand {
    Low,
    Medium,
    High,
}

impl ScoreBand {
    pub const ALL: [ScoreBand; 3] = [Self::Low, Self::Medium, Self::High];

    /// Partitions 0..=100 into exactly one band.
    pub fn for_score(score: u8) -> Self {
        match score {
            s if s < MEDIUM_BAND_FLOOR => Self::Low,
            s if s < HIGH_BAND_FLOOR => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn contains(self, score: u8) -> bool {
        Self::for_score(score) == self
    }

    pub fn as_slug(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low (<50%)",
            Self::Medium => "Medium (50-79%)",
            Self::High => "High (80%+)",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_slug())
    }
}

impl FromStr for ScoreBand {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|band| band.as_slug() == value)
            .ok_or_else(|| {
                ParseEnumError::new("score band", value, Self::ALL.iter().map(|b| b.as_slug()))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Percentage 0-100, higher is better covered.
    pub protection_score: u8,
    /// Recommended minus current coverage, whole currency units.
    pub coverage_gap: u64,
    pub status: ClientStatus,
    /// Free text, not a structured date.
    pub last_contact: String,
    pub report_status: ReportStatus,
    pub application_status: ApplicationStatus,
}

impl ClientRecord {
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::for_score(self.protection_score)
    }

    /// The report can be opened once it is completed, unless no need was identified.
    pub fn can_view_report(&self) -> bool {
        self.report_status == ReportStatus::Completed && self.status != ClientStatus::Protected
    }
}

/// Formats whole dollars with thousands separators, e.g. `$500,000`.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}
