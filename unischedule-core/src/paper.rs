//! Input model: papers (courses), their breaks and weekly sessions.
//!
//! Field names follow the JSON the scheduling tools send (`startDate`,
//! `endDate`, ...). Dates and times stay as strings here; the normalizer in
//! [`crate::time`] interprets them when an event is built.

use serde::Deserialize;

/// A scheduled academic unit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Short identifier, e.g. "COMPX101"
    pub code: String,
    pub title: String,
    /// First day of term, `YYYY-MM-DD` (inclusive)
    pub start_date: String,
    /// Last day of term, `YYYY-MM-DD` (inclusive)
    pub end_date: String,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub breaks: Vec<PaperBreak>,
    #[serde(default)]
    pub events: Vec<PaperEvent>,
}

/// A closed date interval with no teaching.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperBreak {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
}

/// One weekly meeting pattern within a paper.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperEvent {
    pub title: String,
    /// 1 = Monday ... 7 = Sunday; other integers wrap modulo 7
    pub weekday: i64,
    /// `H:MM` or `HH:MM`, 24-hour
    pub start_time: String,
    pub end_time: String,
    pub location: String,
}

impl Paper {
    /// The memo, if present and non-empty.
    pub fn memo(&self) -> Option<&str> {
        self.memo.as_deref().filter(|m| !m.is_empty())
    }
}
