//! Task duration estimation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Job, JobCategory};

/// Fallback duration for unknown or unspecified categories.
pub const GENERIC_TASK_MINUTES: u32 = 60;

/// Default task duration per job category, in minutes.
///
/// Keys are lowercase category names as produced by [`JobCategory::as_str`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationTable {
    pub generic_minutes: u32,
    pub by_category: BTreeMap<String, u32>,
}

impl Default for DurationTable {
    fn default() -> Self {
        let by_category = [
            (JobCategory::Cleaning, 90),
            (JobCategory::Delivery, 30),
            (JobCategory::Errands, 45),
            (JobCategory::Moving, 180),
            (JobCategory::Handyman, 120),
            (JobCategory::Tech, 60),
        ]
        .into_iter()
        .map(|(category, minutes)| (String::from(category), minutes))
        .collect();

        Self {
            generic_minutes: GENERIC_TASK_MINUTES,
            by_category,
        }
    }
}

impl DurationTable {
    /// Adds or replaces the default for a category.
    pub fn with_category(mut self, category: impl Into<JobCategory>, minutes: u32) -> Self {
        self.by_category.insert(String::from(category.into()), minutes);
        self
    }

    pub fn minutes_for(&self, category: &JobCategory) -> u32 {
        self.by_category
            .get(category.as_str())
            .copied()
            .unwrap_or(self.generic_minutes)
    }

    /// Task duration for a job: the explicit estimate when it parses,
    /// otherwise the category default.
    pub fn task_minutes(&self, job: &Job) -> u32 {
        job.estimated_duration
            .as_deref()
            .and_then(parse_minutes)
            .unwrap_or_else(|| self.minutes_for(&job.category))
    }
}

/// Reads the first run of ASCII digits in `text` as a number of minutes.
///
/// "45 min" gives 45 and "about 2 hours" gives 2: units are not interpreted.
/// Returns None when there are no digits or the number overflows.
pub fn parse_minutes(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits = &text[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}
