// ABOUTME: Pregnancy profile model with gestational week and trimester derivation
// ABOUTME: Computes current week, trimester, due date, and weeks remaining from LMP date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

use crate::constants::pregnancy;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Pregnancy trimester
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trimester {
    /// Weeks 0-13
    First,
    /// Weeks 14-27
    Second,
    /// Weeks 28 onward
    Third,
}

impl Trimester {
    /// Classify a gestational week
    #[must_use]
    pub const fn from_week(week: u32) -> Self {
        if week <= pregnancy::FIRST_TRIMESTER_LAST_WEEK {
            Self::First
        } else if week <= pregnancy::SECOND_TRIMESTER_LAST_WEEK {
            Self::Second
        } else {
            Self::Third
        }
    }

    /// Numeric trimester (1, 2, or 3)
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    /// Display label such as "First Trimester"
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::First => "First Trimester",
            Self::Second => "Second Trimester",
            Self::Third => "Third Trimester",
        }
    }
}

impl fmt::Display for Trimester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user's pregnancy profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PregnancyProfile {
    /// Owning user
    pub user_id: Uuid,
    /// First day of the last menstrual period, if known
    pub lmp_date: Option<NaiveDate>,
}

impl PregnancyProfile {
    /// Create a profile
    #[must_use]
    pub const fn new(user_id: Uuid, lmp_date: Option<NaiveDate>) -> Self {
        Self { user_id, lmp_date }
    }

    /// Gestational week as of `today`, clamped to 0..=40
    #[must_use]
    pub fn current_week(&self, today: NaiveDate) -> Option<u32> {
        let lmp = self.lmp_date?;
        let weeks = (today - lmp).num_days().div_euclid(7);
        let clamped = weeks.clamp(0, i64::from(pregnancy::FULL_TERM_WEEKS));
        u32::try_from(clamped).ok()
    }

    /// Trimester as of `today`
    #[must_use]
    pub fn trimester(&self, today: NaiveDate) -> Option<Trimester> {
        self.current_week(today).map(Trimester::from_week)
    }

    /// Estimated due date, 280 days after LMP
    #[must_use]
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.lmp_date
            .map(|lmp| lmp + Duration::days(pregnancy::DUE_DATE_OFFSET_DAYS))
    }

    /// Weeks left until full term
    #[must_use]
    pub fn weeks_remaining(&self, today: NaiveDate) -> Option<u32> {
        self.current_week(today)
            .map(|week| pregnancy::FULL_TERM_WEEKS.saturating_sub(week))
    }
}
