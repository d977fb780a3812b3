// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default vitals, request defaults, network ports, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! Constants grouped by domain.

/// Fallback vitals used whenever a reading is missing a field
pub mod vitals_defaults {
    /// Heart rate in BPM
    pub const HEART_RATE: i32 = 80;
    /// Blood oxygen saturation percentage
    pub const SPO2: i32 = 98;
    /// Fatigue on a 0-100 scale
    pub const FATIGUE_LEVEL: i32 = 30;
}

/// Defaults applied to safety check requests
pub mod request_defaults {
    /// Posture score assumed when the client omits it
    pub const POSTURE_SCORE: f64 = 100.0;
    /// Rep counter assumed when the client omits it
    pub const CURRENT_REPS: i64 = 0;
    /// Pregnancy week used when the user has no profile
    pub const PREGNANCY_WEEK: u32 = 20;
    /// Number of stored vitals returned by the history endpoint
    pub const HISTORY_LIMIT: usize = 24;
    /// Number of stored vitals averaged for dashboard trends
    pub const TREND_WINDOW: usize = 7;
}

/// Pregnancy timeline
pub mod pregnancy {
    /// Full-term pregnancy length in weeks
    pub const FULL_TERM_WEEKS: u32 = 40;
    /// Days from last menstrual period to estimated due date
    pub const DUE_DATE_OFFSET_DAYS: i64 = 280;
    /// Last week counted as first trimester
    pub const FIRST_TRIMESTER_LAST_WEEK: u32 = 13;
    /// Last week counted as second trimester
    pub const SECOND_TRIMESTER_LAST_WEEK: u32 = 27;
}

/// Physiological reference ranges for stored vitals
pub mod reference_ranges {
    /// Lowest pregnancy-adjusted normal heart rate
    pub const HEART_RATE_NORMAL_MIN: i32 = 70;
    /// Highest pregnancy-adjusted normal heart rate
    pub const HEART_RATE_NORMAL_MAX: i32 = 110;
    /// Minimum normal SpO2 percentage
    pub const SPO2_NORMAL_MIN: i32 = 95;
}

/// Colour codes for safety levels
pub mod safety_colors {
    /// Green
    pub const SAFE: &str = "#10B981";
    /// Amber
    pub const CAUTION: &str = "#F59E0B";
    /// Red
    pub const WARNING: &str = "#EF4444";
    /// Dark red
    pub const DANGER: &str = "#DC2626";
    /// Gray, used for unrecognized levels
    pub const UNKNOWN: &str = "#6B7280";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Server service name
    pub const PRENATAL_FIT_SERVER: &str = "prenatal-fit-server";
}
