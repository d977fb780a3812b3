// ABOUTME: Pregnancy-adjusted wearable vitals simulator
// ABOUTME: Generates heart rate, SpO2, stress, fatigue, and activity by trimester and time of day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! # Vitals Simulator
//!
//! Stands in for a wearable device until a real feed is connected. Ranges are
//! inclusive and shift with trimester, exercise, and time of day. Every
//! generator takes the RNG explicitly so tests can pass a seeded `ChaCha8Rng`.

use chrono::{DateTime, Duration, Local, Timelike, Utc};
use prenatal_core::models::{SimulatedVitals, StressLevel, Trimester, VitalsSnapshot};
use rand::Rng;
use serde::{Deserialize, Serialize};

const EXERCISE_HEART_RATE: (i32, i32) = (90, 120);
const SPO2_RANGE: (i32, i32) = (96, 100);
const MORNING_HEART_RATE_OFFSET: i32 = -5;
const EVENING_HEART_RATE_OFFSET: i32 = 5;
const EVENING_FATIGUE_OFFSET: i32 = 10;
const FATIGUE_CAP: i32 = 100;
const ACTIVE_MINUTES_EXERCISING: (i32, i32) = (20, 60);
const ACTIVE_MINUTES_RESTING: (i32, i32) = (10, 45);
const LOW_INTENSITY_HEART_RATE_CAP: i32 = 100;
const HIGH_INTENSITY_HEART_RATE_BOOST: i32 = 10;
const HIGH_INTENSITY_HEART_RATE_CAP: i32 = 130;

// Cumulative stress weights: low 0.6, medium 0.3, high 0.1
const STRESS_LOW_CUTOFF: f64 = 0.6;
const STRESS_MEDIUM_CUTOFF: f64 = 0.9;

/// Part of the day, which shifts heart rate and fatigue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// 05:00 to 11:59
    Morning,
    /// 12:00 to 17:59
    Afternoon,
    /// Everything else
    Evening,
}

impl TimeOfDay {
    /// All parts of the day in chronological order
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    /// Classify an hour of the day (0-23)
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// Part of the day on the server's local clock
    #[must_use]
    pub fn now() -> Self {
        Self::from_hour(Local::now().hour())
    }
}

/// Exercise intensity for exercise-specific vitals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseIntensity {
    /// Gentle movement, heart rate capped at 100
    Low,
    /// Standard session
    #[default]
    Moderate,
    /// Vigorous session, heart rate raised by 10 and capped at 130
    High,
}

/// Stateless generator of pregnancy-adjusted vitals
pub struct HealthDataSimulator;

impl HealthDataSimulator {
    /// Generate one reading
    ///
    /// `time_of_day` of `None` applies no time-based adjustment.
    pub fn generate_vitals<R: Rng + ?Sized>(
        rng: &mut R,
        pregnancy_week: u32,
        is_exercising: bool,
        time_of_day: Option<TimeOfDay>,
    ) -> SimulatedVitals {
        let trimester = Trimester::from_week(pregnancy_week);

        let (hr_min, hr_max) = heart_rate_range(trimester, is_exercising, time_of_day);
        let (fatigue_min, fatigue_max) = fatigue_range(trimester, time_of_day);
        let (active_min, active_max) = if is_exercising {
            ACTIVE_MINUTES_EXERCISING
        } else {
            ACTIVE_MINUTES_RESTING
        };

        SimulatedVitals {
            snapshot: VitalsSnapshot {
                heart_rate: rng.gen_range(hr_min..=hr_max),
                spo2: rng.gen_range(SPO2_RANGE.0..=SPO2_RANGE.1),
                stress_level: weighted_stress(rng),
                fatigue_level: rng.gen_range(fatigue_min..=fatigue_max),
            },
            daily_active_minutes: rng.gen_range(active_min..=active_max),
            is_simulated: true,
            pregnancy_week,
            trimester: trimester.label().to_owned(),
            timestamp: None,
        }
    }

    /// Generate a reading taken during exercise at the given intensity
    pub fn generate_exercise_vitals<R: Rng + ?Sized>(
        rng: &mut R,
        pregnancy_week: u32,
        intensity: ExerciseIntensity,
    ) -> SimulatedVitals {
        let mut vitals = Self::generate_vitals(rng, pregnancy_week, true, None);
        let heart_rate = vitals.snapshot.heart_rate;

        vitals.snapshot.heart_rate = match intensity {
            ExerciseIntensity::Low => heart_rate.min(LOW_INTENSITY_HEART_RATE_CAP),
            ExerciseIntensity::Moderate => heart_rate,
            ExerciseIntensity::High => {
                (heart_rate + HIGH_INTENSITY_HEART_RATE_BOOST).min(HIGH_INTENSITY_HEART_RATE_CAP)
            }
        };
        vitals
    }

    /// Generate a resting series covering the last `days` days
    ///
    /// Three readings per day (morning, afternoon, evening), each stamped a
    /// random hour back from that day, returned oldest first.
    pub fn generate_historical_data<R: Rng + ?Sized>(
        rng: &mut R,
        pregnancy_week: u32,
        days: u32,
        now: DateTime<Utc>,
    ) -> Vec<SimulatedVitals> {
        let mut series = Vec::with_capacity(days as usize * TimeOfDay::ALL.len());

        for day in 0..days {
            for time_of_day in TimeOfDay::ALL {
                let hours_back = rng.gen_range(0..=23);
                let timestamp =
                    now - Duration::days(i64::from(day)) - Duration::hours(hours_back);

                let mut vitals =
                    Self::generate_vitals(rng, pregnancy_week, false, Some(time_of_day));
                vitals.timestamp = Some(timestamp);
                series.push(vitals);
            }
        }

        series.sort_by_key(|vitals| vitals.timestamp);
        series
    }
}

fn heart_rate_range(
    trimester: Trimester,
    is_exercising: bool,
    time_of_day: Option<TimeOfDay>,
) -> (i32, i32) {
    let (min, max) = if is_exercising {
        EXERCISE_HEART_RATE
    } else {
        match trimester {
            Trimester::First => (70, 90),
            Trimester::Second => (75, 95),
            Trimester::Third => (80, 100),
        }
    };

    let offset = match time_of_day {
        Some(TimeOfDay::Morning) => MORNING_HEART_RATE_OFFSET,
        Some(TimeOfDay::Evening) => EVENING_HEART_RATE_OFFSET,
        Some(TimeOfDay::Afternoon) | None => 0,
    };
    (min + offset, max + offset)
}

fn fatigue_range(trimester: Trimester, time_of_day: Option<TimeOfDay>) -> (i32, i32) {
    let (min, max) = match trimester {
        Trimester::First => (40, 70),
        Trimester::Second => (30, 60),
        Trimester::Third => (50, 80),
    };

    let offset = if time_of_day == Some(TimeOfDay::Evening) {
        EVENING_FATIGUE_OFFSET
    } else {
        0
    };
    let max = (max + offset).min(FATIGUE_CAP);
    ((min + offset).min(max), max)
}

fn weighted_stress<R: Rng + ?Sized>(rng: &mut R) -> StressLevel {
    let roll: f64 = rng.gen();
    if roll < STRESS_LOW_CUTOFF {
        StressLevel::Low
    } else if roll < STRESS_MEDIUM_CUTOFF {
        StressLevel::Medium
    } else {
        StressLevel::High
    }
}
