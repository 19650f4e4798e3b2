use crate::models::{MoodFrequency, MoodLabel, MoodObservation};
use crate::scoring::{score, POSITIVE_THRESHOLD};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const TREND_MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Coarse wellness labels over the all-time average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outlook {
    VeryPositive,
    Positive,
    Neutral,
    Low,
    VeryLow,
}

/// Derived statistics over the mood history. Recomputed on every read, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub weekly_average: u32,
    pub trend: Trend,
    pub positive_streak: u32,
}

/// Computes the snapshot for `history` as of `now`.
///
/// The weekly window is the trailing 7 days, exclusive of the boundary
/// instant: an entry exactly 7 days old is outside it. The positive streak is
/// taken over the full history and does not depend on the window. The caller
/// guarantees `history` is in chronological append order; this function never
/// sorts.
pub fn compute_snapshot(history: &[MoodObservation], now: DateTime<Utc>) -> AnalyticsSnapshot {
    let week_ago = now - Duration::days(7);
    let window: Vec<u32> = history
        .iter()
        .filter(|entry| entry.recorded_at > week_ago)
        .map(|entry| score(entry.mood))
        .collect();

    let weekly_average = if window.is_empty() {
        0
    } else {
        rounded_mean(&window)
    };

    AnalyticsSnapshot {
        weekly_average,
        trend: window_trend(&window),
        positive_streak: positive_streak(history),
    }
}

/// Length of the suffix of `history` (newest entries) whose scores all clear
/// the positive threshold.
pub fn positive_streak(history: &[MoodObservation]) -> u32 {
    history
        .iter()
        .rev()
        .take_while(|entry| score(entry.mood) >= POSITIVE_THRESHOLD)
        .count() as u32
}

/// All-time average score, rounded to a whole percentage. 0 when empty.
pub fn happiness_percentage(history: &[MoodObservation]) -> u32 {
    if history.is_empty() {
        return 0;
    }
    let scores: Vec<u32> = history.iter().map(|entry| score(entry.mood)).collect();
    rounded_mean(&scores)
}

/// Banded label over the all-time average; `None` when there is no history.
pub fn outlook(history: &[MoodObservation]) -> Option<Outlook> {
    if history.is_empty() {
        return None;
    }
    Some(match happiness_percentage(history) {
        80.. => Outlook::VeryPositive,
        60..=79 => Outlook::Positive,
        40..=59 => Outlook::Neutral,
        20..=39 => Outlook::Low,
        _ => Outlook::VeryLow,
    })
}

/// The most frequently recorded moods, descending by count, capped at three.
/// Ties break by the catalog order of the labels so the output is stable.
pub fn mood_frequency(history: &[MoodObservation]) -> Vec<MoodFrequency> {
    let mut counts: HashMap<MoodLabel, usize> = HashMap::new();
    for entry in history {
        *counts.entry(entry.mood).or_default() += 1;
    }

    let mut ranked: Vec<MoodFrequency> = MoodLabel::ALL
        .iter()
        .filter_map(|mood| {
            counts.get(mood).map(|count| MoodFrequency {
                mood: *mood,
                count: *count,
            })
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(3);
    ranked
}

fn window_trend(window: &[u32]) -> Trend {
    let half = window.len() / 2;
    // With fewer than two entries the first half is empty and there is
    // nothing to compare against.
    if half == 0 {
        return Trend::Stable;
    }
    let first = mean(&window[..half]);
    let second = mean(&window[half..]);
    classify_trend(first, second)
}

fn classify_trend(first_half_mean: f64, second_half_mean: f64) -> Trend {
    if second_half_mean > first_half_mean + TREND_MARGIN {
        Trend::Up
    } else if second_half_mean < first_half_mean - TREND_MARGIN {
        Trend::Down
    } else {
        Trend::Stable
    }
}

fn mean(scores: &[u32]) -> f64 {
    scores.iter().map(|value| *value as f64).sum::<f64>() / scores.len() as f64
}

// Round-half-up; scores are non-negative so f64::round behaves that way.
fn rounded_mean(scores: &[u32]) -> u32 {
    mean(scores).round() as u32
}
