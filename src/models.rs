use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of moods a user can record. Anything outside this set is
/// rejected at ingestion rather than scored as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodLabel {
    Happy,
    Sad,
    Angry,
    Anxious,
    Calm,
    Tired,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 6] = [
        MoodLabel::Happy,
        MoodLabel::Sad,
        MoodLabel::Angry,
        MoodLabel::Anxious,
        MoodLabel::Calm,
        MoodLabel::Tired,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MoodLabel::Happy => "Happy",
            MoodLabel::Sad => "Sad",
            MoodLabel::Angry => "Angry",
            MoodLabel::Anxious => "Anxious",
            MoodLabel::Calm => "Calm",
            MoodLabel::Tired => "Tired",
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMoodLabel(pub String);

impl fmt::Display for UnknownMoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mood label: {:?}", self.0)
    }
}

impl std::error::Error for UnknownMoodLabel {}

impl FromStr for MoodLabel {
    type Err = UnknownMoodLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        MoodLabel::ALL
            .iter()
            .copied()
            .find(|mood| mood.as_str() == value)
            .ok_or_else(|| UnknownMoodLabel(value.to_string()))
    }
}

/// A single timestamped check-in. Immutable once appended; the history vector
/// stays in insertion order, which is also chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodObservation {
    pub mood: MoodLabel,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub age: String,
}

/// The persisted document. `history` is append-only; nothing deletes or
/// rewrites an observation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub history: Vec<MoodObservation>,
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub mood: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub total: usize,
    pub recent: Vec<MoodObservation>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub moods: Vec<MoodCatalogEntry>,
    pub breathing: Vec<BreathPhase>,
}

#[derive(Debug, Serialize)]
pub struct BreathPhase {
    pub phase: &'static str,
    pub seconds: u32,
}

#[derive(Debug, Serialize)]
pub struct MoodCatalogEntry {
    pub mood: MoodLabel,
    pub emoji: &'static str,
    pub color: &'static str,
    pub score: u32,
}

#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub mood: MoodLabel,
    pub songs: &'static [crate::catalog::Song],
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: UserProfile,
    pub entries: usize,
    pub happiness_percentage: u32,
    pub outlook: Option<crate::analytics::Outlook>,
    pub top_moods: Vec<MoodFrequency>,
}

#[derive(Debug, Serialize)]
pub struct MoodFrequency {
    pub mood: MoodLabel,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_label_parses_exact_names_only() {
        assert_eq!("Happy".parse::<MoodLabel>().unwrap(), MoodLabel::Happy);
        assert_eq!("Tired".parse::<MoodLabel>().unwrap(), MoodLabel::Tired);
        assert!("happy".parse::<MoodLabel>().is_err());
        assert!("Ecstatic".parse::<MoodLabel>().is_err());
        assert!("".parse::<MoodLabel>().is_err());
    }

    #[test]
    fn mood_label_round_trips_through_display() {
        for mood in MoodLabel::ALL {
            assert_eq!(mood.as_str().parse::<MoodLabel>().unwrap(), mood);
        }
    }
}
