use crate::models::MoodLabel;

/// Scores at or above this count toward the positive streak.
pub const POSITIVE_THRESHOLD: u32 = 60;

/// Fixed wellness score for each mood, on a 0-100 scale.
pub fn score(mood: MoodLabel) -> u32 {
    match mood {
        MoodLabel::Happy => 100,
        MoodLabel::Calm => 80,
        MoodLabel::Tired => 50,
        MoodLabel::Anxious => 40,
        MoodLabel::Sad => 20,
        MoodLabel::Angry => 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_table_matches_fixed_values() {
        assert_eq!(score(MoodLabel::Happy), 100);
        assert_eq!(score(MoodLabel::Calm), 80);
        assert_eq!(score(MoodLabel::Tired), 50);
        assert_eq!(score(MoodLabel::Anxious), 40);
        assert_eq!(score(MoodLabel::Sad), 20);
        assert_eq!(score(MoodLabel::Angry), 10);
    }

    #[test]
    fn scores_stay_in_percentage_range() {
        for mood in MoodLabel::ALL {
            assert!(score(mood) <= 100);
        }
    }

    #[test]
    fn only_happy_and_calm_clear_the_positive_threshold() {
        let positive: Vec<_> = MoodLabel::ALL
            .iter()
            .copied()
            .filter(|mood| score(*mood) >= POSITIVE_THRESHOLD)
            .collect();
        assert_eq!(positive, vec![MoodLabel::Happy, MoodLabel::Calm]);
    }
}
