use crate::models::{MoodCatalogEntry, MoodLabel};
use crate::scoring::score;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Song {
    pub title: &'static str,
    pub artist: &'static str,
}

const fn song(title: &'static str, artist: &'static str) -> Song {
    Song { title, artist }
}

pub fn mood_emoji(mood: MoodLabel) -> &'static str {
    match mood {
        MoodLabel::Happy => "😊",
        MoodLabel::Sad => "😢",
        MoodLabel::Angry => "😠",
        MoodLabel::Anxious => "😰",
        MoodLabel::Calm => "😌",
        MoodLabel::Tired => "😴",
    }
}

pub fn mood_color(mood: MoodLabel) -> &'static str {
    match mood {
        MoodLabel::Happy => "#facc15",
        MoodLabel::Sad => "#60a5fa",
        MoodLabel::Angry => "#f87171",
        MoodLabel::Anxious => "#c084fc",
        MoodLabel::Calm => "#4ade80",
        MoodLabel::Tired => "#818cf8",
    }
}

/// Five fixed recommendations per mood. Static content, no computation.
pub fn playlist_for(mood: MoodLabel) -> &'static [Song] {
    match mood {
        MoodLabel::Happy => const { &[
            song("Happy", "Pharrell Williams"),
            song("Good Vibrations", "The Beach Boys"),
            song("Walking on Sunshine", "Katrina and the Waves"),
            song("Don't Stop Me Now", "Queen"),
            song("I Gotta Feeling", "Black Eyed Peas"),
        ] },
        MoodLabel::Sad => const { &[
            song("Someone Like You", "Adele"),
            song("The Scientist", "Coldplay"),
            song("Hurt", "Johnny Cash"),
            song("Mad World", "Gary Jules"),
            song("Tears in Heaven", "Eric Clapton"),
        ] },
        MoodLabel::Angry => const { &[
            song("Break Stuff", "Limp Bizkit"),
            song("Killing in the Name", "Rage Against the Machine"),
            song("Bodies", "Drowning Pool"),
            song("Enter Sandman", "Metallica"),
            song("Smells Like Teen Spirit", "Nirvana"),
        ] },
        MoodLabel::Anxious => const { &[
            song("Breathe Me", "Sia"),
            song("Weightless", "Marconi Union"),
            song("Clair de Lune", "Claude Debussy"),
            song("Gymnopedie No. 1", "Erik Satie"),
            song("River Flows in You", "Yiruma"),
        ] },
        MoodLabel::Calm => const { &[
            song("Weightless", "Marconi Union"),
            song("Sunset Lover", "Petit Biscuit"),
            song("Islands", "Ludovico Einaudi"),
            song("Holocene", "Bon Iver"),
            song("Pure Shores", "All Saints"),
        ] },
        MoodLabel::Tired => const { &[
            song("Moonlight Sonata", "Beethoven"),
            song("Nocturne in E-flat", "Chopin"),
            song("Spiegel im Spiegel", "Arvo Pärt"),
            song("Sleep", "Max Richter"),
            song("Clair de Lune", "Claude Debussy"),
        ] },
    }
}

/// Guided breathing pattern: phase name and duration in seconds. The timer
/// itself runs client-side.
pub const BREATHING_PHASES: [(&str, u32); 3] = [("inhale", 4), ("hold", 4), ("exhale", 6)];

pub fn mood_catalog() -> Vec<MoodCatalogEntry> {
    MoodLabel::ALL
        .iter()
        .map(|mood| MoodCatalogEntry {
            mood: *mood,
            emoji: mood_emoji(*mood),
            color: mood_color(*mood),
            score: score(*mood),
        })
        .collect()
}
