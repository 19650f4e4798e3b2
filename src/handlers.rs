use crate::analytics::{self, AnalyticsSnapshot};
use crate::catalog::{mood_catalog, playlist_for, BREATHING_PHASES};
use crate::errors::AppError;
use crate::models::{
    BreathPhase, CatalogResponse, HistoryQuery, HistoryResponse, MoodLabel, MoodObservation,
    MoodRequest, PlaylistResponse, ProfileResponse, UserProfile,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Json,
};
use chrono::Utc;

const DEFAULT_HISTORY_LIMIT: usize = 10;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let latest = data.history.last().map(|entry| entry.mood);
    Html(render_index(latest, data.history.len()))
}

pub async fn record_mood(
    State(state): State<AppState>,
    Json(payload): Json<MoodRequest>,
) -> Result<Json<MoodObservation>, AppError> {
    let mood: MoodLabel = payload
        .mood
        .trim()
        .parse()
        .map_err(|err: crate::models::UnknownMoodLabel| AppError::bad_request(err.to_string()))?;

    let observation = append_mood(&state, mood).await?;
    Ok(Json(observation))
}

pub async fn mood_record_form(
    State(state): State<AppState>,
    Path(label): Path<String>,
) -> Result<Redirect, AppError> {
    let mood: MoodLabel = label
        .parse()
        .map_err(|err: crate::models::UnknownMoodLabel| AppError::bad_request(err.to_string()))?;
    append_mood(&state, mood).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let data = state.data.lock().await;
    let recent: Vec<MoodObservation> = data.history.iter().rev().take(limit).cloned().collect();
    Ok(Json(HistoryResponse {
        total: data.history.len(),
        recent,
    }))
}

pub async fn get_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsSnapshot>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(analytics::compute_snapshot(&data.history, Utc::now())))
}

pub async fn get_playlist(
    State(state): State<AppState>,
) -> Result<Json<PlaylistResponse>, AppError> {
    let data = state.data.lock().await;
    let mood = data
        .history
        .last()
        .map(|entry| entry.mood)
        .ok_or_else(|| AppError::not_found("no mood recorded yet"))?;

    Ok(Json(PlaylistResponse {
        mood,
        songs: playlist_for(mood),
    }))
}

pub async fn get_moods() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        moods: mood_catalog(),
        breathing: BREATHING_PHASES
            .iter()
            .map(|&(phase, seconds)| BreathPhase { phase, seconds })
            .collect(),
    })
}

pub async fn get_profile(State(state): State<AppState>) -> Result<Json<ProfileResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(ProfileResponse {
        profile: data.profile.clone().unwrap_or_default(),
        entries: data.history.len(),
        happiness_percentage: analytics::happiness_percentage(&data.history),
        outlook: analytics::outlook(&data.history),
        top_moods: analytics::mood_frequency(&data.history),
    }))
}

pub async fn put_profile(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<UserProfile>, AppError> {
    let mut data = state.data.lock().await;
    data.profile = Some(profile.clone());
    persist_data(&state.data_path, &data).await?;
    Ok(Json(profile))
}

async fn append_mood(state: &AppState, mood: MoodLabel) -> Result<MoodObservation, AppError> {
    let observation = MoodObservation {
        mood,
        recorded_at: Utc::now(),
    };

    let mut data = state.data.lock().await;
    data.history.push(observation.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(observation)
}
