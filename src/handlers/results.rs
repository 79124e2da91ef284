use axum::{extract::State, routing::get, Router};

use crate::{
    clinical::ClinicalEstimate,
    extractors::{AuthGuard, IsHtmx},
    names,
    rejections::{AppError, ResultExt},
    views, AppState,
};

use crate::views::results as results_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::DASHBOARD_URL, get(dashboard))
        .route(names::HISTORY_URL, get(history))
        .route(names::RECOMMENDATION_URL, get(recommendation))
}

async fn dashboard(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<maud::Markup, AppError> {
    let latest = state
        .predictions
        .latest(user.id)
        .await
        .reject("could not load latest prediction")?;

    // A record whose stored input no longer parses is treated as absent.
    let result = latest.as_ref().and_then(|record| {
        let clinical: ClinicalEstimate = serde_json::from_str(&record.input_data).ok()?;
        Some(results_views::AssessmentResult {
            prediction: &record.result,
            probability: record.probability,
            message: None,
            clinical,
        })
    });

    Ok(views::render(
        is_htmx,
        "Your Health Overview",
        results_views::dashboard(result.as_ref()),
        Some(&user.display_name),
    ))
}

async fn history(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<maud::Markup, AppError> {
    let records = state
        .predictions
        .history(user.id)
        .await
        .reject("could not load prediction history")?;

    let entries: Vec<results_views::HistoryEntry> = records
        .into_iter()
        .map(|record| {
            let clinical = serde_json::from_str(&record.input_data).ok();
            results_views::HistoryEntry { record, clinical }
        })
        .collect();

    Ok(views::render(
        is_htmx,
        "Prediction History",
        results_views::history(&entries),
        Some(&user.display_name),
    ))
}

async fn recommendation(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<maud::Markup, AppError> {
    let latest = state
        .predictions
        .latest(user.id)
        .await
        .reject("could not load latest prediction")?;

    let is_diabetic = latest.map(|record| record.is_diabetic()).unwrap_or(false);

    Ok(views::render(
        is_htmx,
        "Health Recommendations",
        results_views::recommendation(is_diabetic),
        Some(&user.display_name),
    ))
}
