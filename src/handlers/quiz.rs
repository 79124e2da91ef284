use axum::{
    extract::{Query, State},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use crate::{
    clinical::{Gender, QuizAnswers},
    extractors::{AuthGuard, IsHtmx},
    names,
    rejections::{AppError, ResultExt},
    services::prediction::SubmitOutcome,
    views, AppState,
};

use crate::views::quiz as quiz_views;
use crate::views::results as results_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUIZ_URL, get(quiz_page).post(quiz_post))
        .route(names::PREGNANCIES_FRAGMENT_URL, get(pregnancies_fragment))
}

async fn quiz_page(AuthGuard(user): AuthGuard, IsHtmx(is_htmx): IsHtmx) -> maud::Markup {
    views::render(
        is_htmx,
        "Health Assessment",
        quiz_views::quiz_page(quiz_views::QuizFormState::NoError),
        Some(&user.display_name),
    )
}

/// The quiz form posts one field per question, keyed by question id. An
/// ordered pair list keeps unknown fields from failing deserialization.
async fn quiz_post(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<maud::Markup, AppError> {
    let answers =
        QuizAnswers::from_entries(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let outcome = state
        .predictions
        .submit(user.id, &answers)
        .await
        .reject("could not run prediction")?;

    let markup = match outcome {
        SubmitOutcome::Completed(response, clinical) => {
            let result = results_views::AssessmentResult {
                prediction: &response.prediction,
                probability: response.probability,
                message: Some(&response.message),
                clinical,
            };
            views::titled("Your Health Overview", results_views::dashboard(Some(&result)))
        }
        SubmitOutcome::Unanswered => views::titled(
            "Health Assessment",
            quiz_views::quiz_page(quiz_views::QuizFormState::Unanswered),
        ),
        SubmitOutcome::PredictorUnavailable => views::titled(
            "Health Assessment",
            quiz_views::quiz_page(quiz_views::QuizFormState::PredictorUnavailable),
        ),
    };

    Ok(markup)
}

#[derive(Deserialize)]
struct PregnanciesQuery {
    gender: Option<String>,
}

/// Shows or hides the pregnancy question as the gender select changes.
async fn pregnancies_fragment(
    AuthGuard(_user): AuthGuard,
    Query(query): Query<PregnanciesQuery>,
) -> maud::Markup {
    let applicable = query
        .gender
        .as_deref()
        .and_then(Gender::from_label)
        .is_some_and(|g| matches!(g, Gender::Female | Gender::Other));

    quiz_views::pregnancies_field(applicable)
}
