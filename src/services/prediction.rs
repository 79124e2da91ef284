use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::clinical::{map_quiz_to_clinical, ClinicalEstimate, QuizAnswers};
use crate::db::models::PredictionRecord;
use crate::db::Db;
use crate::predictor::HttpPredictionClient;

// ---------------------------------------------------------------------------
// Collaborator traits
// ---------------------------------------------------------------------------

/// The external prediction endpoint.
#[cfg_attr(test, mockall::automock)]
pub trait PredictionClient: Send + Sync {
    fn predict(
        &self,
        clinical: &ClinicalEstimate,
    ) -> impl std::future::Future<Output = Result<PredictionResponse>> + Send;
}

/// Persistence for submitted predictions.
#[cfg_attr(test, mockall::automock)]
pub trait PredictionStore: Send + Sync {
    fn save_prediction(
        &self,
        user_id: i32,
        input_data: &str,
        result: &str,
        probability: f64,
    ) -> impl std::future::Future<Output = Result<i32>> + Send;

    fn prediction_history(
        &self,
        user_id: i32,
    ) -> impl std::future::Future<Output = Result<Vec<PredictionRecord>>> + Send;

    fn latest_prediction(
        &self,
        user_id: i32,
    ) -> impl std::future::Future<Output = Result<Option<PredictionRecord>>> + Send;
}

impl PredictionStore for Db {
    async fn save_prediction(
        &self,
        user_id: i32,
        input_data: &str,
        result: &str,
        probability: f64,
    ) -> Result<i32> {
        Db::save_prediction(self, user_id, input_data, result, probability).await
    }

    async fn prediction_history(&self, user_id: i32) -> Result<Vec<PredictionRecord>> {
        Db::prediction_history(self, user_id).await
    }

    async fn latest_prediction(&self, user_id: i32) -> Result<Option<PredictionRecord>> {
        Db::latest_prediction(self, user_id).await
    }
}

// ---------------------------------------------------------------------------
// Wire shape and outcomes
// ---------------------------------------------------------------------------

/// Response body of the prediction endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: String,
    pub probability: f64,
    pub message: String,
}

impl PredictionResponse {
    pub fn is_diabetic(&self) -> bool {
        self.prediction == "Diabetic"
    }

    pub fn risk_percent(&self) -> i32 {
        (self.probability * 100.0).round() as i32
    }
}

pub enum SubmitOutcome {
    /// Prediction made and stored. Carries the response and the clinical
    /// estimate it was computed from, for display.
    Completed(PredictionResponse, ClinicalEstimate),
    /// Not every applicable question was answered.
    Unanswered,
    /// The prediction endpoint could not be reached or returned an error.
    PredictorUnavailable,
}

// ---------------------------------------------------------------------------
// PredictionService
// ---------------------------------------------------------------------------

pub struct PredictionService<C: PredictionClient = HttpPredictionClient, S: PredictionStore = Db> {
    client: C,
    store: S,
}

impl<C: PredictionClient + Clone, S: PredictionStore + Clone> Clone for PredictionService<C, S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            store: self.store.clone(),
        }
    }
}

impl<C: PredictionClient, S: PredictionStore> PredictionService<C, S> {
    pub fn new(client: C, store: S) -> Self {
        Self { client, store }
    }

    /// Run a quiz submission end to end: validate completeness, derive the
    /// clinical estimate, call the predictor, and store the result.
    ///
    /// A storage failure after a successful prediction is logged but does
    /// not fail the submission; the user still gets their result.
    pub async fn submit(&self, user_id: i32, answers: &QuizAnswers) -> Result<SubmitOutcome> {
        if !answers.is_complete() {
            return Ok(SubmitOutcome::Unanswered);
        }

        let clinical = map_quiz_to_clinical(answers);

        let response = match self.client.predict(&clinical).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("prediction request failed for user_id={user_id}: {e}");
                return Ok(SubmitOutcome::PredictorUnavailable);
            }
        };

        let input_json = serde_json::to_string(&clinical)?;
        if let Err(e) = self
            .store
            .save_prediction(user_id, &input_json, &response.prediction, response.probability)
            .await
        {
            tracing::warn!("could not store prediction for user_id={user_id}: {e}");
        }

        Ok(SubmitOutcome::Completed(response, clinical))
    }

    pub async fn history(&self, user_id: i32) -> Result<Vec<PredictionRecord>> {
        self.store.prediction_history(user_id).await
    }

    pub async fn latest(&self, user_id: i32) -> Result<Option<PredictionRecord>> {
        self.store.latest_prediction(user_id).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn complete_answers() -> QuizAnswers {
        QuizAnswers::from_entries([
            ("smoking", "10+"),
            ("alcohol", "Daily"),
            ("exercise", "None"),
            ("diet", "High sugar/junk food"),
            ("water", "<1L"),
            ("sleep", "<4 hrs"),
            ("meals", "Never"),
            ("sugarIntake", "Daily"),
            ("stress", "Very High"),
            ("screenTime", "5+ hrs"),
            ("fruitVeg", "Never"),
            ("familyHistory", "Both parents"),
            ("gender", "Male"),
            ("age", "50"),
        ])
    }

    fn diabetic_response() -> PredictionResponse {
        PredictionResponse {
            prediction: "Diabetic".to_string(),
            probability: 0.82,
            message: "The person is diabetic with a probability of 82.00%.".to_string(),
        }
    }

    #[tokio::test]
    async fn submit_sends_the_mapped_clinical_estimate() {
        let answers = complete_answers();
        let expected = map_quiz_to_clinical(&answers);

        let mut client = MockPredictionClient::new();
        client
            .expect_predict()
            .withf(move |clinical| *clinical == expected)
            .times(1)
            .returning(|_| Box::pin(async { Ok(diabetic_response()) }));

        let mut store = MockPredictionStore::new();
        store
            .expect_save_prediction()
            .withf(|user_id, input, result, probability| {
                *user_id == 9
                    && result == "Diabetic"
                    && (*probability - 0.82).abs() < f64::EPSILON
                    && serde_json::from_str::<ClinicalEstimate>(input).is_ok()
            })
            .times(1)
            .returning(|_, _, _, _| Box::pin(async { Ok(1) }));

        let svc = PredictionService::new(client, store);
        let outcome = svc.submit(9, &answers).await.unwrap();

        match outcome {
            SubmitOutcome::Completed(response, clinical) => {
                assert_eq!(response.prediction, "Diabetic");
                assert_eq!(clinical, map_quiz_to_clinical(&complete_answers()));
            }
            _ => panic!("expected a completed submission"),
        }
    }

    #[tokio::test]
    async fn submit_rejects_incomplete_answers_without_calling_the_predictor() {
        // No expectations set: any call would panic the test.
        let client = MockPredictionClient::new();
        let store = MockPredictionStore::new();

        let svc = PredictionService::new(client, store);
        let answers = QuizAnswers::from_entries([("smoking", "None")]);
        let outcome = svc.submit(9, &answers).await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::Unanswered));
    }

    #[tokio::test]
    async fn submit_reports_unreachable_predictor() {
        let mut client = MockPredictionClient::new();
        client
            .expect_predict()
            .returning(|_| Box::pin(async { Err(color_eyre::eyre::eyre!("connection refused")) }));

        let store = MockPredictionStore::new();

        let svc = PredictionService::new(client, store);
        let outcome = svc.submit(9, &complete_answers()).await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::PredictorUnavailable));
    }

    #[tokio::test]
    async fn storage_failure_does_not_lose_the_result() {
        let mut client = MockPredictionClient::new();
        client
            .expect_predict()
            .returning(|_| Box::pin(async { Ok(diabetic_response()) }));

        let mut store = MockPredictionStore::new();
        store
            .expect_save_prediction()
            .returning(|_, _, _, _| Box::pin(async { Err(color_eyre::eyre::eyre!("db down")) }));

        let svc = PredictionService::new(client, store);
        let outcome = svc.submit(9, &complete_answers()).await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::Completed(_, _)));
    }

    #[test]
    fn risk_percent_rounds_the_probability() {
        assert_eq!(diabetic_response().risk_percent(), 82);
        let response = PredictionResponse {
            prediction: "Non-Diabetic".to_string(),
            probability: 0.136,
            message: String::new(),
        };
        assert_eq!(response.risk_percent(), 14);
        assert!(!response.is_diabetic());
    }
}
