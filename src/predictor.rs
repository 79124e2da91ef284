//! HTTP client for the external ML prediction API.

use color_eyre::Result;

use crate::clinical::ClinicalEstimate;
use crate::services::prediction::{PredictionClient, PredictionResponse};

/// Talks to the Flask-style predictor over HTTP: the clinical estimate goes
/// out as JSON, the classification comes back as
/// `{ prediction, probability, message }`.
#[derive(Clone)]
pub struct HttpPredictionClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPredictionClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, clinical: &ClinicalEstimate) -> Result<PredictionResponse> {
        let url = format!("{}/predict", self.base_url);

        let resp = self.client.post(&url).json(clinical).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::error!("prediction API error: {status} - {text}");
            color_eyre::eyre::bail!("prediction API returned {status}");
        }

        let response = resp.json::<PredictionResponse>().await?;
        tracing::info!(
            "prediction received: {} ({:.2}%)",
            response.prediction,
            response.probability * 100.0
        );
        Ok(response)
    }
}
