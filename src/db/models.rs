// Database model structs

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    pub display_name: String,
}

/// A stored prediction: the clinical input that was sent to the model and
/// the classification it returned.
#[derive(Clone, Debug, Deserialize)]
pub struct PredictionRecord {
    pub id: i32,
    pub input_data: String,
    pub result: String,
    pub probability: f64,
    pub created_at: String,
}

impl PredictionRecord {
    pub fn is_diabetic(&self) -> bool {
        self.result == "Diabetic"
    }

    pub fn risk_percent(&self) -> i32 {
        (self.probability * 100.0).round() as i32
    }
}
