use color_eyre::Result;
use libsql::params;

use super::models::PredictionRecord;
use super::Db;

impl Db {
    /// Store a prediction result alongside the clinical input that produced
    /// it. `input_data` is the JSON body that was sent to the model.
    pub async fn save_prediction(
        &self,
        user_id: i32,
        input_data: &str,
        result: &str,
        probability: f64,
    ) -> Result<i32> {
        let conn = self.db.connect()?;
        let id = conn
            .query(
                r#"INSERT INTO predictions (user_id, input_data, result, probability)
                   VALUES (?, ?, ?, ?) RETURNING id"#,
                params![user_id, input_data, result, probability],
            )
            .await?
            .next()
            .await?
            .ok_or_else(|| color_eyre::eyre::eyre!("could not get prediction id"))?
            .get::<i32>(0)?;

        tracing::info!("prediction stored: id={id}, user_id={user_id}, result={result}");
        Ok(id)
    }

    /// All predictions for a user, newest first.
    pub async fn prediction_history(&self, user_id: i32) -> Result<Vec<PredictionRecord>> {
        let conn = self.db.connect()?;
        let mut rows = conn
            .query(
                r#"SELECT id, input_data, result, probability, created_at
                   FROM predictions WHERE user_id = ?
                   ORDER BY created_at DESC, id DESC"#,
                params![user_id],
            )
            .await?;

        let mut history = Vec::new();
        while let Some(row) = rows.next().await? {
            history.push(libsql::de::from_row::<PredictionRecord>(&row)?);
        }
        Ok(history)
    }

    pub async fn latest_prediction(&self, user_id: i32) -> Result<Option<PredictionRecord>> {
        let conn = self.db.connect()?;
        let row = conn
            .query(
                r#"SELECT id, input_data, result, probability, created_at
                   FROM predictions WHERE user_id = ?
                   ORDER BY created_at DESC, id DESC LIMIT 1"#,
                params![user_id],
            )
            .await?
            .next()
            .await?;

        match row {
            Some(row) => Ok(Some(libsql::de::from_row::<PredictionRecord>(&row)?)),
            None => Ok(None),
        }
    }
}
