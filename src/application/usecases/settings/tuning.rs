//! 추론/모델 파라미터 갱신.

use tracing::info;

use super::{SettingsResult, SettingsService};
use crate::domain::settings::{InferenceBaseConfig, ModelConfig};
use crate::domain::validation::{validate_inference_config, validate_model_config};

impl SettingsService<'_> {
    pub fn get_inference_config(&self) -> SettingsResult<InferenceBaseConfig> {
        Ok(self.repo.get_settings()?.inference)
    }

    pub fn get_model_config(&self) -> SettingsResult<ModelConfig> {
        Ok(self.repo.get_settings()?.model)
    }

    /// timeout은 1..=600초, 재시도는 0..=10회.
    pub fn update_inference_config(
        &self,
        cfg: InferenceBaseConfig,
    ) -> SettingsResult<InferenceBaseConfig> {
        validate_inference_config(&cfg)?;

        let mut next = self.repo.get_settings()?;
        next.inference = cfg;
        let saved = self.commit(next)?;

        info!(
            timeout_seconds = saved.inference.timeout_seconds,
            max_retries = saved.inference.max_retries,
            "inference config updated"
        );
        Ok(saved.inference)
    }

    pub fn update_model_config(&self, cfg: ModelConfig) -> SettingsResult<ModelConfig> {
        validate_model_config(&cfg)?;

        let mut next = self.repo.get_settings()?;
        next.model = cfg;
        let saved = self.commit(next)?;

        info!(model = %saved.model.name, "model config updated");
        Ok(saved.model)
    }
}
