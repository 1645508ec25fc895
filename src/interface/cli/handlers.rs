//! CLI 동작별 핸들러.
//! 서비스 호출을 그대로 전달하고, 오류에 동작 이름을 붙여 반환한다.

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use serde::Serialize;

use super::command::{CliAction, InferencePatch, InputSource, ModelPatch};
use super::composition::AppComposition;
use crate::domain::settings::{InferenceBaseConfig, ModelConfig, ProviderConfig};

/// 동작을 실행하고 stdout에 출력할 JSON 문자열을 반환한다.
pub fn execute(app: &AppComposition, action: CliAction) -> Result<String> {
    let service = app.settings_service();

    match action {
        CliAction::Inspect => app
            .inspect_settings_usecase()
            .execute()
            .context("inspect settings"),
        CliAction::Show => render(&service.get_settings().context("get settings")?),
        CliAction::Metadata => render(&service.get_metadata().context("get metadata")?),
        CliAction::Reset => render(&service.reset_to_default().context("reset settings")?),
        CliAction::ListProviders => {
            render(&service.get_all_providers().context("list providers")?)
        }
        CliAction::GetProvider(id) => render(
            &service
                .get_provider_by_id(&id)
                .with_context(|| format!("get provider {id}"))?,
        ),
        CliAction::CurrentProvider => render(
            &service
                .get_current_provider()
                .context("get current provider")?,
        ),
        CliAction::AddProvider(source) => {
            let cfg = read_provider(&source)?;
            render(&service.create_provider(cfg).context("create provider")?)
        }
        CliAction::UpdateProvider(source) => {
            let cfg = read_provider(&source)?;
            render(&service.update_provider(cfg).context("update provider")?)
        }
        CliAction::DeleteProvider(id) => {
            service.delete_provider(&id).context("delete provider")?;
            render(&service.get_all_providers().context("list providers")?)
        }
        CliAction::UseProvider(id) => render(
            &service
                .set_current_provider(&id)
                .context("set current provider")?,
        ),
        CliAction::SetInference(patch) => {
            let current = service
                .get_inference_config()
                .context("get inference config")?;
            render(
                &service
                    .update_inference_config(apply_inference(current, patch))
                    .context("update inference config")?,
            )
        }
        CliAction::SetModel(patch) => {
            let current = service.get_model_config().context("get model config")?;
            render(
                &service
                    .update_model_config(apply_model(current, patch))
                    .context("update model config")?,
            )
        }
        CliAction::ListLanguages => {
            render(&service.get_language_config().context("get language config")?)
        }
        CliAction::AddLanguage(lang) => {
            render(&service.add_language(&lang).context("add language")?)
        }
        CliAction::RemoveLanguage(lang) => {
            render(&service.remove_language(&lang).context("remove language")?)
        }
        CliAction::SetInputLanguage(lang) => render(
            &service
                .set_default_input_language(&lang)
                .context("set default input language")?,
        ),
        CliAction::SetOutputLanguage(lang) => render(
            &service
                .set_default_output_language(&lang)
                .context("set default output language")?,
        ),
    }
}

fn render<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn read_provider(source: &InputSource) -> Result<ProviderConfig> {
    let raw = match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read provider JSON from stdin")?;
            buf
        }
        InputSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read provider JSON at {}", path.display()))?,
    };
    serde_json::from_str(&raw).context("failed to parse provider JSON")
}

fn apply_inference(mut current: InferenceBaseConfig, patch: InferencePatch) -> InferenceBaseConfig {
    if let Some(v) = patch.timeout_seconds {
        current.timeout_seconds = v;
    }
    if let Some(v) = patch.max_retries {
        current.max_retries = v;
    }
    if let Some(v) = patch.use_markdown_output {
        current.use_markdown_output = v;
    }
    current
}

fn apply_model(mut current: ModelConfig, patch: ModelPatch) -> ModelConfig {
    if let Some(name) = patch.name {
        current.name = name;
    }
    match patch.temperature {
        Some(Some(t)) => {
            current.use_temperature = true;
            current.temperature = t;
        }
        Some(None) => current.use_temperature = false,
        None => {}
    }
    current
}
