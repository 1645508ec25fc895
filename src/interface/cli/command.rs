//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "textpilot")]
#[command(about = "Manage LLM provider profiles and text-processing settings")]
pub struct Cli {
    /// Settings file path (overrides TEXTPILOT_SETTINGS and the OS config dir)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show settings path, validity and resolved provider endpoints
    Inspect,
    /// Print the stored settings document
    Show,
    /// Print supported enum values and the settings file location
    Metadata,
    /// Overwrite all settings with the built-in defaults
    Reset,
    /// Manage provider profiles
    #[command(subcommand)]
    Provider(ProviderCommand),
    /// Update request tuning (unset flags keep their current value)
    Inference(InferenceArgs),
    /// Update model parameters (unset flags keep their current value)
    Model(ModelArgs),
    /// Manage supported languages and defaults
    #[command(subcommand)]
    Language(LanguageCommand),
}

#[derive(Debug, Subcommand)]
enum ProviderCommand {
    /// List all provider profiles
    List,
    /// Show one provider profile
    Get { id: String },
    /// Show the current provider profile
    Current,
    /// Add a provider from a JSON file ("-" reads stdin)
    Add { source: PathBuf },
    /// Replace a provider (matched by id) from a JSON file ("-" reads stdin)
    Update { source: PathBuf },
    /// Delete a provider profile
    Delete { id: String },
    /// Make a provider the current one
    Use { id: String },
}

#[derive(Debug, Args)]
struct InferenceArgs {
    /// Request timeout in seconds (1-600)
    #[arg(long)]
    timeout: Option<u32>,
    /// Retry count (0-10)
    #[arg(long)]
    retries: Option<u32>,
    /// Ask for markdown output
    #[arg(long)]
    markdown: Option<bool>,
}

#[derive(Debug, Args)]
struct ModelArgs {
    /// Model identifier
    #[arg(long)]
    name: Option<String>,
    /// Sampling temperature (0-2); enables temperature
    #[arg(long, conflicts_with = "no_temperature")]
    temperature: Option<f64>,
    /// Stop sending a temperature
    #[arg(long)]
    no_temperature: bool,
}

#[derive(Debug, Subcommand)]
enum LanguageCommand {
    /// List supported languages and defaults
    List,
    /// Add a supported language
    Add { lang: String },
    /// Remove a supported language
    Remove { lang: String },
    /// Set the default input language
    Input { lang: String },
    /// Set the default output language
    Output { lang: String },
}

/// provider JSON 입력 위치.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl From<PathBuf> for InputSource {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

/// 현재 값 위에 덮어쓸 추론 설정 변경분.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferencePatch {
    pub timeout_seconds: Option<u32>,
    pub max_retries: Option<u32>,
    pub use_markdown_output: Option<bool>,
}

/// 현재 값 위에 덮어쓸 모델 설정 변경분.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelPatch {
    pub name: Option<String>,
    /// Some(None)은 temperature 비활성화.
    pub temperature: Option<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    Inspect,
    Show,
    Metadata,
    Reset,
    ListProviders,
    GetProvider(String),
    CurrentProvider,
    AddProvider(InputSource),
    UpdateProvider(InputSource),
    DeleteProvider(String),
    UseProvider(String),
    SetInference(InferencePatch),
    SetModel(ModelPatch),
    ListLanguages,
    AddLanguage(String),
    RemoveLanguage(String),
    SetInputLanguage(String),
    SetOutputLanguage(String),
}

/// 파싱 결과: 설정 파일 경로 override + 실행할 동작.
#[derive(Debug, Clone, PartialEq)]
pub struct CliInvocation {
    pub settings_path: Option<PathBuf>,
    pub action: CliAction,
}

impl Cli {
    pub fn parse_invocation() -> CliInvocation {
        Cli::parse().into_invocation()
    }

    fn into_invocation(self) -> CliInvocation {
        // 하위 명령이 없으면 진단 출력이 기본 동작이다.
        let action = match self.command {
            None | Some(Commands::Inspect) => CliAction::Inspect,
            Some(Commands::Show) => CliAction::Show,
            Some(Commands::Metadata) => CliAction::Metadata,
            Some(Commands::Reset) => CliAction::Reset,
            Some(Commands::Provider(cmd)) => match cmd {
                ProviderCommand::List => CliAction::ListProviders,
                ProviderCommand::Get { id } => CliAction::GetProvider(id),
                ProviderCommand::Current => CliAction::CurrentProvider,
                ProviderCommand::Add { source } => CliAction::AddProvider(source.into()),
                ProviderCommand::Update { source } => CliAction::UpdateProvider(source.into()),
                ProviderCommand::Delete { id } => CliAction::DeleteProvider(id),
                ProviderCommand::Use { id } => CliAction::UseProvider(id),
            },
            Some(Commands::Inference(args)) => CliAction::SetInference(InferencePatch {
                timeout_seconds: args.timeout,
                max_retries: args.retries,
                use_markdown_output: args.markdown,
            }),
            Some(Commands::Model(args)) => {
                let temperature = if args.no_temperature {
                    Some(None)
                } else {
                    args.temperature.map(Some)
                };
                CliAction::SetModel(ModelPatch {
                    name: args.name,
                    temperature,
                })
            }
            Some(Commands::Language(cmd)) => match cmd {
                LanguageCommand::List => CliAction::ListLanguages,
                LanguageCommand::Add { lang } => CliAction::AddLanguage(lang),
                LanguageCommand::Remove { lang } => CliAction::RemoveLanguage(lang),
                LanguageCommand::Input { lang } => CliAction::SetInputLanguage(lang),
                LanguageCommand::Output { lang } => CliAction::SetOutputLanguage(lang),
            },
        };

        CliInvocation {
            settings_path: self.settings,
            action,
        }
    }
}
