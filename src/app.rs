use thiserror::Error;

use crate::config::{self, Config};
use crate::i18n::{self, Translator};
use crate::ui_cli::{self, Cli, Command};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    /// JSON 출력 오류
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 설정의 언어 항목과 CLI 플래그로 번역기를 만든다.
pub fn translator_for(cli_lang: &str, cfg: &Config) -> Translator {
    let lang_code = i18n::resolve_language(cli_lang, Some(cfg.language.as_str()));
    log::debug!("output language resolved: {lang_code}");
    Translator::new_with_pack(&lang_code, cfg.language_pack_dir.as_deref())
}

/// 설정을 읽고 하위 명령을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let tr = translator_for(&cli.lang, &cfg);
    let format = cli.format;

    match &cli.command {
        Command::Report(o) => ui_cli::handle_report(&o.apply(&cfg.inputs), &tr, format),
        Command::Bess(o) => ui_cli::handle_bess(&o.apply(&cfg.inputs), &tr, format),
        Command::Cii(o) => ui_cli::handle_cii(&o.apply(&cfg.inputs), &tr, format),
        Command::Roi(o) => ui_cli::handle_roi(&o.apply(&cfg.inputs), &tr, format),
        Command::Eexi(o) => ui_cli::handle_eexi(&o.apply(&cfg.inputs), &tr, format),
        Command::Savings(o) => ui_cli::handle_savings(&o.apply(&cfg.inputs), &tr, format),
        Command::InitConfig(o) => {
            cfg.inputs = o.apply(&cfg.inputs);
            ui_cli::handle_init_config(&cfg, &cli.config, &tr)
        }
    }
}
