use clap::Parser;
use vessel_efficiency_toolbox::{app, i18n, ui_cli::Cli};

/// 프로그램의 엔트리 포인트. 로거를 초기화하고 CLI 명령을 실행한다.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let lang = cli.lang.clone();
    if let Err(err) = app::run(cli) {
        let tr = i18n::Translator::new(&i18n::resolve_language(&lang, None));
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}
