use clap::Parser;
use small_calc::core::ConfigProvider;
use small_calc::utils::error::CalcError;
use small_calc::utils::{logger, validation::Validate};
use small_calc::{Calculator, CliConfig, TomlConfig};

fn main() {
    let mut config = CliConfig::parse();

    // 載入並驗證 TOML 配置 (若有指定)，日誌初始化前完成
    let toml = match load_toml(config.config.as_deref()) {
        Ok(toml) => toml,
        Err(e) => fail(&e),
    };

    logger::init_cli_logger(config.verbose, toml.as_ref().and_then(|t| t.log_level()));
    tracing::debug!("CLI config: {:?}", config);

    if let Some(toml) = &toml {
        config.merge_toml(toml);
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let calculator = Calculator::from_config(&config);
    tracing::debug!("Division policy: {:?}", calculator.policy());

    let outcome = calculator.evaluate_expression(&config.expression()).and_then(|calc| {
        tracing::debug!("{}", calc);
        calc.render(config.json, config.precision())
    });

    match outcome {
        Ok(output) => println!("{}", output),
        Err(e) => fail(&e),
    }
}

fn load_toml(path: Option<&str>) -> small_calc::Result<Option<TomlConfig>> {
    let Some(path) = path else {
        return Ok(None);
    };
    TomlConfig::load_validated(path).map(Some)
}

fn fail(e: &CalcError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}
