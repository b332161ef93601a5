use clap::Parser;
use gsim_serial::utils::{logger, validation::Validate};
use gsim_serial::{CliConfig, SerialEngine, SerialReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gsim-serial CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    // --check 模式：驗證既有序號，不生成
    if let Some(candidate) = config.check.as_deref() {
        let valid = gsim_serial::validate(candidate);

        if config.json {
            let report = SerialReport {
                serial: candidate.trim().to_uppercase(),
                valid,
            };
            println!("{}", report.to_json()?);
        } else if valid {
            println!("✅ {}  (valid: true)", candidate.trim());
        } else {
            println!("❌ {}  (valid: false)", candidate.trim());
        }

        if !valid {
            std::process::exit(1);
        }
        return Ok(());
    }

    // 生成模式：生成 count 個序號並逐一自我檢查
    let mut engine = SerialEngine::new(rand::thread_rng());
    let report = engine.run(config.count)?;

    if config.json {
        println!("{}", report.to_json()?);
    } else {
        println!("Generating {} serial(s):\n", config.count);
        for entry in &report.reports {
            println!("  {}  (valid: {})", entry.serial, entry.valid);
        }
    }

    if !report.all_valid {
        tracing::error!("❌ Self-check failed: a generated serial did not validate");
        eprintln!("❌ Self-check failed: a generated serial did not validate");
        std::process::exit(1);
    }

    tracing::info!("✅ Generated {} serial(s)", report.reports.len());
    Ok(())
}
