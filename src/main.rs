use clap::Parser;
use small_analysis::config::Command;
use small_analysis::utils::error::{AnalysisError, ErrorSeverity};
use small_analysis::utils::{logger, validation::Validate};
use small_analysis::{
    AnalysisConfig, AnalysisEngine, CleanPipeline, CliConfig, FilterPipeline, LocalStorage,
    StatsPipeline, VisualizePipeline, Workflow,
};

async fn execute(command: &Command, config: AnalysisConfig) -> Result<String, AnalysisError> {
    let storage = LocalStorage::current_dir();

    match command {
        Command::Clean(_) => {
            tracing::info!("🧹 Cleaning {}", config.input_path);
            AnalysisEngine::new(CleanPipeline::new(storage, config)).run().await
        }
        Command::Filter(_) => {
            tracing::info!("🔎 Filtering {}", config.output_path);
            AnalysisEngine::new(FilterPipeline::new(storage, config)).run().await
        }
        Command::Visualize(_) => {
            tracing::info!("🖼️ Charting {}", config.output_path);
            let style = config.chart_style();
            let show = config.show_chart();
            let pipeline = VisualizePipeline::new(storage, config, style).with_show(show);
            AnalysisEngine::new(pipeline).run().await
        }
        Command::Stats(args) => {
            tracing::info!("📊 Summarizing {}", config.output_path);
            let pipeline = StatsPipeline::new(storage, config).with_json(args.json);
            AnalysisEngine::new(pipeline).run().await
        }
        Command::Run(args) => {
            tracing::info!("🚀 Running full analysis of {}", config.input_path);
            let style = config.chart_style();
            let show = config.show_chart();
            let mut workflow = Workflow::new(storage, config, style)
                .with_persist(!args.no_persist)
                .with_show(show);
            if args.no_chart {
                workflow = workflow.without_chart();
            }
            workflow.run().await.map(|report| report.to_string())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI args: {:?}", cli);

    // 載入並驗證配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };
    tracing::debug!("Resolved config: {:?}", config);

    match execute(&cli.command, config).await {
        Ok(report) => {
            println!("{}", report);
            Ok(())
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}
