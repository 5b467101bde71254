use crate::config::toml_config::AnalysisConfig;
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-analysis")]
#[command(about = "Clean, filter, summarize and chart a CSV column")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Drop rows with missing values and write the cleaned CSV
    Clean(CleanArgs),
    /// Print the first rows whose field exceeds the threshold
    Filter(FilterArgs),
    /// Render the value distribution of a field as a bar chart
    Visualize(VisualizeArgs),
    /// Print mean, median and standard deviation of a field
    Stats(StatsArgs),
    /// Clean, then filter, summarize and chart in one pass
    Run(RunArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct CleanArgs {
    /// Raw CSV to clean [default: my_data.csv]
    #[arg(long)]
    pub input: Option<String>,

    /// Where to write the cleaned CSV [default: cleaned_data.csv]
    #[arg(long)]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Cleaned CSV to read [default: cleaned_data.csv]
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long)]
    pub field: Option<String>,

    #[arg(long)]
    pub threshold: Option<f64>,

    /// Maximum number of rows to print
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct VisualizeArgs {
    /// Cleaned CSV to read [default: cleaned_data.csv]
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long)]
    pub field: Option<String>,

    /// PNG to write [default: age_distribution.png]
    #[arg(long)]
    pub output: Option<String>,

    /// Only write the PNG, do not open it in the system image viewer
    #[arg(long)]
    pub no_show: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct StatsArgs {
    /// Cleaned CSV to read [default: cleaned_data.csv]
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long)]
    pub field: Option<String>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Raw CSV to analyze [default: my_data.csv]
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long)]
    pub field: Option<String>,

    /// Keep the cleaned table in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Skip rendering the distribution chart
    #[arg(long)]
    pub no_chart: bool,

    /// Only write the PNG, do not open it in the system image viewer
    #[arg(long)]
    pub no_show: bool,
}

fn set_if<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

impl CliConfig {
    /// 依序套用：內建預設值 → TOML 設定檔 → 命令列參數
    pub fn resolve(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_file(path)?,
            None => AnalysisConfig::default(),
        };
        self.command.apply(&mut config);
        Ok(config)
    }
}

impl Command {
    /// For the analysis commands `--input` names the cleaned artifact they read.
    pub fn apply(&self, config: &mut AnalysisConfig) {
        match self {
            Command::Clean(args) => {
                set_if(&mut config.input_path, &args.input);
                set_if(&mut config.output_path, &args.output);
            }
            Command::Filter(args) => {
                set_if(&mut config.output_path, &args.input);
                set_if(&mut config.field_name, &args.field);
                set_if(&mut config.threshold, &args.threshold);
                set_if(&mut config.row_limit, &args.limit);
            }
            Command::Visualize(args) => {
                set_if(&mut config.output_path, &args.input);
                set_if(&mut config.field_name, &args.field);
                set_if(&mut config.chart_path, &args.output);
                config.chart.show &= !args.no_show;
            }
            Command::Stats(args) => {
                set_if(&mut config.output_path, &args.input);
                set_if(&mut config.field_name, &args.field);
            }
            Command::Run(args) => {
                set_if(&mut config.input_path, &args.input);
                set_if(&mut config.field_name, &args.field);
                config.chart.show &= !args.no_show;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::chart::display_available;

    #[test]
    fn test_commands_without_arguments_use_defaults() {
        let cli = CliConfig::try_parse_from(["small-analysis", "clean"]).unwrap();
        let config = cli.resolve().unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_filter_overrides() {
        let cli = CliConfig::try_parse_from([
            "small-analysis",
            "filter",
            "--input",
            "other.csv",
            "--field",
            "score",
            "--threshold",
            "50",
            "--limit",
            "2",
        ])
        .unwrap();
        let config = cli.resolve().unwrap();

        assert_eq!(config.output_path, "other.csv");
        assert_eq!(config.input_path, "my_data.csv");
        assert_eq!(config.field_name, "score");
        assert_eq!(config.threshold, 50.0);
        assert_eq!(config.row_limit, 2);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = CliConfig::try_parse_from(["small-analysis", "stats", "--json", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Stats(StatsArgs { json: true, .. })));
    }

    #[test]
    fn test_visualize_presents_by_default_when_display_available() {
        let cli = CliConfig::try_parse_from(["small-analysis", "visualize"]).unwrap();
        let config = cli.resolve().unwrap();
        assert_eq!(config.chart.show, display_available());
        assert_eq!(config.chart_path, "age_distribution.png");
    }

    #[test]
    fn test_no_show_flag_disables_presenting() {
        for command in ["visualize", "run"] {
            let cli = CliConfig::try_parse_from(["small-analysis", command, "--no-show"]).unwrap();
            let config = cli.resolve().unwrap();
            assert!(!config.chart.show);
        }
    }
}
