use crate::adapters::chart::{display_available, ChartStyle, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::core::filtering::{DEFAULT_FIELD, DEFAULT_ROW_LIMIT, DEFAULT_THRESHOLD};
use crate::core::ConfigProvider;
use crate::utils::error::{AnalysisError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_INPUT_PATH: &str = "my_data.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "cleaned_data.csv";
pub const DEFAULT_CHART_PATH: &str = "age_distribution.png";

/// Resolved analysis settings. Every key is optional in the TOML file;
/// missing keys fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Raw CSV read by the cleaner
    pub input_path: String,
    /// Cleaned artifact written by the cleaner and read by the other commands
    pub output_path: String,
    pub chart_path: String,
    pub field_name: String,
    pub threshold: f64,
    pub row_limit: usize,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Open the chart after rendering; defaults to on when a display is available
    pub show: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            chart_path: DEFAULT_CHART_PATH.to_string(),
            field_name: DEFAULT_FIELD.to_string(),
            threshold: DEFAULT_THRESHOLD,
            row_limit: DEFAULT_ROW_LIMIT,
            chart: ChartConfig::default(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show: display_available(),
        }
    }
}

impl AnalysisConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AnalysisError::FileNotFound {
                    path: path.as_ref().display().to_string(),
                }
            } else {
                AnalysisError::IoError(e)
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AnalysisError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AnalysisError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle::for_field(&self.field_name, self.chart.width, self.chart.height)
    }

    pub fn show_chart(&self) -> bool {
        self.chart.show
    }
}

impl ConfigProvider for AnalysisConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn chart_path(&self) -> &str {
        &self.chart_path
    }

    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn row_limit(&self) -> usize {
        self.row_limit
    }
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_path", &self.input_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_path("chart_path", &self.chart_path)?;
        validation::validate_file_extension("chart_path", &self.chart_path, &["png"])?;
        validation::validate_non_empty_string("field_name", &self.field_name)?;
        validation::validate_finite("threshold", self.threshold)?;
        validation::validate_positive_number("row_limit", self.row_limit, 1)?;
        validation::validate_positive_number("chart.width", self.chart.width as usize, 100)?;
        validation::validate_positive_number("chart.height", self.chart.height as usize, 100)?;
        Ok(())
    }
}
