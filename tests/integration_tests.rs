use anyhow::Result;
use small_analysis::core::filtering::filter_over_threshold;
use small_analysis::core::table_io::read_csv;
use small_analysis::{
    AnalysisConfig, AnalysisEngine, AnalysisError, CleanPipeline, FilterPipeline, LocalStorage,
    StatsPipeline, Workflow,
};
use tempfile::TempDir;

const RAW_CSV: &str = "\
name,age,city
Alice,34,Oslo
Bob,,Rome
Carol,29,Lima
Dan,41,NA
Erin,52,Kyiv
Frank,38,Pune
Grace,31,Oslo
Heidi,67,Rome
Ivan,45,Lima
";

fn write_raw(temp_dir: &TempDir) -> Result<()> {
    std::fs::write(temp_dir.path().join("my_data.csv"), RAW_CSV)?;
    Ok(())
}

/// 測試 clean → filter → stats 透過 cleaned_data.csv 串接
#[tokio::test]
async fn test_units_compose_through_cleaned_artifact() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_raw(&temp_dir)?;
    let storage = LocalStorage::new(temp_dir.path());
    let config = AnalysisConfig::default();

    let report = AnalysisEngine::new(CleanPipeline::new(storage.clone(), config.clone()))
        .run()
        .await?;
    assert_eq!(report, "Cleaned data saved to 'cleaned_data.csv'.");

    let cleaned = std::fs::read_to_string(temp_dir.path().join("cleaned_data.csv"))?;
    assert!(cleaned.starts_with("name,age,city\n"));
    assert!(!cleaned.contains("Bob"));
    assert!(!cleaned.contains("Dan"));
    assert_eq!(cleaned.lines().count(), 8);

    let filtered = AnalysisEngine::new(FilterPipeline::new(storage.clone(), config.clone()))
        .run()
        .await?;
    let names: Vec<&str> = filtered
        .lines()
        .skip(1)
        .map(|line| line.split_whitespace().nth(1).unwrap_or(""))
        .collect();
    assert_eq!(names, vec!["Alice", "Erin", "Frank", "Grace", "Heidi"]);

    let stats = AnalysisEngine::new(StatsPipeline::new(storage, config))
        .run()
        .await?;
    assert!(stats.starts_with("Mean Age: "));
    assert!(stats.contains("Median Age: 38.0"));

    Ok(())
}

/// 測試過濾結果：最多 5 筆、皆大於門檻、保持原順序
#[test]
fn test_filter_properties_on_parsed_file() -> Result<()> {
    let table = read_csv(RAW_CSV.as_bytes())?;
    let filtered = filter_over_threshold(&table, "age", 30.0, 5)?;

    assert!(filtered.len() <= 5);
    let indices: Vec<usize> = filtered.rows().iter().map(|r| r.index).collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(indices, sorted);

    let age = table.column_index("age").unwrap();
    for row in filtered.rows() {
        let value: f64 = row.cells[age].as_deref().unwrap().parse()?;
        assert!(value > 30.0);
    }
    Ok(())
}

/// 測試輸入檔不存在時回傳 FileNotFound
#[tokio::test]
async fn test_missing_input_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path());

    let result = AnalysisEngine::new(StatsPipeline::new(storage, AnalysisConfig::default()))
        .run()
        .await;

    match result {
        Err(AnalysisError::FileNotFound { path }) => assert!(path.ends_with("cleaned_data.csv")),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
    Ok(())
}

/// 測試一次執行流程，清理結果直接在記憶體內傳遞
#[tokio::test]
async fn test_workflow_with_custom_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_raw(&temp_dir)?;

    let config = AnalysisConfig::from_toml_str(
        r#"
output_path = "out/clean.csv"
threshold = 50
row_limit = 2
"#,
    )?;
    let storage = LocalStorage::new(temp_dir.path());

    let report = Workflow::new(storage, config.clone(), config.chart_style())
        .without_chart()
        .run()
        .await?;

    assert_eq!(report.cleaned.len(), 7);
    assert_eq!(report.filtered.len(), 2);
    assert!(temp_dir.path().join("out/clean.csv").exists());
    assert_eq!(report.summary.count, 7);
    assert_eq!(report.distribution.bins.len(), 7);
    Ok(())
}
