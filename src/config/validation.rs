use crate::config::types::{
    Config, CrawlConfig, FrameworkConfig, ReportConfig, OUTPUT_PLACEHOLDER,
};
use crate::ConfigError;

/// Validates the entire configuration
///
/// Called after the file is parsed and again after command-line overrides
/// are applied, so both sources go through the same checks.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_framework_config(&config.framework)?;
    validate_crawl_config(&config.crawl)?;
    validate_report_config(&config.report)?;
    Ok(())
}

/// Validates the framework invocation
fn validate_framework_config(config: &FrameworkConfig) -> Result<(), ConfigError> {
    if config.program.trim().is_empty() {
        return Err(ConfigError::Validation(
            "framework program cannot be empty".to_string(),
        ));
    }

    if !config
        .crawl_args
        .iter()
        .any(|arg| arg.contains(OUTPUT_PLACEHOLDER))
    {
        return Err(ConfigError::Validation(format!(
            "crawl-args must reference the output file with '{}', got {:?}",
            OUTPUT_PLACEHOLDER, config.crawl_args
        )));
    }

    Ok(())
}

/// Validates the crawl target
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.spider.is_empty() {
        return Err(ConfigError::Validation(
            "spider name cannot be empty".to_string(),
        ));
    }

    if config.output.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }

    if config.output_dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output-dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output validation settings
fn validate_report_config(config: &ReportConfig) -> Result<(), ConfigError> {
    if let Some(field) = config.required_fields.iter().find(|f| f.is_empty()) {
        return Err(ConfigError::Validation(format!(
            "required-fields cannot contain an empty name, got {:?}",
            field
        )));
    }

    Ok(())
}
