use serde::Deserialize;

/// Placeholder in `crawl-args` replaced by the spider name
pub const SPIDER_PLACEHOLDER: &str = "{spider}";

/// Placeholder in `crawl-args` replaced by the output file path
pub const OUTPUT_PLACEHOLDER: &str = "{output}";

/// Main configuration structure for Spider-Run
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub framework: FrameworkConfig,
    pub crawl: CrawlConfig,
    pub report: ReportConfig,
}

/// How to invoke the external crawling framework
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FrameworkConfig {
    /// Executable name or path of the framework CLI
    pub program: String,

    /// Arguments that make the framework list its spiders
    #[serde(rename = "list-args")]
    pub list_args: Vec<String>,

    /// Arguments for a crawl; `{spider}` and `{output}` are substituted
    #[serde(rename = "crawl-args")]
    pub crawl_args: Vec<String>,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            program: "scrapy".to_string(),
            list_args: vec!["list".to_string()],
            crawl_args: vec![
                "crawl".to_string(),
                SPIDER_PLACEHOLDER.to_string(),
                "-o".to_string(),
                OUTPUT_PLACEHOLDER.to_string(),
            ],
        }
    }
}

impl FrameworkConfig {
    /// Returns the crawl arguments with placeholders substituted
    pub fn resolve_crawl_args(&self, spider: &str, output: &str) -> Vec<String> {
        self.crawl_args
            .iter()
            .map(|arg| {
                arg.replace(SPIDER_PLACEHOLDER, spider)
                    .replace(OUTPUT_PLACEHOLDER, output)
            })
            .collect()
    }
}

/// What to crawl and where the results go
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Name of the spider known to the framework
    pub spider: String,

    /// JSON-lines file written by the framework
    pub output: String,

    /// Directory created before the crawl starts
    #[serde(rename = "output-dir")]
    pub output_dir: String,

    /// Remove an existing output file before crawling instead of appending to it
    #[serde(rename = "fresh-output")]
    pub fresh_output: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            spider: "articles-spider".to_string(),
            output: "items.jl".to_string(),
            output_dir: "wikipages".to_string(),
            fresh_output: false,
        }
    }
}

/// Diagnostics and output validation switches
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Print the working directory tree before crawling
    #[serde(rename = "show-tree")]
    pub show_tree: bool,

    /// Run the framework's spider listing before crawling
    #[serde(rename = "list-spiders")]
    pub list_spiders: bool,

    /// Fields every JSON record is expected to carry with a non-empty value
    #[serde(rename = "required-fields")]
    pub required_fields: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_tree: true,
            list_spiders: true,
            required_fields: Vec::new(),
        }
    }
}
