use crate::domain::model::{Keyword, KeywordRule};
use crate::utils::error::{DetectError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["py", "ipynb"];

/// 掃描設定，可由 TOML 檔案提供
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_rules")]
    pub keywords: Vec<KeywordRule>,
}

fn default_extensions() -> Vec<String> {
    SUPPORTED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

fn default_rules() -> Vec<KeywordRule> {
    Keyword::ALL.into_iter().map(KeywordRule::from).collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            keywords: default_rules(),
        }
    }
}

impl ScanConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: ScanConfig = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${KEYWORD})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|allowed| allowed == extension)
    }
}

impl Validate for ScanConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_extensions("extensions", &self.extensions, &SUPPORTED_EXTENSIONS)?;

        if self.keywords.is_empty() {
            return Err(DetectError::MissingConfigError {
                field: "keywords".to_string(),
            });
        }

        for rule in &self.keywords {
            validation::validate_non_empty_string("keywords.name", &rule.name)?;
            validation::validate_non_empty_string("keywords.message", &rule.message)?;
        }
        validation::validate_unique("keywords.name", self.keywords.iter().map(|rule| rule.name.as_str()))?;

        Ok(())
    }
}
