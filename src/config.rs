use crate::error::{AppResult, ConfigError};

/// 程序配置
///
/// 初始化后只读，多个投稿之间共享
#[derive(Clone, Debug)]
pub struct Config {
    /// 待处理投稿（TOML）存放目录
    pub submission_folder: String,
    /// 图片等资源文件所在目录
    pub assets_dir: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- GitHub 配置 ---
    pub github_api_base_url: String,
    pub github_owner: String,
    pub github_repo: String,
    pub github_branch: Option<String>,
    pub github_access_token: String,
    pub committer_name: String,
    pub committer_email: String,
    // --- 邮件配置 ---
    pub mail_api_url: String,
    pub mail_to: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            submission_folder: "submissions".to_string(),
            assets_dir: "assets".to_string(),
            verbose_logging: false,
            github_api_base_url: "https://api.github.com".to_string(),
            github_owner: String::new(),
            github_repo: "interview".to_string(),
            github_branch: None,
            github_access_token: String::new(),
            committer_name: "interview-bot".to_string(),
            committer_email: "interview-bot@users.noreply.github.com".to_string(),
            mail_api_url: "http://localhost:8025/api/send".to_string(),
            mail_to: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            submission_folder: std::env::var("SUBMISSION_FOLDER").unwrap_or(default.submission_folder),
            assets_dir: std::env::var("ASSETS_DIR").unwrap_or(default.assets_dir),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            github_api_base_url: std::env::var("GITHUB_API_BASE_URL").unwrap_or(default.github_api_base_url),
            github_owner: std::env::var("GITHUB_OWNER").unwrap_or(default.github_owner),
            github_repo: std::env::var("GITHUB_REPO").unwrap_or(default.github_repo),
            github_branch: std::env::var("GITHUB_BRANCH").ok().filter(|v| !v.is_empty()).or(default.github_branch),
            github_access_token: std::env::var("GITHUB_ACCESS_TOKEN").unwrap_or(default.github_access_token),
            committer_name: std::env::var("COMMITTER_NAME").unwrap_or(default.committer_name),
            committer_email: std::env::var("COMMITTER_EMAIL").unwrap_or(default.committer_email),
            mail_api_url: std::env::var("MAIL_API_URL").unwrap_or(default.mail_api_url),
            mail_to: std::env::var("MAIL_TO").unwrap_or(default.mail_to),
        }
    }

    /// 检查必填项
    ///
    /// 缺少仓库所有者、访问令牌或收件人时返回对应的环境变量名
    pub fn validate(&self) -> AppResult<()> {
        let required = [
            ("GITHUB_OWNER", &self.github_owner),
            ("GITHUB_ACCESS_TOKEN", &self.github_access_token),
            ("MAIL_TO", &self.mail_to),
        ];

        for (var_name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EnvVarNotFound {
                    var_name: var_name.to_string(),
                }
                .into());
            }
        }

        if let Ok(raw) = std::env::var("VERBOSE_LOGGING") {
            if raw.parse::<bool>().is_err() {
                return Err(ConfigError::EnvVarParseFailed {
                    var_name: "VERBOSE_LOGGING".to_string(),
                    value: raw,
                    expected_type: "bool".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn filled() -> Config {
        Config {
            github_owner: "someone".to_string(),
            github_access_token: "token".to_string(),
            mail_to: "editor@example.com".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_default_config_is_missing_required_values() {
        let err = Config::default().validate().unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::EnvVarNotFound { ref var_name }) if var_name == "GITHUB_OWNER"
        ));
    }

    #[test]
    fn test_missing_token_is_reported() {
        let config = Config {
            github_access_token: "  ".to_string(),
            ..filled()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("GITHUB_ACCESS_TOKEN"));
    }
}
