/// GitHub API 客户端
///
/// 只封装 contents API 的文件写入，每次调用产生一个提交
use crate::config::Config;
use crate::error::ApiError;
use base64::Engine;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// 提交者信息
#[derive(Debug, Clone, Serialize)]
pub struct Committer {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
struct PutContentsRequest<'a> {
    message: &'a str,
    committer: &'a Committer,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
}

/// GitHub 客户端
pub struct GithubClient {
    http: reqwest::Client,
    api_base_url: String,
    owner: String,
    repo: String,
    branch: Option<String>,
    token: String,
    committer: Committer,
}

impl GithubClient {
    /// 创建新的 GitHub 客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base_url: config.github_api_base_url.trim_end_matches('/').to_string(),
            owner: config.github_owner.clone(),
            repo: config.github_repo.clone(),
            branch: config.github_branch.clone(),
            token: config.github_access_token.clone(),
            committer: Committer {
                name: config.committer_name.clone(),
                email: config.committer_email.clone(),
            },
        }
    }

    /// 文件在 contents API 中的地址
    pub fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base_url,
            self.owner,
            self.repo,
            path.trim_start_matches('/')
        )
    }

    /// 创建文件
    ///
    /// # 参数
    /// - `path`: 仓库内路径
    /// - `message`: 提交信息
    /// - `content`: 文件内容（原始字节，发送前做 base64 编码）
    ///
    /// # 返回
    /// 返回 API 响应 JSON
    pub async fn put_file(&self, path: &str, message: &str, content: &[u8]) -> Result<Value, ApiError> {
        let url = self.contents_url(path);
        let request = PutContentsRequest {
            message,
            committer: &self.committer,
            content: base64::engine::general_purpose::STANDARD.encode(content),
            branch: self.branch.as_deref(),
        };

        debug!("写入文件: {} ({} 字节)", url, content.len());

        let response = self
            .http
            .put(&url)
            .header(reqwest::header::AUTHORIZATION, format!("token {}", self.token))
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header(reqwest::header::USER_AGENT, "interview_post")
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(&url, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(&url, e))?;

        if !status.is_success() {
            return Err(ApiError::BadResponse {
                endpoint: url,
                status: status.as_u16(),
                message: Self::error_message(&text),
            });
        }

        let result: Value = serde_json::from_str(&text)?;

        debug!("写入结果: {}", result);

        Ok(result)
    }

    /// 从错误响应中提取 message 字段
    fn error_message(body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.to_string())
    }
}
