//! 发布服务 - 业务能力层
//!
//! 负责"保存文章"和"发送通知"两种能力

use async_trait::async_trait;
use tracing::debug;

use crate::clients::{GithubClient, MailClient};
use crate::config::Config;
use crate::error::{AppError, AppResult};

/// 发布能力
#[async_trait]
pub trait Publisher: Send + Sync {
    /// 以文章ID为键保存渲染后的文章
    async fn commit(&self, post_id: &str, document_text: &str) -> AppResult<()>;

    /// 发送通知
    async fn notify(&self, recipient: &str, subject: &str, body: &str) -> AppResult<()>;
}

/// 文章在仓库中的存放目录
const BLOG_DIR: &str = "src/pages/blog";

/// 文章在仓库中的路径
pub fn post_path(post_id: &str) -> String {
    format!("{}/{}.md", BLOG_DIR, post_id)
}

/// 文章提交到 GitHub，通知走邮件中继
pub struct RemotePublisher {
    github: GithubClient,
    mail: MailClient,
}

impl RemotePublisher {
    pub fn new(config: &Config) -> Self {
        Self {
            github: GithubClient::new(config),
            mail: MailClient::new(config),
        }
    }
}

#[async_trait]
impl Publisher for RemotePublisher {
    async fn commit(&self, post_id: &str, document_text: &str) -> AppResult<()> {
        let message = format!("Add a new article for postId: {}", post_id);
        let response = self
            .github
            .put_file(&post_path(post_id), &message, document_text.as_bytes())
            .await
            .map_err(|e| AppError::publish_failed(post_id, e))?;

        debug!(
            "文章已提交: {}",
            response
                .pointer("/content/html_url")
                .and_then(|v| v.as_str())
                .unwrap_or("-")
        );

        Ok(())
    }

    async fn notify(&self, recipient: &str, subject: &str, body: &str) -> AppResult<()> {
        self.mail
            .send(recipient, subject, body)
            .await
            .map_err(AppError::Notify)
    }
}
