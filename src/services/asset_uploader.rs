//! 资源上传服务 - 业务能力层
//!
//! 只负责"把一个资源放到文章目录下并返回公开路径"，不关心题目和流程

use async_trait::async_trait;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

use crate::clients::GithubClient;
use crate::config::Config;
use crate::error::{AppResult, UploadError};

/// 资源上传能力
#[async_trait]
pub trait AssetUploader: Send + Sync {
    /// 上传资源，返回可公开访问的路径
    ///
    /// # 参数
    /// - `asset_ref`: 资源引用（表单中的回答）
    /// - `post_id`: 文章ID，用于隔离不同文章的资源
    async fn upload(&self, asset_ref: &str, post_id: &str) -> AppResult<String>;
}

/// 公开路径前缀
const PUBLIC_PREFIX: &str = "/img";
/// 仓库中静态资源的根目录
const STATIC_ROOT: &str = "static";

/// 把资源提交到 GitHub 仓库的上传服务
///
/// 资源引用按配置的资源目录解析为本地文件
pub struct GithubAssetUploader {
    client: GithubClient,
    assets_dir: PathBuf,
}

impl GithubAssetUploader {
    pub fn new(config: &Config) -> Self {
        Self {
            client: GithubClient::new(config),
            assets_dir: PathBuf::from(&config.assets_dir),
        }
    }

    fn resolve(&self, asset_ref: &str) -> PathBuf {
        let path = Path::new(asset_ref);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.assets_dir.join(path)
        }
    }
}

#[async_trait]
impl AssetUploader for GithubAssetUploader {
    async fn upload(&self, asset_ref: &str, post_id: &str) -> AppResult<String> {
        let local_path = self.resolve(asset_ref);
        if !local_path.is_file() {
            return Err(UploadError::AssetNotFound {
                asset_ref: asset_ref.to_string(),
            }
            .into());
        }

        let content = tokio::fs::read(&local_path)
            .await
            .map_err(|e| UploadError::ReadFailed {
                asset_ref: asset_ref.to_string(),
                source: e,
            })?;

        let file_name = local_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let public_path = public_path(
            post_id,
            chrono::Local::now().timestamp_millis(),
            &file_name,
        );

        debug!("上传资源 {} → {}", local_path.display(), public_path);

        let message = format!("Upload image file for postId: {}", post_id);
        self.client
            .put_file(&format!("{}{}", STATIC_ROOT, public_path), &message, &content)
            .await
            .map_err(|e| UploadError::RemoteWriteFailed {
                asset_ref: asset_ref.to_string(),
                source: e,
            })?;

        Ok(public_path)
    }
}

/// 资源的公开路径：`/img/<postId>/<毫秒时间戳>_<文件名>`
pub fn public_path(post_id: &str, timestamp_millis: i64, file_name: &str) -> String {
    format!(
        "{}/{}/{}_{}",
        PUBLIC_PREFIX,
        post_id,
        timestamp_millis,
        sanitize_file_name(file_name)
    )
}

/// 把文件名中路径和 URL 不安全的字符替换为 `_`
pub fn sanitize_file_name(file_name: &str) -> String {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    let re = UNSAFE.get_or_init(|| Regex::new(r"[^\w.\-]+").expect("合法的正则表达式"));

    let sanitized = re.replace_all(file_name.trim(), "_");
    if sanitized.trim_matches(|c| c == '_' || c == '.').is_empty() {
        "asset".to_string()
    } else {
        sanitized.into_owned()
    }
}
