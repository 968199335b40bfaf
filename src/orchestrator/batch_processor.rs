use crate::config::Config;
use crate::models::{load_all_submissions, load_submission, Submission};
use crate::orchestrator::submission_processor::process_submission;
use crate::services::{GithubAssetUploader, RemotePublisher};
use crate::utils::logging;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{error, warn};

/// 应用主结构
pub struct App {
    config: Config,
    uploader: GithubAssetUploader,
    publisher: RemotePublisher,
}

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        config.validate().context("配置校验失败")?;

        logging::log_startup(&config);

        Ok(Self {
            uploader: GithubAssetUploader::new(&config),
            publisher: RemotePublisher::new(&config),
            config,
        })
    }

    /// 处理投稿文件夹中的全部投稿
    ///
    /// 投稿之间互不影响，一篇失败不会中断后续投稿
    pub async fn run(&self) -> Result<ProcessingStats> {
        let submissions = load_all_submissions(&self.config.submission_folder)
            .await
            .with_context(|| format!("无法加载投稿: {}", self.config.submission_folder))?;

        if submissions.is_empty() {
            warn!("⚠️ 没有找到待处理的TOML文件，程序结束");
            return Ok(ProcessingStats::default());
        }

        logging::log_submissions_loaded(submissions.len());

        let stats = self.process_all(&submissions).await;

        logging::print_final_stats(stats.success, stats.failed, stats.total);

        Ok(stats)
    }

    /// 处理单个投稿文件
    pub async fn run_file(&self, path: &Path) -> Result<()> {
        let submission = load_submission(path)
            .await
            .with_context(|| format!("无法加载投稿: {}", path.display()))?;

        self.process_one(&submission)
            .await
            .with_context(|| format!("投稿处理失败: {}", path.display()))?;

        Ok(())
    }

    async fn process_all(&self, submissions: &[Submission]) -> ProcessingStats {
        let mut stats = ProcessingStats {
            total: submissions.len(),
            ..Default::default()
        };

        for (idx, submission) in submissions.iter().enumerate() {
            logging::log_submission_start(idx + 1, stats.total, submission.display_name());

            match self.process_one(submission).await {
                Ok(()) => stats.success += 1,
                Err(e) => {
                    error!("[投稿 {}] ❌ 处理过程中发生错误: {}", idx + 1, e);
                    stats.failed += 1;
                }
            }
        }

        stats
    }

    async fn process_one(&self, submission: &Submission) -> crate::error::AppResult<()> {
        process_submission(
            submission,
            &self.uploader,
            &self.publisher,
            &self.config.mail_to,
        )
        .await
        .map(|_| ())
    }
}
