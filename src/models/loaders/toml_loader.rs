use crate::error::{AppError, AppResult, FileError};
use crate::models::submission::Submission;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 TOML 文件加载一次投稿
pub async fn load_submission(toml_file_path: &Path) -> AppResult<Submission> {
    let path_display = toml_file_path.display().to_string();

    if !toml_file_path.exists() {
        return Err(FileError::NotFound { path: path_display }.into());
    }

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_display, e))?;

    let mut submission: Submission =
        toml::from_str(&content).map_err(|e| FileError::TomlParseFailed {
            path: path_display,
            source: e,
        })?;

    submission.file_path = Some(toml_file_path.to_string_lossy().to_string());

    Ok(submission)
}

/// 从文件夹中加载所有 TOML 投稿，按文件名排序
///
/// 无法解析的文件会记录警告并跳过
pub async fn load_all_submissions(folder_path: &str) -> AppResult<Vec<Submission>> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        }
        .into());
    }

    let mut toml_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .map_err(|e| FileError::ReadFailed {
            path: folder_path.to_string(),
            source: e,
        })?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| FileError::ReadFailed {
            path: folder_path.to_string(),
            source: e,
        })?
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml_files.push(path);
        }
    }
    toml_files.sort();

    let mut submissions = Vec::with_capacity(toml_files.len());
    for path in toml_files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_submission(&path).await {
            Ok(submission) => {
                tracing::info!("成功加载 {} 组问答", submission.responses.len());
                submissions.push(submission);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(submissions)
}
