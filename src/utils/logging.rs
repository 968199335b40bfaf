/// 日志工具模块
///
/// 初始化 tracing 订阅器，并提供日志格式化和输出的辅助函数
use crate::config::Config;
use crate::models::vocabulary::VOCABULARY_VERSION;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`；未设置时默认 `info`，详细模式下为 `debug`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 投稿转文章模式");
    info!(
        "📦 目标仓库: {}/{} (分支: {})",
        config.github_owner,
        config.github_repo,
        config.github_branch.as_deref().unwrap_or("默认")
    );
    info!("📖 词汇表版本: v{}", VOCABULARY_VERSION);
    info!("{}", "=".repeat(60));
}

/// 记录投稿加载信息
pub fn log_submissions_loaded(total: usize) {
    info!("✓ 找到 {} 个待处理的投稿", total);
    info!("📋 将逐个顺序处理\n");
}

/// 记录单个投稿开始
pub fn log_submission_start(index: usize, total: usize, name: &str) {
    info!("\n{}", "─".repeat(60));
    info!("📄 投稿 {}/{}: {}", index, total, name);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(success: usize, failed: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
