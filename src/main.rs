use anyhow::Result;
use interview_post::utils::logging;
use interview_post::{App, Config};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化应用
    let app = App::initialize(config)?;

    // 指定文件时只处理该文件，否则处理整个投稿文件夹
    match std::env::args().nth(1) {
        Some(path) => app.run_file(&PathBuf::from(path)).await?,
        None => {
            let stats = app.run().await?;
            if stats.failed > 0 {
                anyhow::bail!("{} 个投稿处理失败", stats.failed);
            }
        }
    }

    Ok(())
}
