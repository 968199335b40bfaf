/// 单个投稿处理
///
/// 解释 → 渲染 → 提交 → 通知，任何一步失败都不会发布部分文章
use tracing::{error, info, warn};

use crate::error::AppResult;
use crate::models::Submission;
use crate::services::{AssetUploader, Publisher};
use crate::workflow::{interpret, render, SubmissionCtx};

/// 完成通知的标题
pub const COMPLETE_SUBJECT: &str = "【取材完了】 ";
/// 失败通知的标题
pub const ERROR_SUBJECT: &str = "Error";

/// 已发布的文章
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPost {
    pub post_id: String,
    pub document_text: String,
}

/// 处理一次投稿，文章ID和生成时间取当前时间
pub async fn process_submission(
    submission: &Submission,
    uploader: &dyn AssetUploader,
    publisher: &dyn Publisher,
    mail_to: &str,
) -> AppResult<PublishedPost> {
    let ctx = SubmissionCtx::generate();
    process_submission_with_ctx(submission, &ctx, uploader, publisher, mail_to).await
}

/// 使用指定上下文处理一次投稿
///
/// 成功时发送完成通知（正文为文章全文）；失败时发送 Error 通知（正文为错误信息）并返回错误。
/// 通知本身的失败只记录日志。
pub async fn process_submission_with_ctx(
    submission: &Submission,
    ctx: &SubmissionCtx,
    uploader: &dyn AssetUploader,
    publisher: &dyn Publisher,
    mail_to: &str,
) -> AppResult<PublishedPost> {
    info!(
        "{} 📝 开始处理投稿: {} ({} 组问答)",
        ctx,
        submission.display_name(),
        submission.responses.len()
    );

    match build_and_publish(submission, ctx, uploader, publisher).await {
        Ok(published) => {
            info!("{} ✓ 文章已发布", ctx);
            notify(publisher, mail_to, COMPLETE_SUBJECT, &published.document_text, ctx).await;
            Ok(published)
        }
        Err(e) => {
            error!("{} ❌ 投稿处理失败: {}", ctx, e);
            notify(publisher, mail_to, ERROR_SUBJECT, &e.to_string(), ctx).await;
            Err(e)
        }
    }
}

async fn build_and_publish(
    submission: &Submission,
    ctx: &SubmissionCtx,
    uploader: &dyn AssetUploader,
    publisher: &dyn Publisher,
) -> AppResult<PublishedPost> {
    let document = interpret(&submission.responses, ctx, uploader).await?;
    let document_text = render(&document);

    info!("{} 📤 正在提交文章...", ctx);
    publisher.commit(&ctx.post_id, &document_text).await?;

    Ok(PublishedPost {
        post_id: ctx.post_id.clone(),
        document_text,
    })
}

async fn notify(
    publisher: &dyn Publisher,
    mail_to: &str,
    subject: &str,
    body: &str,
    ctx: &SubmissionCtx,
) {
    if let Err(e) = publisher.notify(mail_to, subject, body).await {
        warn!("{} ⚠️ 通知发送失败 (标题: {}): {}", ctx, subject.trim(), e);
    }
}
