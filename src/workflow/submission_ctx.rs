//! 投稿处理上下文
//!
//! 封装"正在处理哪一篇文章"这一信息，在解释开始时创建，之后不再修改

use chrono::{DateTime, SecondsFormat, TimeZone};
use std::fmt::Display;

/// 投稿处理上下文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionCtx {
    /// 文章ID，用于资源路径和文章文件名
    pub post_id: String,

    /// 生成时间（RFC 3339，带时区）
    pub generated_at: String,
}

impl SubmissionCtx {
    pub fn new(post_id: impl Into<String>, generated_at: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            generated_at: generated_at.into(),
        }
    }

    /// 以当前本地时间创建上下文
    pub fn generate() -> Self {
        Self::at(&chrono::Local::now())
    }

    /// 以指定时间创建上下文，文章ID为该时刻的 Unix 秒
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        Self {
            post_id: now.timestamp().to_string(),
            generated_at: now.to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }
}

impl Display for SubmissionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文章 ID#{}]", self.post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_ctx_from_fixed_time() {
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = jst.with_ymd_and_hms(2019, 1, 1, 9, 0, 0).unwrap();

        let ctx = SubmissionCtx::at(&now);

        assert_eq!(ctx.post_id, "1546300800");
        assert_eq!(ctx.generated_at, "2019-01-01T09:00:00+09:00");
        assert_eq!(ctx.to_string(), "[文章 ID#1546300800]");
    }
}
