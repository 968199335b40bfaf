//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量投稿处理器
//! - 管理应用生命周期（校验配置、创建客户端）
//! - 加载投稿文件夹（Vec<Submission>）
//! - 逐个顺序处理，输出全局统计信息
//!
//! ### `submission_processor` - 单个投稿处理器
//! - 解释 → 渲染 → 提交 → 通知
//! - 任何一步失败都放弃整篇投稿，并发送 Error 通知
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<Submission>)
//!     ↓
//! submission_processor (处理单个 Submission)
//!     ↓
//! workflow (解释器 / 正文构建 / 渲染)
//!     ↓
//! services (能力层：上传 / 发布)
//!     ↓
//! clients (GitHub / 邮件)
//! ```

pub mod batch_processor;
pub mod submission_processor;

pub use batch_processor::{App, ProcessingStats};
pub use submission_processor::{
    process_submission, process_submission_with_ctx, PublishedPost, COMPLETE_SUBJECT,
    ERROR_SUBJECT,
};
