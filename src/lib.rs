//! # Interview Post
//!
//! 把一次采访表单投稿（有序的问答列表）编译为博客文章并发布到 GitHub 仓库
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 只负责与外部系统通信
//! - `GithubClient` - contents API 文件写入
//! - `MailClient` - 邮件中继
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心题目
//! - `AssetUploader` - 上传图片并返回公开路径
//! - `Publisher` - 保存文章、发送通知
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次投稿"如何变成一篇文章
//! - `InterpreterState` - 模板选择与游标的状态机（纯函数）
//! - `ContentBuilder` - 正文块构建
//! - `render` - 文档渲染
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/submission_processor` - 解释 → 渲染 → 提交 → 通知
//! - `orchestrator/batch_processor` - 顺序处理文件夹中的全部投稿
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ContentBlock, Document, QuestionAnswer, Submission, TemplateType};
pub use orchestrator::{process_submission, App};
pub use services::{AssetUploader, Publisher};
pub use workflow::{interpret, render, InterpreterState, SubmissionCtx};
