//! 文章文档模型
//!
//! 解释器的产物，由 `workflow::document_assembler` 渲染为文本

use serde::{Deserialize, Serialize};
use std::fmt;

/// 文章模板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemplateType {
    /// 尚未选择模板
    #[default]
    Undetermined,
    /// 个人开发服务介绍
    IndividualDeveloper,
    /// 完全自定义
    FullCustom,
}

impl TemplateType {
    pub fn is_determined(self) -> bool {
        self != TemplateType::Undetermined
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateType::Undetermined => "undetermined",
            TemplateType::IndividualDeveloper => "individual-developer",
            TemplateType::FullCustom => "full-custom",
        };
        write!(f, "{}", name)
    }
}

/// Front matter 字段名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrontMatterKey {
    SelfIntroduction,
    Title,
    SubTitle,
    CaptchaImage,
    TemplateType,
    Nickname,
    IconImage,
    TwitterAccountName,
}

impl FrontMatterKey {
    /// 渲染到文档中的键名
    pub fn key(self) -> &'static str {
        match self {
            FrontMatterKey::SelfIntroduction => "selfIntroduction",
            FrontMatterKey::Title => "title",
            FrontMatterKey::SubTitle => "subTitle",
            FrontMatterKey::CaptchaImage => "captchaImage",
            FrontMatterKey::TemplateType => "templateType",
            FrontMatterKey::Nickname => "nickname",
            FrontMatterKey::IconImage => "iconImage",
            FrontMatterKey::TwitterAccountName => "twitterAccountName",
        }
    }
}

/// 一行 front matter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatterField {
    pub key: FrontMatterKey,
    pub value: String,
}

impl FrontMatterField {
    pub fn new(key: FrontMatterKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

impl fmt::Display for FrontMatterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key.key(), self.value)
    }
}

/// 正文中的一个问答块
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_description: Option<String>,
}

impl ContentBlock {
    pub fn has_image(&self) -> bool {
        self.image_path.is_some()
    }
}

/// 一篇待发布的文章
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// 生成时间（解释开始时确定）
    pub date: String,
    pub post_id: String,
    pub front_matter: Vec<FrontMatterField>,
    pub template_type: TemplateType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    pub contents: Vec<ContentBlock>,
}
