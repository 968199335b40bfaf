use serde::{Deserialize, Serialize};

/// 一组问答
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

impl QuestionAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// 一次表单投稿
///
/// `responses` 的顺序即处理顺序
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub responses: Vec<QuestionAnswer>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl Submission {
    pub fn new(responses: Vec<QuestionAnswer>) -> Self {
        Self {
            responses,
            file_path: None,
        }
    }

    /// 用于日志显示的名称
    pub fn display_name(&self) -> &str {
        self.file_path.as_deref().unwrap_or("<inline>")
    }
}
