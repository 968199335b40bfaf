//! 表单题目词汇表
//!
//! 所有分类都基于题目文本的精确匹配（区分大小写）。
//! 表外的题目一律返回 `None`，由调用方按无操作处理。
//! 表单改版时同步修改这里并递增 `VOCABULARY_VERSION`。

use crate::models::document::{FrontMatterKey, TemplateType};
use phf::phf_map;

/// 词汇表版本
pub const VOCABULARY_VERSION: u32 = 1;

/// 模板选择题
pub const TEMPLATE_LIST_LABEL: &str = "テンプレート一覧";
/// 插入图片（可选）
pub const INSERT_IMAGE_LABEL: &str = "画像を差し込む(オプション)";
/// 图片说明（可选）
pub const IMAGE_DESCRIPTION_LABEL: &str = "画像の説明(オプション)";
/// 服务名
pub const SERVICE_NAME_LABEL: &str = "サービス名";

/// 模板选择前阶段的题目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterLabel {
    /// 直接写入回答
    Text(FrontMatterKey),
    /// 回答是资源引用，上传后写入路径
    Image(FrontMatterKey),
    /// 模板选择题
    TemplateList,
}

static FRONT_MATTER_LABELS: phf::Map<&'static str, FrontMatterLabel> = phf_map! {
    "自己紹介" => FrontMatterLabel::Text(FrontMatterKey::SelfIntroduction),
    "タイトル" => FrontMatterLabel::Text(FrontMatterKey::Title),
    "サブタイトル" => FrontMatterLabel::Text(FrontMatterKey::SubTitle),
    "キャプチャ画像" => FrontMatterLabel::Image(FrontMatterKey::CaptchaImage),
    "テンプレート一覧" => FrontMatterLabel::TemplateList,
    "ニックネーム" => FrontMatterLabel::Text(FrontMatterKey::Nickname),
    "アイコン" => FrontMatterLabel::Image(FrontMatterKey::IconImage),
    "Twitterアカウント名(@の後)" => FrontMatterLabel::Text(FrontMatterKey::TwitterAccountName),
};

/// 模板选择题的回答 → 模板
///
/// 个人开发模板同时接受旧表单中的拼写
static TEMPLATE_ANSWERS: phf::Map<&'static str, TemplateType> = phf_map! {
    "個人開発サービス紹介" => TemplateType::IndividualDeveloper,
    "個人発開発サービス紹介" => TemplateType::IndividualDeveloper,
    "しない(フルカスタム)" => TemplateType::FullCustom,
};

/// 个人开发模板的四个固定问题
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeQuestion {
    Service,
    Motivation,
    Highlight,
    Aspiration,
}

impl NarrativeQuestion {
    pub const ALL: [NarrativeQuestion; 4] = [
        NarrativeQuestion::Service,
        NarrativeQuestion::Motivation,
        NarrativeQuestion::Highlight,
        NarrativeQuestion::Aspiration,
    ];

    /// 题目原文，同时作为正文块的 question
    pub fn label(self) -> &'static str {
        match self {
            NarrativeQuestion::Service => "今回紹介したいのはどういったサービスですか？",
            NarrativeQuestion::Motivation => "なぜそのようなサービスを作られたのですか？",
            NarrativeQuestion::Highlight => "このサービスのイチオシポイントはどこですか？",
            NarrativeQuestion::Aspiration => "最後に今後の意気込みをお願いします！",
        }
    }
}

/// 个人开发模板的题目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndividualDeveloperLabel {
    Narrative(NarrativeQuestion),
    ServiceName,
    InsertImage,
    ImageDescription,
}

impl IndividualDeveloperLabel {
    /// 是否开始新的正文块（第一个问题沿用块 0）
    pub fn starts_new_block(self) -> bool {
        matches!(
            self,
            IndividualDeveloperLabel::Narrative(q) if q != NarrativeQuestion::Service
        )
    }
}

static INDIVIDUAL_DEVELOPER_LABELS: phf::Map<&'static str, IndividualDeveloperLabel> = phf_map! {
    "今回紹介したいのはどういったサービスですか？" => IndividualDeveloperLabel::Narrative(NarrativeQuestion::Service),
    "なぜそのようなサービスを作られたのですか？" => IndividualDeveloperLabel::Narrative(NarrativeQuestion::Motivation),
    "このサービスのイチオシポイントはどこですか？" => IndividualDeveloperLabel::Narrative(NarrativeQuestion::Highlight),
    "最後に今後の意気込みをお願いします！" => IndividualDeveloperLabel::Narrative(NarrativeQuestion::Aspiration),
    "サービス名" => IndividualDeveloperLabel::ServiceName,
    "画像を差し込む(オプション)" => IndividualDeveloperLabel::InsertImage,
    "画像の説明(オプション)" => IndividualDeveloperLabel::ImageDescription,
};

/// 完全自定义模板的题目，序号从 1 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullCustomLabel {
    Question(u8),
    Answer(u8),
    InsertImage,
    ImageDescription,
}

impl FullCustomLabel {
    /// 是否开始新的正文块（質問① 沿用块 0）
    pub fn starts_new_block(self) -> bool {
        matches!(self, FullCustomLabel::Question(n) if n > 1)
    }
}

static FULL_CUSTOM_LABELS: phf::Map<&'static str, FullCustomLabel> = phf_map! {
    "質問①" => FullCustomLabel::Question(1),
    "質問②" => FullCustomLabel::Question(2),
    "質問③" => FullCustomLabel::Question(3),
    "質問④" => FullCustomLabel::Question(4),
    "質問⑤" => FullCustomLabel::Question(5),
    "質問⑥" => FullCustomLabel::Question(6),
    "回答①" => FullCustomLabel::Answer(1),
    "回答②" => FullCustomLabel::Answer(2),
    "回答③" => FullCustomLabel::Answer(3),
    "回答④" => FullCustomLabel::Answer(4),
    "回答⑤" => FullCustomLabel::Answer(5),
    "回答⑥" => FullCustomLabel::Answer(6),
    "画像を差し込む(オプション)" => FullCustomLabel::InsertImage,
    "画像の説明(オプション)" => FullCustomLabel::ImageDescription,
};

pub fn front_matter_label(question: &str) -> Option<FrontMatterLabel> {
    FRONT_MATTER_LABELS.get(question).copied()
}

pub fn template_for_answer(answer: &str) -> Option<TemplateType> {
    TEMPLATE_ANSWERS.get(answer).copied()
}

pub fn individual_developer_label(question: &str) -> Option<IndividualDeveloperLabel> {
    INDIVIDUAL_DEVELOPER_LABELS.get(question).copied()
}

pub fn full_custom_label(question: &str) -> Option<FullCustomLabel> {
    FULL_CUSTOM_LABELS.get(question).copied()
}
