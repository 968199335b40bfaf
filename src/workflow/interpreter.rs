//! 投稿解释器 - 流程层
//!
//! 按顺序遍历问答，把一次投稿编译为 [`Document`]。
//!
//! 分两步处理每组问答：
//! 1. [`InterpreterState::classify`] 纯函数，只根据当前状态决定要做什么
//! 2. 需要上传的步骤由 [`interpret`] 调用上传服务，再交给 [`InterpreterState::apply`]
//!
//! 模板一旦确定就不再改变；确定之前只写 front matter，确定之后只写正文块。

use tracing::{debug, info};

use crate::error::AppResult;
use crate::models::vocabulary::{
    self, FrontMatterLabel, FullCustomLabel, IndividualDeveloperLabel,
};
use crate::models::{
    ContentBlock, Document, FrontMatterField, FrontMatterKey, QuestionAnswer, TemplateType,
};
use crate::services::AssetUploader;
use crate::utils::truncate_text;
use crate::workflow::content_builder::{BlockEdit, ContentBuilder};
use crate::workflow::submission_ctx::SubmissionCtx;

/// 对一组问答的处理决定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// 未识别的题目，不做任何修改
    Skip,
    FrontMatter(FrontMatterField),
    /// 上传资源后写入 front matter
    FrontMatterImage { key: FrontMatterKey, asset_ref: String },
    /// 模板选择题；无法识别的回答只写 front matter，不确定模板
    SelectTemplate {
        field: FrontMatterField,
        template: Option<TemplateType>,
    },
    /// 写入文档级的服务名，不影响游标
    ServiceName(String),
    Content { cursor: usize, edit: BlockEdit },
    /// 上传资源后设置游标所指块的图片
    ContentImage { cursor: usize, asset_ref: String },
}

impl Step {
    /// 需要上传的资源引用
    pub fn asset_ref(&self) -> Option<&str> {
        match self {
            Step::FrontMatterImage { asset_ref, .. } | Step::ContentImage { asset_ref, .. } => {
                Some(asset_ref)
            }
            _ => None,
        }
    }
}

/// 解释器状态
#[derive(Debug, Clone, Default)]
pub struct InterpreterState {
    template: TemplateType,
    cursor: usize,
    front_matter: Vec<FrontMatterField>,
    service_name: Option<String>,
    builder: ContentBuilder,
}

impl InterpreterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template(&self) -> TemplateType {
        self.template
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn front_matter(&self) -> &[FrontMatterField] {
        &self.front_matter
    }

    pub fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    pub fn contents(&self) -> &[ContentBlock] {
        self.builder.blocks()
    }

    /// 决定如何处理一组问答，不修改状态
    pub fn classify(&self, qa: &QuestionAnswer) -> Step {
        match self.template {
            TemplateType::Undetermined => self.classify_front_matter(qa),
            TemplateType::IndividualDeveloper => {
                match vocabulary::individual_developer_label(&qa.question) {
                    Some(label) => self.classify_individual_developer(label, qa),
                    None => Step::Skip,
                }
            }
            TemplateType::FullCustom => match vocabulary::full_custom_label(&qa.question) {
                Some(label) => self.classify_full_custom(label, qa),
                None => Step::Skip,
            },
        }
    }

    /// 执行一个步骤，返回新状态
    ///
    /// `uploaded_path` 是 [`Step::asset_ref`] 对应资源的上传结果，其它步骤忽略该参数
    pub fn apply(mut self, step: Step, uploaded_path: Option<String>) -> Self {
        match step {
            Step::Skip => {}
            Step::FrontMatter(field) => self.front_matter.push(field),
            Step::FrontMatterImage { key, asset_ref } => match uploaded_path {
                Some(path) => self.front_matter.push(FrontMatterField::new(key, path)),
                None => debug!("资源 {} 没有上传结果，跳过", asset_ref),
            },
            Step::SelectTemplate { field, template } => {
                self.front_matter.push(field);
                if let Some(template) = template {
                    self.template = template;
                }
            }
            Step::ServiceName(name) => self.service_name = Some(name),
            Step::Content { cursor, edit } => {
                self.cursor = cursor;
                self.builder.apply(cursor, edit);
            }
            Step::ContentImage { cursor, asset_ref } => match uploaded_path {
                Some(path) => {
                    self.cursor = cursor;
                    self.builder.apply(cursor, BlockEdit::AttachImage(path));
                }
                None => debug!("资源 {} 没有上传结果，跳过", asset_ref),
            },
        }
        self
    }

    pub fn into_document(self, ctx: &SubmissionCtx) -> Document {
        Document {
            date: ctx.generated_at.clone(),
            post_id: ctx.post_id.clone(),
            front_matter: self.front_matter,
            template_type: self.template,
            service_name: self.service_name,
            contents: self.builder.into_blocks(),
        }
    }

    fn classify_front_matter(&self, qa: &QuestionAnswer) -> Step {
        match vocabulary::front_matter_label(&qa.question) {
            Some(FrontMatterLabel::Text(key)) => {
                Step::FrontMatter(FrontMatterField::new(key, qa.answer.as_str()))
            }
            Some(FrontMatterLabel::Image(key)) => Step::FrontMatterImage {
                key,
                asset_ref: qa.answer.clone(),
            },
            Some(FrontMatterLabel::TemplateList) => {
                let template = vocabulary::template_for_answer(&qa.answer);
                let value = match template {
                    Some(TemplateType::IndividualDeveloper) => "individual-developer",
                    _ => "normal",
                };
                Step::SelectTemplate {
                    field: FrontMatterField::new(FrontMatterKey::TemplateType, value),
                    template,
                }
            }
            None => Step::Skip,
        }
    }

    fn classify_individual_developer(
        &self,
        label: IndividualDeveloperLabel,
        qa: &QuestionAnswer,
    ) -> Step {
        let cursor = self.next_cursor(label.starts_new_block());
        match label {
            IndividualDeveloperLabel::Narrative(question) => Step::Content {
                cursor,
                edit: BlockEdit::Narrative {
                    question: question.label().to_string(),
                    answer: qa.answer.clone(),
                },
            },
            IndividualDeveloperLabel::ServiceName => Step::ServiceName(qa.answer.clone()),
            IndividualDeveloperLabel::InsertImage => self.classify_image(cursor, qa),
            IndividualDeveloperLabel::ImageDescription => self.classify_description(cursor, qa),
        }
    }

    fn classify_full_custom(&self, label: FullCustomLabel, qa: &QuestionAnswer) -> Step {
        let cursor = self.next_cursor(label.starts_new_block());
        match label {
            FullCustomLabel::Question(_) => Step::Content {
                cursor,
                edit: BlockEdit::StartQuestion(qa.answer.clone()),
            },
            FullCustomLabel::Answer(_) => Step::Content {
                cursor,
                edit: BlockEdit::SetAnswer(qa.answer.clone()),
            },
            FullCustomLabel::InsertImage => self.classify_image(cursor, qa),
            FullCustomLabel::ImageDescription => self.classify_description(cursor, qa),
        }
    }

    fn next_cursor(&self, starts_new_block: bool) -> usize {
        if starts_new_block {
            self.cursor + 1
        } else {
            self.cursor
        }
    }

    /// 每个块最多上传一次图片
    fn classify_image(&self, cursor: usize, qa: &QuestionAnswer) -> Step {
        if self.builder.has_image_at(cursor) {
            return Step::Skip;
        }
        Step::ContentImage {
            cursor,
            asset_ref: qa.answer.clone(),
        }
    }

    fn classify_description(&self, cursor: usize, qa: &QuestionAnswer) -> Step {
        if !self.builder.has_image_at(cursor) {
            return Step::Skip;
        }
        Step::Content {
            cursor,
            edit: BlockEdit::DescribeImage(qa.answer.clone()),
        }
    }
}

/// 把一次投稿编译为文档
///
/// 遇到图片题目时同步调用上传服务；任何上传失败都会中止整个投稿，不产生部分文档
pub async fn interpret(
    pairs: &[QuestionAnswer],
    ctx: &SubmissionCtx,
    uploader: &dyn AssetUploader,
) -> AppResult<Document> {
    let mut state = InterpreterState::new();

    for qa in pairs {
        let step = state.classify(qa);

        if step == Step::Skip {
            debug!("{} 忽略题目: {}", ctx, truncate_text(&qa.question, 40));
        }

        let uploaded_path = match step.asset_ref() {
            Some(asset_ref) => {
                info!("{} 🖼️ 上传资源: {}", ctx, asset_ref);
                let path = uploader.upload(asset_ref, &ctx.post_id).await?;
                info!("{} ✓ 资源已上传: {}", ctx, path);
                Some(path)
            }
            None => None,
        };

        state = state.apply(step, uploaded_path);
    }

    info!(
        "{} ✓ 解释完成: 模板 {}, front matter {} 行, 正文 {} 块",
        ctx,
        state.template(),
        state.front_matter().len(),
        state.contents().len()
    );

    Ok(state.into_document(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UploadError;
    use crate::models::vocabulary::{
        NarrativeQuestion, IMAGE_DESCRIPTION_LABEL, INSERT_IMAGE_LABEL, SERVICE_NAME_LABEL,
        TEMPLATE_LIST_LABEL,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 记录调用并返回可预测路径的上传服务
    #[derive(Default)]
    struct RecordingUploader {
        calls: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl AssetUploader for RecordingUploader {
        async fn upload(&self, asset_ref: &str, post_id: &str) -> AppResult<String> {
            self.calls
                .lock()
                .unwrap()
                .push((asset_ref.to_string(), post_id.to_string()));
            if self.fail {
                return Err(UploadError::AssetNotFound {
                    asset_ref: asset_ref.to_string(),
                }
                .into());
            }
            Ok(format!("/img/{}/{}", post_id, asset_ref))
        }
    }

    fn qa(question: &str, answer: &str) -> QuestionAnswer {
        QuestionAnswer::new(question, answer)
    }

    fn ctx() -> SubmissionCtx {
        SubmissionCtx::new("1546300800", "2019-01-01T09:00:00+09:00")
    }

    /// 不经过上传服务，直接用纯状态机跑完一组问答
    fn run_pure(pairs: &[QuestionAnswer]) -> (InterpreterState, Vec<usize>) {
        let mut state = InterpreterState::new();
        let mut cursors = Vec::new();
        for pair in pairs {
            let step = state.classify(pair);
            let uploaded = step.asset_ref().map(|r| format!("/img/test/{}", r));
            state = state.apply(step, uploaded);
            cursors.push(state.cursor());
        }
        (state, cursors)
    }

    fn feed(state: InterpreterState, pair: &QuestionAnswer, uploaded: Option<&str>) -> InterpreterState {
        let step = state.classify(pair);
        state.apply(step, uploaded.map(str::to_string))
    }

    fn individual_developer_pairs() -> Vec<QuestionAnswer> {
        let mut pairs = vec![
            qa("タイトル", "個人開発の話"),
            qa(TEMPLATE_LIST_LABEL, "個人発開発サービス紹介"),
        ];
        for (i, question) in NarrativeQuestion::ALL.iter().enumerate() {
            pairs.push(qa(question.label(), &format!("A{}", i + 1)));
        }
        pairs
    }

    #[test]
    fn test_front_matter_only_without_template() {
        let (state, _) = run_pure(&[qa("自己紹介", "Hi")]);

        assert_eq!(state.template(), TemplateType::Undetermined);
        assert_eq!(state.front_matter().len(), 1);
        assert_eq!(state.front_matter()[0].to_string(), "selfIntroduction: Hi");
        assert!(state.contents().is_empty());
    }

    #[test]
    fn test_unrecognized_front_matter_label_is_skipped() {
        let state = InterpreterState::new();
        assert_eq!(state.classify(&qa("好きな食べ物", "寿司")), Step::Skip);
    }

    #[test]
    fn test_individual_developer_blocks_in_order() {
        let (state, _) = run_pure(&individual_developer_pairs());

        assert_eq!(state.template(), TemplateType::IndividualDeveloper);
        assert_eq!(
            state.front_matter()[1].to_string(),
            "templateType: individual-developer"
        );
        assert_eq!(state.contents().len(), 4);
        for (i, question) in NarrativeQuestion::ALL.iter().enumerate() {
            assert_eq!(state.contents()[i].question, question.label());
            assert_eq!(state.contents()[i].answer, format!("A{}", i + 1));
        }
    }

    #[test]
    fn test_cursor_is_monotonic_and_starts_at_zero() {
        let mut pairs = individual_developer_pairs();
        pairs.insert(3, qa(INSERT_IMAGE_LABEL, "one.png"));
        pairs.insert(4, qa(IMAGE_DESCRIPTION_LABEL, "一枚目"));
        pairs.push(qa("関係ない質問", "x"));

        let (_, cursors) = run_pure(&pairs);

        assert_eq!(cursors[0], 0);
        assert!(cursors.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*cursors.last().unwrap(), 3);
    }

    #[test]
    fn test_no_front_matter_after_template_and_no_content_before() {
        let pairs = vec![
            qa("質問①", "最初の質問"),
            qa(TEMPLATE_LIST_LABEL, "しない(フルカスタム)"),
            qa("タイトル", "遅すぎたタイトル"),
            qa("質問①", "本当の質問"),
        ];
        let mut state = feed(InterpreterState::new(), &pairs[0], None);
        assert!(state.contents().is_empty());

        state = feed(state, &pairs[1], None);
        let front_matter_len = state.front_matter().len();

        state = feed(state, &pairs[2], None);
        state = feed(state, &pairs[3], None);

        assert_eq!(state.front_matter().len(), front_matter_len);
        assert_eq!(state.contents().len(), 1);
        assert_eq!(state.contents()[0].question, "本当の質問");
    }

    #[test]
    fn test_service_name_bypasses_cursor() {
        let (state, cursors) = run_pure(&[
            qa(TEMPLATE_LIST_LABEL, "個人開発サービス紹介"),
            qa(SERVICE_NAME_LABEL, "Instagram Bot"),
            qa(NarrativeQuestion::Service.label(), "便利なボット"),
        ]);

        assert_eq!(state.service_name(), Some("Instagram Bot"));
        assert_eq!(state.contents().len(), 1);
        assert_eq!(cursors, vec![0, 0, 0]);
    }

    #[test]
    fn test_full_custom_question_text_comes_from_answer() {
        let (state, _) = run_pure(&[
            qa(TEMPLATE_LIST_LABEL, "しない(フルカスタム)"),
            qa("質問①", "好きな言語は？"),
            qa("回答①", "Rust"),
            qa("質問②", "理由は？"),
            qa("回答②", "速いから"),
        ]);

        assert_eq!(state.template(), TemplateType::FullCustom);
        assert_eq!(state.front_matter()[0].to_string(), "templateType: normal");
        assert_eq!(state.contents().len(), 2);
        assert_eq!(state.contents()[0].question, "好きな言語は？");
        assert_eq!(state.contents()[0].answer, "Rust");
        assert_eq!(state.contents()[1].question, "理由は？");
        assert_eq!(state.contents()[1].answer, "速いから");
    }

    #[test]
    fn test_image_step_requests_upload_then_description_attaches() {
        let mut state = feed(
            InterpreterState::new(),
            &qa(TEMPLATE_LIST_LABEL, "しない(フルカスタム)"),
            None,
        );
        state = feed(state, &qa("質問①", "q"), None);

        let image_step = state.classify(&qa(INSERT_IMAGE_LABEL, "photo.png"));
        assert_eq!(image_step.asset_ref(), Some("photo.png"));

        state = state.apply(image_step, Some("/img/1/photo.png".to_string()));
        state = feed(state, &qa(IMAGE_DESCRIPTION_LABEL, "写真"), None);

        assert_eq!(state.contents()[0].image_path.as_deref(), Some("/img/1/photo.png"));
        assert_eq!(state.contents()[0].image_description.as_deref(), Some("写真"));
    }

    #[test]
    fn test_description_without_image_is_skipped() {
        let (state, _) = run_pure(&[
            qa(TEMPLATE_LIST_LABEL, "しない(フルカスタム)"),
            qa("質問①", "q"),
            qa("回答①", "a"),
            qa(IMAGE_DESCRIPTION_LABEL, "説明だけ"),
        ]);

        assert_eq!(state.contents()[0].image_path, None);
        assert_eq!(state.contents()[0].image_description, None);
    }

    #[test]
    fn test_second_image_for_same_block_is_skipped() {
        let (state, _) = run_pure(&[
            qa(TEMPLATE_LIST_LABEL, "しない(フルカスタム)"),
            qa("質問①", "q"),
            qa(INSERT_IMAGE_LABEL, "first.png"),
        ]);

        assert_eq!(state.classify(&qa(INSERT_IMAGE_LABEL, "second.png")), Step::Skip);
    }

    #[test]
    fn test_unknown_template_answer_keeps_front_matter_phase() {
        let (state, _) = run_pure(&[
            qa(TEMPLATE_LIST_LABEL, "その他"),
            qa("ニックネーム", "yuki"),
        ]);

        assert_eq!(state.template(), TemplateType::Undetermined);
        assert_eq!(state.front_matter()[0].to_string(), "templateType: normal");
        assert_eq!(state.front_matter()[1].to_string(), "nickname: yuki");
    }

    #[tokio::test]
    async fn test_interpret_without_images_makes_no_upload() {
        let uploader = RecordingUploader::default();

        let document = interpret(&individual_developer_pairs(), &ctx(), &uploader)
            .await
            .unwrap();

        assert!(uploader.calls.lock().unwrap().is_empty());
        assert_eq!(document.template_type, TemplateType::IndividualDeveloper);
        assert_eq!(document.contents.len(), 4);
        assert_eq!(document.post_id, "1546300800");
    }

    #[tokio::test]
    async fn test_interpret_uploads_with_post_id() {
        let uploader = RecordingUploader::default();
        let pairs = vec![
            qa("アイコン", "me.png"),
            qa(TEMPLATE_LIST_LABEL, "しない(フルカスタム)"),
            qa("質問①", "好きな言語は？"),
            qa("回答①", "Rust"),
            qa(INSERT_IMAGE_LABEL, "ferris.png"),
        ];

        let document = interpret(&pairs, &ctx(), &uploader).await.unwrap();

        assert_eq!(
            *uploader.calls.lock().unwrap(),
            vec![
                ("me.png".to_string(), "1546300800".to_string()),
                ("ferris.png".to_string(), "1546300800".to_string()),
            ]
        );
        assert_eq!(
            document.front_matter[0].to_string(),
            "iconImage: /img/1546300800/me.png"
        );
        assert_eq!(
            document.contents[0].image_path.as_deref(),
            Some("/img/1546300800/ferris.png")
        );
    }

    #[tokio::test]
    async fn test_interpret_aborts_on_upload_failure() {
        let uploader = RecordingUploader {
            fail: true,
            ..Default::default()
        };
        let pairs = vec![
            qa(TEMPLATE_LIST_LABEL, "しない(フルカスタム)"),
            qa("質問①", "q"),
            qa(INSERT_IMAGE_LABEL, "missing.png"),
            qa("質問②", "never reached"),
        ];

        let result = interpret(&pairs, &ctx(), &uploader).await;

        assert!(result.is_err());
        assert_eq!(uploader.calls.lock().unwrap().len(), 1);
    }
}
