//! 正文块构建
//!
//! 按游标位置创建或修改正文块。游标所指的块不存在时补齐空块，
//! 所以顺序错乱的投稿只会得到字段不全的块，而不会报错。

use crate::models::ContentBlock;

/// 对游标所指正文块的一次修改
///
/// 图片路径在这里已经是上传后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEdit {
    /// 固定问题：整块替换为 {question, answer}
    Narrative { question: String, answer: String },
    /// 自定义问题：整块替换为只有 question 的新块
    StartQuestion(String),
    /// 填写当前块的回答
    SetAnswer(String),
    /// 设置当前块的图片路径
    AttachImage(String),
    /// 设置当前块的图片说明（仅当已有图片）
    DescribeImage(String),
}

#[derive(Debug, Clone, Default)]
pub struct ContentBuilder {
    blocks: Vec<ContentBlock>,
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn has_image_at(&self, cursor: usize) -> bool {
        self.blocks.get(cursor).is_some_and(ContentBlock::has_image)
    }

    pub fn apply(&mut self, cursor: usize, edit: BlockEdit) {
        match edit {
            BlockEdit::Narrative { question, answer } => {
                *self.block_mut(cursor) = ContentBlock {
                    question,
                    answer,
                    ..ContentBlock::default()
                };
            }
            BlockEdit::StartQuestion(question) => {
                *self.block_mut(cursor) = ContentBlock {
                    question,
                    ..ContentBlock::default()
                };
            }
            BlockEdit::SetAnswer(answer) => {
                self.block_mut(cursor).answer = answer;
            }
            BlockEdit::AttachImage(path) => {
                self.block_mut(cursor).image_path = Some(path);
            }
            BlockEdit::DescribeImage(description) => {
                if let Some(block) = self.blocks.get_mut(cursor) {
                    if block.has_image() {
                        block.image_description = Some(description);
                    }
                }
            }
        }
    }

    pub fn into_blocks(self) -> Vec<ContentBlock> {
        self.blocks
    }

    fn block_mut(&mut self, cursor: usize) -> &mut ContentBlock {
        if cursor >= self.blocks.len() {
            self.blocks.resize_with(cursor + 1, ContentBlock::default);
        }
        &mut self.blocks[cursor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_then_answer_then_image() {
        let mut builder = ContentBuilder::new();
        builder.apply(0, BlockEdit::StartQuestion("好きな言語は？".to_string()));
        builder.apply(0, BlockEdit::SetAnswer("Rust".to_string()));
        builder.apply(0, BlockEdit::AttachImage("/img/1/2_a.png".to_string()));
        builder.apply(0, BlockEdit::DescribeImage("ロゴ".to_string()));

        assert_eq!(
            builder.blocks(),
            &[ContentBlock {
                question: "好きな言語は？".to_string(),
                answer: "Rust".to_string(),
                image_path: Some("/img/1/2_a.png".to_string()),
                image_description: Some("ロゴ".to_string()),
            }]
        );
    }

    #[test]
    fn test_description_without_image_is_ignored() {
        let mut builder = ContentBuilder::new();
        builder.apply(
            0,
            BlockEdit::Narrative {
                question: "q".to_string(),
                answer: "a".to_string(),
            },
        );
        builder.apply(0, BlockEdit::DescribeImage("説明".to_string()));

        assert_eq!(builder.blocks()[0].image_description, None);
        assert!(!builder.has_image_at(0));
    }

    #[test]
    fn test_description_on_missing_block_creates_nothing() {
        let mut builder = ContentBuilder::new();
        builder.apply(2, BlockEdit::DescribeImage("説明".to_string()));
        assert!(builder.is_empty());
    }

    #[test]
    fn test_answer_before_question_leaves_partial_block() {
        let mut builder = ContentBuilder::new();
        builder.apply(0, BlockEdit::SetAnswer("orphan".to_string()));

        assert_eq!(builder.len(), 1);
        assert_eq!(builder.blocks()[0].question, "");
        assert_eq!(builder.blocks()[0].answer, "orphan");
    }

    #[test]
    fn test_skipped_index_is_padded() {
        let mut builder = ContentBuilder::new();
        builder.apply(1, BlockEdit::StartQuestion("二問目".to_string()));

        assert_eq!(builder.len(), 2);
        assert_eq!(builder.blocks()[0], ContentBlock::default());
        assert_eq!(builder.blocks()[1].question, "二問目");
    }

    #[test]
    fn test_start_question_replaces_block() {
        let mut builder = ContentBuilder::new();
        builder.apply(0, BlockEdit::StartQuestion("old".to_string()));
        builder.apply(0, BlockEdit::SetAnswer("a".to_string()));
        builder.apply(0, BlockEdit::StartQuestion("new".to_string()));

        assert_eq!(builder.blocks()[0].question, "new");
        assert_eq!(builder.blocks()[0].answer, "");
    }
}
