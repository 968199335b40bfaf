pub mod document;
pub mod loaders;
pub mod submission;
pub mod vocabulary;

pub use document::{ContentBlock, Document, FrontMatterField, FrontMatterKey, TemplateType};
pub use loaders::{load_all_submissions, load_submission};
pub use submission::{QuestionAnswer, Submission};
