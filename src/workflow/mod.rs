pub mod content_builder;
pub mod document_assembler;
pub mod interpreter;
pub mod submission_ctx;

pub use content_builder::{BlockEdit, ContentBuilder};
pub use document_assembler::render;
pub use interpreter::{interpret, InterpreterState, Step};
pub use submission_ctx::SubmissionCtx;
