//! 文档渲染
//!
//! 把 [`Document`] 按固定顺序序列化为 front matter 文本，不修改文档

use crate::models::Document;

const DELIMITER: &str = "---";
const TEMPLATE_KEY: &str = "blog-post";

pub fn render(document: &Document) -> String {
    let mut body = format!("{}\n", DELIMITER);
    body += &format!("templateKey: {}\n", TEMPLATE_KEY);
    body += &format!("date: {}\n", document.date);
    body += &format!("postId: {}\n", document.post_id);

    for field in &document.front_matter {
        body += &format!("{}\n", field);
    }

    if let Some(service_name) = &document.service_name {
        body += &format!("serviceName: {}\n", service_name);
    }

    body += "contents:\n";
    for content in &document.contents {
        body += &format!("  - question: {}\n", content.question);
        body += &format!("    answer: {}\n", content.answer);
        if let Some(image_path) = &content.image_path {
            body += &format!("    imagePath: {}\n", image_path);
        }
        if let Some(image_description) = &content.image_description {
            body += &format!("    imageDescription: {}\n", image_description);
        }
    }

    body += &format!("{}\n", DELIMITER);
    body
}
