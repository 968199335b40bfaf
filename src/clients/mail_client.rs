/// 邮件中继客户端
///
/// 把邮件以 JSON 形式 POST 到配置的中继地址
use crate::config::Config;
use crate::error::ApiError;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MailRequest<'a> {
    to: &'a str,
    subject: &'a str,
    body: &'a str,
    reply_to: &'a str,
}

/// 邮件客户端
pub struct MailClient {
    http: reqwest::Client,
    api_url: String,
    reply_to: String,
}

impl MailClient {
    /// 创建新的邮件客户端，回复地址为配置中的收件人
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.mail_api_url.clone(),
            reply_to: config.mail_to.clone(),
        }
    }

    /// 发送邮件
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ApiError> {
        let request = MailRequest {
            to,
            subject,
            body,
            reply_to: &self.reply_to,
        };

        debug!("发送邮件: to={} subject={} 正文 {} 字节", to, subject, body.len());

        let response = self
            .http
            .post(&self.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(&self.api_url, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::BadResponse {
                endpoint: self.api_url.clone(),
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_request_uses_camel_case() {
        let request = MailRequest {
            to: "editor@example.com",
            subject: "Error",
            body: "boom",
            reply_to: "editor@example.com",
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["replyTo"], "editor@example.com");
        assert_eq!(json["subject"], "Error");
    }
}
