pub mod github_client;
pub mod mail_client;

pub use github_client::GithubClient;
pub use mail_client::MailClient;
