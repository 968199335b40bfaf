pub mod asset_uploader;
pub mod publisher;

pub use asset_uploader::{AssetUploader, GithubAssetUploader};
pub use publisher::{Publisher, RemotePublisher};
