use crate::domain::model::{Graduate, GraduateDraft};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote store for graduate records.
#[async_trait]
pub trait GraduateStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Graduate>>;
    async fn create(&self, draft: &GraduateDraft) -> Result<Graduate>;
    async fn update(&self, id: u64, draft: &GraduateDraft) -> Result<Graduate>;
    async fn delete(&self, id: u64) -> Result<()>;
}

/// Transient user-facing notices. The session reports every outcome through
/// this seam; the CLI prints them, tests capture them.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn request_timeout_seconds(&self) -> Option<u64>;
    fn list_retries(&self) -> u32;
}
