use anyhow::Result;
use async_trait::async_trait;

/// Backend that knows each user's profile
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Profile picture URL for the user, `None` when they have not set one
    async fn profile_picture(&self, user_id: &str) -> Result<Option<String>>;
}
