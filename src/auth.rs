use anyhow::Result;
use async_trait::async_trait;

/// Session backend the dashboard signs users out through
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_out(&self) -> Result<()>;
}
