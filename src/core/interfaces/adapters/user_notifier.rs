use async_trait::async_trait;

#[async_trait]
pub trait UserNotifier: Send + Sync {
    async fn alert(&self, title: &str, message: &str);

    /// Returns true when the user accepts.
    async fn confirm(&self, title: &str, message: &str) -> bool;
}
