use crate::models::{ProfileView, UserIdentity};
use crate::profile::traits::ProfileApi;
use std::sync::Arc;
use tracing::{debug, error};

/// Keeps the signed-in user's profile picture up to date
pub struct ProfileFetcher {
    api: Arc<dyn ProfileApi>,
    view: ProfileView,
}

impl ProfileFetcher {
    pub fn new(api: Arc<dyn ProfileApi>) -> Self {
        Self {
            api,
            view: ProfileView::default(),
        }
    }

    pub fn view(&self) -> &ProfileView {
        &self.view
    }

    /// React to the auth identity changing
    ///
    /// A present identity triggers exactly one request. Failures are logged
    /// and leave the previous picture in place. Signing out issues nothing.
    pub async fn on_identity_change(&mut self, identity: Option<&UserIdentity>) {
        let Some(user) = identity else {
            debug!("No signed-in user, skipping profile fetch");
            return;
        };

        match self.api.profile_picture(&user.id).await {
            Ok(picture_url) => {
                debug!("Profile picture for {}: {:?}", user.id, picture_url);
                self.view.picture_url = picture_url;
            }
            Err(e) => {
                error!("Error fetching profile: {:#}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedProfile {
        picture: Option<String>,
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ProfileApi for FixedProfile {
        async fn profile_picture(&self, _user_id: &str) -> Result<Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("connection refused");
            }
            Ok(self.picture.clone())
        }
    }

    fn api(picture: Option<&str>, fail: bool) -> Arc<FixedProfile> {
        Arc::new(FixedProfile {
            picture: picture.map(str::to_string),
            fail,
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn test_success_stores_picture() {
        let api = api(Some("https://cdn.example.com/me.png"), false);
        let mut fetcher = ProfileFetcher::new(api.clone());
        fetcher.on_identity_change(Some(&UserIdentity::new("u1"))).await;
        assert_eq!(
            fetcher.view().picture_url.as_deref(),
            Some("https://cdn.example.com/me.png")
        );
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_no_identity_no_request() {
        let api = api(Some("https://cdn.example.com/me.png"), false);
        let mut fetcher = ProfileFetcher::new(api.clone());
        fetcher.on_identity_change(None).await;
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
        assert_eq!(fetcher.view().picture_url, None);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_picture() {
        let mut fetcher = ProfileFetcher::new(api(Some("https://cdn.example.com/old.png"), false));
        fetcher.on_identity_change(Some(&UserIdentity::new("u1"))).await;

        fetcher.api = api(None, true) as Arc<dyn ProfileApi>;
        fetcher.on_identity_change(Some(&UserIdentity::new("u2"))).await;
        assert_eq!(
            fetcher.view().picture_url.as_deref(),
            Some("https://cdn.example.com/old.png")
        );
    }
}
