//! The two dashboard fetches, bounded by a request timeout.
//!
//! The browser adapters live in the frontend crate; everything here only sees the
//! [`DashboardApi`], [`CredentialStore`] and [`Timer`] seams so it can be driven by fakes.

use std::future::Future;
use std::pin::pin;

use futures::future::{self, Either};
use log::{error, info, warn};

use crate::error::{FetchError, Result};
use crate::nav::LOGIN_PATH;
use crate::news::{NewsQuery, NewsResponse};
use crate::profile::{UserProfile, Viewer};

/// Persistent storage for the session credential.
pub trait CredentialStore {
    /// The stored bearer token, if any.
    fn token(&self) -> Option<String>;

    fn clear(&self);
}

/// Network calls the dashboard makes.
pub trait DashboardApi {
    /// `GET /api/user/profile` with the token as a bearer credential.
    fn fetch_profile(&self, token: &str) -> impl Future<Output = Result<UserProfile>>;

    /// Unauthenticated news search.
    fn fetch_news(&self, query: &NewsQuery) -> impl Future<Output = Result<NewsResponse>>;
}

/// Source of timeout futures.
pub trait Timer {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

/// Race `request` against `deadline`; a deadline that fires first yields [`FetchError::Timeout`].
pub async fn with_timeout<T, F, D>(request: F, deadline: D, timeout_ms: u32) -> Result<T>
where
    F: Future<Output = Result<T>>,
    D: Future<Output = ()>,
{
    let request = pin!(request);
    let deadline = pin!(deadline);

    match future::select(request, deadline).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(FetchError::Timeout(timeout_ms)),
    }
}

/// Runs the profile and news fetches for one dashboard mount.
pub struct DashboardLoader<A, T> {
    api: A,
    timer: T,
    timeout_ms: u32,
    query: NewsQuery,
}

impl<A: DashboardApi, T: Timer> DashboardLoader<A, T> {
    pub fn new(api: A, timer: T, timeout_ms: u32) -> Self {
        Self {
            api,
            timer,
            timeout_ms,
            query: NewsQuery::default(),
        }
    }

    /// Resolve who is viewing the dashboard.
    ///
    /// A missing (or empty) credential is not an error and issues no request.
    pub async fn load_profile(&self, store: &impl CredentialStore) -> Result<Viewer> {
        let Some(token) = store.token().filter(|token| !token.is_empty()) else {
            info!("No stored credential, showing the guest greeting");
            return Ok(Viewer::Anonymous);
        };

        let profile = with_timeout(
            self.api.fetch_profile(&token),
            self.timer.sleep(self.timeout_ms),
            self.timeout_ms,
        )
        .await
        .inspect_err(|err| warn!("Profile fetch failed: {err}"))?;

        info!("Loaded profile for {}", profile.name);
        Ok(Viewer::Member(profile))
    }

    pub async fn load_news(&self) -> Result<NewsResponse> {
        let news = with_timeout(
            self.api.fetch_news(&self.query),
            self.timer.sleep(self.timeout_ms),
            self.timeout_ms,
        )
        .await
        .inspect_err(|err| error!("Error loading news: {err}"))?;

        info!("Loaded {} news articles", news.results.len());
        Ok(news)
    }
}

/// Forget the session credential and return the route to send the browser to.
pub fn logout(store: &impl CredentialStore) -> &'static str {
    store.clear();
    info!("Signed out");
    LOGIN_PATH
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Role;
    use std::cell::{Cell, RefCell};

    struct FakeStore(RefCell<Option<String>>);

    impl FakeStore {
        fn with(token: Option<&str>) -> Self {
            Self(RefCell::new(token.map(str::to_string)))
        }
    }

    impl CredentialStore for FakeStore {
        fn token(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn clear(&self) {
            self.0.replace(None);
        }
    }

    enum Reply<T> {
        Ok(T),
        Err(FetchError),
        Hang,
    }

    struct FakeApi {
        profile: Reply<UserProfile>,
        news: Reply<NewsResponse>,
        profile_calls: Cell<u32>,
        last_token: RefCell<Option<String>>,
    }

    impl FakeApi {
        fn new(profile: Reply<UserProfile>, news: Reply<NewsResponse>) -> Self {
            Self {
                profile,
                news,
                profile_calls: Cell::new(0),
                last_token: RefCell::new(None),
            }
        }
    }

    async fn answer<T: Clone>(reply: &Reply<T>) -> Result<T> {
        match reply {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Err(err) => Err(err.clone()),
            Reply::Hang => future::pending().await,
        }
    }

    impl DashboardApi for &FakeApi {
        fn fetch_profile(&self, token: &str) -> impl Future<Output = Result<UserProfile>> {
            self.profile_calls.set(self.profile_calls.get() + 1);
            self.last_token.replace(Some(token.to_string()));
            answer(&self.profile)
        }

        fn fetch_news(&self, _query: &NewsQuery) -> impl Future<Output = Result<NewsResponse>> {
            answer(&self.news)
        }
    }

    /// Timer whose deadline never fires.
    struct NoDeadline;

    impl Timer for NoDeadline {
        fn sleep(&self, _ms: u32) -> impl Future<Output = ()> {
            future::pending()
        }
    }

    /// Timer whose deadline has already passed.
    struct Expired;

    impl Timer for Expired {
        fn sleep(&self, _ms: u32) -> impl Future<Output = ()> {
            future::ready(())
        }
    }

    fn alice(role: Role) -> UserProfile {
        UserProfile {
            name: "Alice".to_string(),
            role,
            email: None,
        }
    }

    fn no_news() -> Reply<NewsResponse> {
        Reply::Ok(NewsResponse::default())
    }

    #[tokio::test]
    async fn test_missing_credential_skips_request() {
        let api = FakeApi::new(Reply::Ok(alice(Role::Herbalist)), no_news());
        let loader = DashboardLoader::new(&api, NoDeadline, 1_000);

        let viewer = loader.load_profile(&FakeStore::with(None)).await.unwrap();

        assert_eq!(viewer, Viewer::Anonymous);
        assert_eq!(api.profile_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_empty_credential_is_missing() {
        let api = FakeApi::new(Reply::Ok(alice(Role::Herbalist)), no_news());
        let loader = DashboardLoader::new(&api, NoDeadline, 1_000);

        let viewer = loader.load_profile(&FakeStore::with(Some(""))).await.unwrap();

        assert_eq!(viewer, Viewer::Anonymous);
        assert_eq!(api.profile_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_credential_loads_member() {
        let api = FakeApi::new(Reply::Ok(alice(Role::Herbalist)), no_news());
        let loader = DashboardLoader::new(&api, NoDeadline, 1_000);

        let viewer = loader
            .load_profile(&FakeStore::with(Some("tok-1")))
            .await
            .unwrap();

        assert_eq!(viewer, Viewer::Member(alice(Role::Herbalist)));
        assert_eq!(api.profile_calls.get(), 1);
        assert_eq!(api.last_token.borrow().as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_profile_status_error_propagates() {
        let api = FakeApi::new(Reply::Err(FetchError::Status(401)), no_news());
        let loader = DashboardLoader::new(&api, NoDeadline, 1_000);

        let result = loader.load_profile(&FakeStore::with(Some("expired"))).await;

        assert_eq!(result, Err(FetchError::Status(401)));
    }

    #[tokio::test]
    async fn test_hung_profile_times_out() {
        let api = FakeApi::new(Reply::Hang, no_news());
        let loader = DashboardLoader::new(&api, Expired, 2_500);

        let result = loader.load_profile(&FakeStore::with(Some("tok"))).await;

        assert_eq!(result, Err(FetchError::Timeout(2_500)));
    }

    #[tokio::test]
    async fn test_hung_news_times_out() {
        let api = FakeApi::new(Reply::Ok(alice(Role::User)), Reply::Hang);
        let loader = DashboardLoader::new(&api, Expired, 10_000);

        assert_eq!(loader.load_news().await, Err(FetchError::Timeout(10_000)));
    }

    #[tokio::test]
    async fn test_news_failure_propagates() {
        let api = FakeApi::new(
            Reply::Ok(alice(Role::User)),
            Reply::Err(FetchError::Network("offline".to_string())),
        );
        let loader = DashboardLoader::new(&api, NoDeadline, 1_000);

        assert!(matches!(
            loader.load_news().await,
            Err(FetchError::Network(_))
        ));
    }

    #[tokio::test]
    async fn test_ready_request_beats_expired_deadline() {
        let result = with_timeout(future::ready(Ok(7)), future::ready(()), 5).await;

        assert_eq!(result, Ok(7));
    }

    #[test]
    fn test_logout_clears_credential() {
        let store = FakeStore::with(Some("tok"));

        let target = logout(&store);

        assert_eq!(target, "/login");
        assert_eq!(store.token(), None);
    }
}
