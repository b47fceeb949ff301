//! gloo-net implementation of the dashboard's network calls.

use std::future::Future;

use floramed_core::{
    DashboardApi, DashboardConfig, FetchError, NewsQuery, NewsResponse, Result, Timer, UserProfile,
};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;

fn into_fetch_error(err: gloo_net::Error) -> FetchError {
    match err {
        gloo_net::Error::SerdeError(err) => FetchError::Decode(err.to_string()),
        other => FetchError::Network(other.to_string()),
    }
}

/// Non-2xx statuses are failures; the body is not inspected.
fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

fn error_for_status(rsp: Response) -> Result<Response> {
    check_status(rsp.status())?;
    Ok(rsp)
}

/// Headers sent with the authenticated profile request.
fn profile_headers(token: &str) -> [(&'static str, String); 2] {
    [
        ("Accept", "application/json".to_string()),
        ("Authorization", format!("Bearer {token}")),
    ]
}

/// Talks to the FloraMed backend and the news search over `fetch`.
pub struct HttpApi {
    profile_url: String,
    news_endpoint: String,
    news_api_key: String,
}

impl HttpApi {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            profile_url: config.profile_url(),
            news_endpoint: config.news_endpoint.clone(),
            news_api_key: config.news_api_key.clone(),
        }
    }
}

impl DashboardApi for HttpApi {
    fn fetch_profile(&self, token: &str) -> impl Future<Output = Result<UserProfile>> {
        let request = profile_headers(token)
            .iter()
            .fold(Request::get(&self.profile_url), |request, (name, value)| {
                request.header(name, value)
            });

        async move {
            let rsp = request.send().await.map_err(into_fetch_error)?;
            error_for_status(rsp)?
                .json::<UserProfile>()
                .await
                .map_err(into_fetch_error)
        }
    }

    fn fetch_news(&self, query: &NewsQuery) -> impl Future<Output = Result<NewsResponse>> {
        let request = Request::get(&self.news_endpoint).query(query.params(&self.news_api_key));

        async move {
            let rsp = request.send().await.map_err(into_fetch_error)?;
            error_for_status(rsp)?
                .json::<NewsResponse>()
                .await
                .map_err(into_fetch_error)
        }
    }
}

/// Request deadlines on the browser's `setTimeout`.
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        TimeoutFuture::new(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_headers_carry_bearer_token() {
        let headers = profile_headers("tok-123");

        assert_eq!(
            headers,
            [
                ("Accept", "application/json".to_string()),
                ("Authorization", "Bearer tok-123".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_2xx_status_is_failure() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(302), Err(FetchError::Status(302)));
        assert_eq!(check_status(401), Err(FetchError::Status(401)));
        assert_eq!(check_status(503), Err(FetchError::Status(503)));
    }

    #[test]
    fn test_gloo_errors_map_to_fetch_errors() {
        let serde_err = serde_json::from_str::<UserProfile>("{}").unwrap_err();

        assert!(matches!(
            into_fetch_error(gloo_net::Error::SerdeError(serde_err)),
            FetchError::Decode(_)
        ));
        assert!(matches!(
            into_fetch_error(gloo_net::Error::GlooError("offline".to_string())),
            FetchError::Network(_)
        ));
    }
}
