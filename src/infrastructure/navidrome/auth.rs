use super::types::{NdAuthenticate, NdAuthenticateParams};
use super::{NavidromeAdapter, NavidromeError, Session};
use crate::app::config::ServerProfile;
use anyhow::Result;
use reqwest::Url;

/// Validates `raw` as an http(s) URL and strips trailing slashes.
pub(crate) fn normalize_base_url(raw: &str) -> Result<String, NavidromeError> {
    let invalid = |reason: String| NavidromeError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

impl NavidromeAdapter {
    pub(crate) async fn connect_impl(&self, profile: &ServerProfile) -> Result<String> {
        // A failed login must not leave searches going to the previous server
        if let Some(previous) = self.session.write().await.take() {
            tracing::debug!(server = %previous.server_name, "dropping previous session");
        }

        let base_url = normalize_base_url(&profile.url)?;
        let password = profile.resolve_password()?;

        let path = "/auth/login".to_string();
        tracing::info!(server = %profile.name, url = %base_url, "logging in");
        let response = self
            .http
            .post(format!("{base_url}{path}"))
            .json(&NdAuthenticateParams {
                username: &profile.username,
                password: &password,
            })
            .send()
            .await
            .map_err(|source| NavidromeError::Http {
                path: path.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NavidromeError::Status { status, path }.into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| NavidromeError::Http { path, source })?;
        let auth: NdAuthenticate =
            serde_json::from_slice(&body).map_err(|source| NavidromeError::Schema {
                what: "authenticate",
                source,
            })?;

        tracing::info!(server = %profile.name, user = %auth.username, admin = auth.is_admin, "logged in");
        *self.session.write().await = Some(Session {
            server_name: profile.name.clone(),
            base_url,
            username: auth.username,
            token: auth.token,
            subsonic_salt: auth.subsonic_salt,
            subsonic_token: auth.subsonic_token,
        });
        Ok(profile.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(url: &str) -> ServerProfile {
        ServerProfile {
            name: "home".to_string(),
            url: url.to_string(),
            username: "admin".to_string(),
            password: Some("secret".to_string()),
            password_env: None,
        }
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("http://localhost:4533/").unwrap(),
            "http://localhost:4533"
        );
        assert_eq!(
            normalize_base_url(" https://music.example/navidrome/ ").unwrap(),
            "https://music.example/navidrome"
        );
        assert!(matches!(
            normalize_base_url("ftp://music.example"),
            Err(NavidromeError::InvalidUrl { .. })
        ));
        assert!(normalize_base_url("not a url").is_err());
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_url_before_any_request() {
        let adapter = NavidromeAdapter::new().unwrap();
        let err = adapter.connect_impl(&profile("localhost")).await.unwrap_err();
        assert!(err.to_string().contains("Invalid server URL"));
        assert!(!adapter.is_connected().await);
    }

    #[tokio::test]
    async fn test_connect_requires_password() {
        let adapter = NavidromeAdapter::new().unwrap();
        let mut profile = profile("http://localhost:4533");
        profile.password = None;
        profile.password_env = Some("TONEARM_TEST_UNSET_PASSWORD_VAR".to_string());
        let err = adapter.connect_impl(&profile).await.unwrap_err();
        assert!(format!("{err:#}").contains("env var"));
    }

    #[tokio::test]
    async fn test_failed_login_drops_previous_session() {
        let adapter = NavidromeAdapter::new().unwrap();
        *adapter.session.write().await = Some(Session::fixture());
        assert!(adapter.is_connected().await);

        let err = adapter.connect_impl(&profile("ftp://cellar")).await.unwrap_err();
        assert!(err.to_string().contains("Invalid server URL"));
        assert!(!adapter.is_connected().await);
        assert!(matches!(
            adapter.current_session().await,
            Err(NavidromeError::NotConnected)
        ));
    }
}
