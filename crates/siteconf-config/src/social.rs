//! Social login provider descriptors.
//!
//! Each provider bundles its OAuth client credentials with the scopes and
//! flags the login pipeline should use. Credentials have no defaults.
//!
//! # Environment Variables
//!
//! - `GITHUB_CLIENT_ID`, `GITHUB_CLIENT_SECRET` (required)
//! - `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET` (required)

use std::collections::BTreeMap;

use serde::Serialize;
use siteconf_core::{ConfigError, EnvSource, Secret};

/// OAuth application registered with a provider.
#[derive(Clone, Debug, Serialize)]
pub struct ProviderApp {
    pub client_id: String,
    pub secret: Secret,
    pub key: String,
}

impl ProviderApp {
    fn from_env(
        env: &impl EnvSource,
        client_id_var: &str,
        secret_var: &str,
    ) -> Result<Self, ConfigError> {
        let client_id: String = env.require(client_id_var)?;
        let secret: String = env.require(secret_var)?;

        Ok(Self {
            client_id,
            secret: Secret::from(secret),
            key: String::new(),
        })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ProviderDescriptor {
    pub scope: Vec<String>,
    pub app: ProviderApp,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub auth_params: BTreeMap<String, String>,
    pub oauth_pkce_enabled: bool,
    pub verified_email: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct SocialProviders {
    pub github: ProviderDescriptor,
    pub google: ProviderDescriptor,
}

impl SocialProviders {
    /// # Errors
    ///
    /// [`ConfigError::MissingRequiredSetting`] for the first absent credential.
    pub fn from_env(env: &impl EnvSource) -> Result<Self, ConfigError> {
        let github = ProviderApp::from_env(env, "GITHUB_CLIENT_ID", "GITHUB_CLIENT_SECRET")?;
        let google = ProviderApp::from_env(env, "GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET")?;

        Ok(Self {
            github: github_descriptor(github),
            google: google_descriptor(google),
        })
    }

    /// Provider ids paired with their descriptors, in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ProviderDescriptor)> {
        [("github", &self.github), ("google", &self.google)].into_iter()
    }
}

fn github_descriptor(app: ProviderApp) -> ProviderDescriptor {
    ProviderDescriptor {
        scope: scopes(&["user", "repo", "read:org"]),
        app,
        auth_params: BTreeMap::new(),
        oauth_pkce_enabled: false,
        verified_email: true,
    }
}

fn google_descriptor(app: ProviderApp) -> ProviderDescriptor {
    ProviderDescriptor {
        scope: scopes(&["profile", "email"]),
        app,
        // offline access issues a refresh token
        auth_params: BTreeMap::from([("access_type".to_string(), "offline".to_string())]),
        oauth_pkce_enabled: true,
        verified_email: true,
    }
}

fn scopes(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use siteconf_core::Env;

    fn credentials() -> Env {
        Env::new()
            .with("GITHUB_CLIENT_ID", "gh-id")
            .with("GITHUB_CLIENT_SECRET", "gh-secret")
            .with("GOOGLE_CLIENT_ID", "g-id")
            .with("GOOGLE_CLIENT_SECRET", "g-secret")
    }

    #[test]
    fn test_github_descriptor() {
        let providers = SocialProviders::from_env(&credentials()).unwrap();
        let github = &providers.github;
        assert_eq!(github.scope, vec!["user", "repo", "read:org"]);
        assert_eq!(github.app.client_id, "gh-id");
        assert_eq!(github.app.secret.expose(), "gh-secret");
        assert_eq!(github.app.key, "");
        assert!(github.auth_params.is_empty());
        assert!(!github.oauth_pkce_enabled);
        assert!(github.verified_email);
    }

    #[test]
    fn test_google_descriptor() {
        let providers = SocialProviders::from_env(&credentials()).unwrap();
        let google = &providers.google;
        assert_eq!(google.scope, vec!["profile", "email"]);
        assert_eq!(google.app.client_id, "g-id");
        assert_eq!(google.app.secret.expose(), "g-secret");
        assert_eq!(
            google.auth_params.get("access_type").map(String::as_str),
            Some("offline")
        );
        assert!(google.oauth_pkce_enabled);
        assert!(google.verified_email);
    }

    #[test]
    fn test_each_credential_is_required() {
        for name in [
            "GITHUB_CLIENT_ID",
            "GITHUB_CLIENT_SECRET",
            "GOOGLE_CLIENT_ID",
            "GOOGLE_CLIENT_SECRET",
        ] {
            let env: Env = [
                ("GITHUB_CLIENT_ID", "gh-id"),
                ("GITHUB_CLIENT_SECRET", "gh-secret"),
                ("GOOGLE_CLIENT_ID", "g-id"),
                ("GOOGLE_CLIENT_SECRET", "g-secret"),
            ]
            .into_iter()
            .filter(|(k, _)| *k != name)
            .collect();

            let err = SocialProviders::from_env(&env).unwrap_err();
            assert_eq!(err.setting_name(), Some(name));
        }
    }

    #[test]
    fn test_iter_order() {
        let providers = SocialProviders::from_env(&credentials()).unwrap();
        let ids: Vec<_> = providers.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["github", "google"]);
    }

    #[test]
    fn test_serialized_secrets_are_redacted() {
        let providers = SocialProviders::from_env(&credentials()).unwrap();
        let json = serde_json::to_string(&providers).unwrap();
        assert!(!json.contains("gh-secret"));
        assert!(!json.contains("g-secret"));
        assert!(json.contains("gh-id"));
        assert!(!json.contains("\"auth_params\":{}"));
    }
}
