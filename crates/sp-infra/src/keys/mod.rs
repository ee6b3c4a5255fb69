//! Private-key backup directory client.
//!
//! `is_synced` asks the key server whether an encrypted private-key backup
//! exists for the account bound by `init`.

use std::sync::{Arc, Mutex};

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::debug;

use sp_core::ports::{AuthPort, PrivateKeyPort};

pub struct HttpKeyDirectory {
    client: reqwest::Client,
    directory_url: String,
    auth: Arc<dyn AuthPort>,
    bound_email: Mutex<Option<String>>,
}

impl HttpKeyDirectory {
    pub fn new(
        client: reqwest::Client,
        directory_url: impl Into<String>,
        auth: Arc<dyn AuthPort>,
    ) -> Self {
        Self {
            client,
            directory_url: directory_url.into(),
            auth,
            bound_email: Mutex::new(None),
        }
    }

    fn bound_email(&self) -> Option<String> {
        self.bound_email
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_bound_email(&self, email: Option<String>) {
        *self
            .bound_email
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = email;
    }

    fn backup_url(&self, email: &str) -> anyhow::Result<Url> {
        let mut url = Url::parse(&self.directory_url)
            .with_context(|| format!("Invalid key directory URL: {}", self.directory_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Key directory URL cannot be a base"))?
            .pop_if_empty()
            .extend(["privatekey", "user", email]);
        Ok(url)
    }
}

#[async_trait]
impl PrivateKeyPort for HttpKeyDirectory {
    async fn init(&self) -> anyhow::Result<()> {
        if self.directory_url.is_empty() {
            anyhow::bail!("Key directory URL is not configured");
        }
        let email = self
            .auth
            .email_address()
            .ok_or_else(|| anyhow::anyhow!("No account email address is known"))?;
        self.set_bound_email(Some(email));
        Ok(())
    }

    async fn is_synced(&self) -> anyhow::Result<bool> {
        let email = self
            .bound_email()
            .ok_or_else(|| anyhow::anyhow!("Key directory is not initialized"))?;
        let url = self.backup_url(&email)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Key directory request failed")?;

        let synced = match response.status() {
            StatusCode::NOT_FOUND => false,
            status if status.is_success() => {
                let backups: Vec<serde_json::Value> = response
                    .json()
                    .await
                    .context("Failed to decode key directory response")?;
                !backups.is_empty()
            }
            status => anyhow::bail!("Key directory returned {status}"),
        };

        debug!(synced, "key directory answered");
        Ok(synced)
    }

    async fn destroy(&self) -> anyhow::Result<()> {
        self.set_bound_email(None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    struct FixedAuth(Option<&'static str>);

    #[async_trait]
    impl AuthPort for FixedAuth {
        async fn init(&self) -> anyhow::Result<()> {
            Ok(())
        }

        fn email_address(&self) -> Option<String> {
            self.0.map(str::to_string)
        }

        async fn store_credentials(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn directory(url: String, email: Option<&'static str>) -> HttpKeyDirectory {
        HttpKeyDirectory::new(reqwest::Client::new(), url, Arc::new(FixedAuth(email)))
    }

    #[tokio::test]
    async fn existing_backup_is_synced() {
        let mut server = Server::new_async().await;
        let lookup = server
            .mock("GET", "/privatekey/user/fred@foo.com")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"_id":"ABCDEF","userId":"fred@foo.com"}]"#)
            .create_async()
            .await;
        let directory = directory(server.url(), Some("fred@foo.com"));

        directory.init().await.unwrap();
        let synced = directory.is_synced().await.unwrap();

        lookup.assert_async().await;
        assert!(synced);
    }

    #[tokio::test]
    async fn missing_or_empty_backup_is_not_synced() {
        let mut server = Server::new_async().await;
        let _missing = server
            .mock("GET", "/privatekey/user/fred@foo.com")
            .with_status(404)
            .create_async()
            .await;
        let _empty = server
            .mock("GET", "/privatekey/user/wilma@foo.com")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let fred = directory(server.url(), Some("fred@foo.com"));
        fred.init().await.unwrap();
        assert!(!fred.is_synced().await.unwrap());

        let wilma = directory(server.url(), Some("wilma@foo.com"));
        wilma.init().await.unwrap();
        assert!(!wilma.is_synced().await.unwrap());
    }

    #[tokio::test]
    async fn server_error_is_propagated() {
        let mut server = Server::new_async().await;
        let _lookup = server
            .mock("GET", "/privatekey/user/fred@foo.com")
            .with_status(500)
            .create_async()
            .await;
        let directory = directory(server.url(), Some("fred@foo.com"));

        directory.init().await.unwrap();
        let err = directory.is_synced().await.unwrap_err();

        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn destroy_unbinds_account() {
        let directory = directory("http://127.0.0.1:9".to_string(), Some("fred@foo.com"));

        directory.init().await.unwrap();
        directory.destroy().await.unwrap();
        let err = directory.is_synced().await.unwrap_err();

        assert!(err.to_string().contains("not initialized"));
    }

    #[tokio::test]
    async fn init_requires_known_email() {
        let directory = directory("http://127.0.0.1:9".to_string(), None);

        assert!(directory.init().await.is_err());
    }

    #[test]
    fn backup_url_keeps_base_path() {
        let directory = directory("https://keys.example/api/".to_string(), None);

        let url = directory.backup_url("fred@foo.com").unwrap();

        assert_eq!(
            url.as_str(),
            "https://keys.example/api/privatekey/user/fred@foo.com"
        );
    }
}
