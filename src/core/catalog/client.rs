use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::types::{AddonId, AddonSummary, FileSummary, LoaderVersionSummary, VersionSummary};
use super::Catalog;
use crate::core::error::{PackError, PackResult};

pub const DEFAULT_API_BASE: &str = "https://addons-ecs.forgesvc.net/api/v2";
pub const MINECRAFT_GAME_ID: u32 = 432;

/// HTTP client for the addon catalog API.
///
/// Every call is a single round trip with no caching and no retry; a
/// non-success status is surfaced as [`PackError::CatalogStatus`].
pub struct CurseCatalog {
    client: Client,
    api_base: String,
    game_id: u32,
}

impl CurseCatalog {
    pub fn new(client: Client, api_base: impl Into<String>, game_id: u32) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            game_id,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> PackResult<T> {
        debug!("Catalog GET {}", url);

        let resp = self.client.get(url).query(query).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PackError::CatalogStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(resp.json::<T>().await?)
    }
}

#[async_trait]
impl Catalog for CurseCatalog {
    async fn search_addons(&self, query: &str) -> PackResult<Vec<AddonSummary>> {
        let url = self.url("addon/search");
        let results: Vec<AddonSummary> = self
            .get_json(
                &url,
                &[
                    ("gameId", self.game_id.to_string()),
                    ("searchFilter", query.to_string()),
                ],
            )
            .await?;

        info!("Search '{}' returned {} addons", query, results.len());
        Ok(results)
    }

    async fn get_addon_info(&self, addon_id: AddonId) -> PackResult<AddonSummary> {
        self.get_json(&self.url(&format!("addon/{}", addon_id)), &[])
            .await
    }

    async fn get_addon_files(&self, addon_id: AddonId) -> PackResult<Vec<FileSummary>> {
        self.get_json(&self.url(&format!("addon/{}/files", addon_id)), &[])
            .await
    }

    async fn get_game_versions(&self) -> PackResult<Vec<VersionSummary>> {
        self.get_json(&self.url("minecraft/version"), &[]).await
    }

    async fn get_mod_loader_versions(&self) -> PackResult<Vec<LoaderVersionSummary>> {
        self.get_json(&self.url("minecraft/modloader"), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    #[test]
    fn url_joins_base_without_double_slash() {
        let catalog = CurseCatalog::new(
            Client::new(),
            "https://catalog.example/api/v2/",
            MINECRAFT_GAME_ID,
        );
        assert_eq!(
            catalog.url("addon/42/files"),
            "https://catalog.example/api/v2/addon/42/files"
        );
    }

    /// Serve every connection with the same canned response.
    async fn serve(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut chunk = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&chunk[..n]),
                    }
                }
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{}/api/v2", addr)
    }

    fn local_catalog(api_base: String) -> CurseCatalog {
        let client = Client::builder().no_proxy().build().unwrap();
        CurseCatalog::new(client, api_base, MINECRAFT_GAME_ID)
    }

    fn assert_not_found<T: std::fmt::Debug>(result: PackResult<T>, path: &str) {
        match result {
            Err(PackError::CatalogStatus { url, status }) => {
                assert_eq!(status, 404);
                assert!(url.ends_with(path), "{} does not end with {}", url, path);
            }
            other => panic!("expected CatalogStatus for {}, got {:?}", path, other),
        }
    }

    #[tokio::test]
    async fn non_success_status_is_a_catalog_error_for_every_lookup() {
        let catalog = local_catalog(serve("404 Not Found", "").await);

        assert_not_found(catalog.search_addons("jei").await, "addon/search");
        assert_not_found(catalog.get_addon_info(7).await, "addon/7");
        assert_not_found(catalog.get_addon_files(7).await, "addon/7/files");
        assert_not_found(catalog.get_game_versions().await, "minecraft/version");
        assert_not_found(catalog.get_mod_loader_versions().await, "minecraft/modloader");
    }

    #[tokio::test]
    async fn success_body_is_decoded() {
        let catalog = local_catalog(
            serve(
                "200 OK",
                r#"[{"versionString":"1.12.2"},{"versionString":"1.11.2"}]"#,
            )
            .await,
        );

        let versions = catalog.get_game_versions().await.unwrap();
        let names: Vec<&str> = versions.iter().map(|v| v.version_string.as_str()).collect();
        assert_eq!(names, vec!["1.12.2", "1.11.2"]);
    }
}
