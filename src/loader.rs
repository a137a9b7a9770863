//! Fetching and shape-checking page documents.

use std::future::Future;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {resource}: {reason}")]
    Transport {
        resource: String,
        /// HTTP status, when the server answered.
        status: Option<u16>,
        reason: String,
    },
    #[error("malformed document {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("document {resource} is missing `{key}`")]
    Shape { resource: String, key: String },
}

/// Where page documents are read from.
pub trait DataSource {
    fn fetch(&self, resource: &str) -> impl Future<Output = Result<Vec<u8>, LoadError>> + Send;

    /// Human-readable location of `resource`, for logs.
    fn describe(&self, resource: &str) -> String;
}

/// Documents served over HTTP under a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: String,
}

impl HttpSource {
    pub fn new(base: impl Into<String>) -> Self {
        HttpSource {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    fn url_for(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            resource.trim_start_matches('/')
        )
    }
}

impl DataSource for HttpSource {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>, LoadError> {
        let url = self.url_for(resource);
        debug!(%url, "fetching page document");

        let transport = |status: Option<u16>, reason: String| LoadError::Transport {
            resource: resource.to_string(),
            status,
            reason,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport(None, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport(
                Some(status.as_u16()),
                format!("HTTP error! status: {}", status.as_u16()),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport(Some(status.as_u16()), e.to_string()))?;
        Ok(body.to_vec())
    }

    fn describe(&self, resource: &str) -> String {
        self.url_for(resource)
    }
}

/// Documents stored as files in a directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirSource { root: root.into() }
    }

    fn path_for(&self, resource: &str) -> PathBuf {
        self.root.join(resource.trim_start_matches('/'))
    }
}

impl DataSource for DirSource {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>, LoadError> {
        let path = self.path_for(resource);
        debug!(path = %path.display(), "reading page document");
        tokio::fs::read(&path).await.map_err(|e| LoadError::Transport {
            resource: resource.to_string(),
            status: None,
            reason: format!("{}: {}", path.display(), e),
        })
    }

    fn describe(&self, resource: &str) -> String {
        self.path_for(resource).display().to_string()
    }
}

/// A source picked from a configured location: `http(s)://` URLs are fetched
/// over the network, anything else is treated as a directory.
#[derive(Debug, Clone)]
pub enum Source {
    Http(HttpSource),
    Dir(DirSource),
}

impl Source {
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Source::Http(HttpSource::new(location))
        } else {
            Source::Dir(DirSource::new(location))
        }
    }
}

impl DataSource for Source {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>, LoadError> {
        match self {
            Source::Http(s) => s.fetch(resource).await,
            Source::Dir(s) => s.fetch(resource).await,
        }
    }

    fn describe(&self, resource: &str) -> String {
        match self {
            Source::Http(s) => s.describe(resource),
            Source::Dir(s) => s.describe(resource),
        }
    }
}

/// Fetch `resource`, parse it and check that every required top-level key is
/// present. One attempt, no retries.
pub async fn load<S: DataSource>(
    source: &S,
    resource: &str,
    required_keys: &[&str],
) -> Result<Value, LoadError> {
    let body = source.fetch(resource).await?;
    let value: Value = serde_json::from_slice(&body).map_err(|e| LoadError::Parse {
        resource: resource.to_string(),
        source: e,
    })?;
    check_shape(resource, &value, required_keys)?;
    Ok(value)
}

/// `load`, then convert into the page's document type.
pub async fn load_document<D: DeserializeOwned, S: DataSource>(
    source: &S,
    resource: &str,
    required_keys: &[&str],
) -> Result<D, LoadError> {
    let value = load(source, resource, required_keys).await?;
    serde_json::from_value(value).map_err(|e| LoadError::Parse {
        resource: resource.to_string(),
        source: e,
    })
}

fn check_shape(resource: &str, value: &Value, required_keys: &[&str]) -> Result<(), LoadError> {
    let missing = match value.as_object() {
        Some(obj) => required_keys.iter().find(|k| !obj.contains_key(**k)),
        None => required_keys.first(),
    };
    match missing {
        Some(key) => Err(LoadError::Shape {
            resource: resource.to_string(),
            key: key.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CatalogDocument, ScheduleDocument};

    fn fixtures() -> DirSource {
        DirSource::new("tests/fixtures")
    }

    fn scratch(body: &str) -> (tempfile::TempDir, DirSource) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page.json"), body).unwrap();
        let source = DirSource::new(dir.path());
        (dir, source)
    }

    #[tokio::test]
    async fn loads_typed_document_from_directory() {
        let doc: CatalogDocument = load_document(&fixtures(), "cardapio.json", &["categories", "items"])
            .await
            .unwrap();
        assert!(doc.categories.contains(&"Doces".to_string()));
        assert!(!doc.items.is_empty());
    }

    #[tokio::test]
    async fn key_order_survives_loading() {
        let doc: ScheduleDocument = load_document(
            &fixtures(),
            "programacao.json",
            &["horariosFuncionamento", "eventos", "avisos"],
        )
        .await
        .unwrap();
        let first = &doc.horarios_funcionamento.dias_semana[0].0;
        assert_eq!(first, "Segunda a Sexta");
    }

    #[tokio::test]
    async fn missing_file_is_transport_error() {
        let err = load(&fixtures(), "nope.json", &[]).await.unwrap_err();
        assert!(matches!(err, LoadError::Transport { status: None, .. }));
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let (_dir, source) = scratch("{ \"items\": [");
        let err = load(&source, "page.json", &["items"]).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn missing_key_is_shape_error() {
        let (_dir, source) = scratch(r#"{"categories": []}"#);
        let err = load(&source, "page.json", &["categories", "items"]).await.unwrap_err();
        match err {
            LoadError::Shape { key, .. } => assert_eq!(key, "items"),
            other => panic!("expected shape error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_object_body_is_shape_error() {
        let (_dir, source) = scratch("[1, 2, 3]");
        let err = load(&source, "page.json", &["items"]).await.unwrap_err();
        assert!(matches!(err, LoadError::Shape { .. }));
    }

    #[tokio::test]
    async fn wrong_field_type_is_parse_error() {
        let (_dir, source) = scratch(r#"{"categories": [], "items": "none"}"#);
        let err = load_document::<CatalogDocument, _>(&source, "page.json", &["categories", "items"])
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn http_success_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/data/menu.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"items": []}"#)
            .create_async()
            .await;

        let source = HttpSource::new(format!("{}/data/", server.url()));
        let value = load(&source, "menu.json", &["items"]).await.unwrap();
        assert!(value["items"].as_array().unwrap().is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn http_404_is_transport_error_with_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/data/cardapio.json")
            .with_status(404)
            .create_async()
            .await;

        let source = HttpSource::new(format!("{}/data", server.url()));
        let err = load(&source, "cardapio.json", &["items"]).await.unwrap_err();
        assert!(matches!(err, LoadError::Transport { status: Some(404), .. }));
        assert!(err.to_string().contains("404"));
        mock.assert_async().await;
    }

    #[test]
    fn location_picks_source_kind() {
        assert!(matches!(Source::from_location("https://cafe.example/data"), Source::Http(_)));
        assert!(matches!(Source::from_location("./public/data"), Source::Dir(_)));
        assert_eq!(
            Source::from_location("http://localhost:8000/data/").describe("menu.json"),
            "http://localhost:8000/data/menu.json"
        );
    }
}
