use crate::api::models::Catalog;
use once_cell::sync::Lazy;
use reqwest::Url;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

static EMPTY_CATALOG: Catalog = Catalog { albums: Vec::new() };

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog location {location}: {message}")]
    InvalidLocation { location: String, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Catalog request returned HTTP {0}")]
    Status(u16),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load progress of the one catalog fetch. Settles exactly once.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready(Catalog),
    /// The fetch failed; browse as if the catalog were empty.
    Unavailable,
}

impl CatalogStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogStatus::Loading)
    }

    /// The catalog to browse. Empty while loading and after a failed load.
    pub fn catalog(&self) -> &Catalog {
        match self {
            CatalogStatus::Ready(catalog) => catalog,
            CatalogStatus::Loading | CatalogStatus::Unavailable => &EMPTY_CATALOG,
        }
    }

    /// Records the load outcome. Returns false (and keeps the current state)
    /// when the status has already settled.
    pub fn settle(&mut self, outcome: CatalogStatus) -> bool {
        if !self.is_loading() {
            tracing::debug!("Ignoring late catalog result; catalog already settled");
            return false;
        }
        *self = outcome;
        true
    }
}

pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    Ok(serde_json::from_str(text)?)
}

/// Resolves `location` relative to `base` (a page URL).
pub fn resolve_against(base: &str, location: &str) -> Result<Url, CatalogError> {
    let invalid = |message: String| CatalogError::InvalidLocation {
        location: location.to_string(),
        message,
    };
    let base = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    base.join(location).map_err(|e| invalid(e.to_string()))
}

/// Resolves the configured location against the page the widget is
/// served from.
#[cfg(target_arch = "wasm32")]
pub fn resolve_source(location: &str) -> Result<Url, CatalogError> {
    let base = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .ok_or_else(|| CatalogError::InvalidLocation {
            location: location.to_string(),
            message: "page location is not available".to_string(),
        })?;
    resolve_against(&base, location)
}

/// Off the browser there is no page to resolve against, so only absolute
/// http(s) locations can be fetched.
#[cfg(not(target_arch = "wasm32"))]
pub fn resolve_source(location: &str) -> Result<Url, CatalogError> {
    let invalid = |message: String| CatalogError::InvalidLocation {
        location: location.to_string(),
        message,
    };
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url),
        Ok(url) => Err(invalid(format!("unsupported scheme {}", url.scheme()))),
        Err(_) => Err(invalid("relative location needs a page to resolve against".to_string())),
    }
}

pub async fn fetch_catalog(url: &Url) -> Result<Catalog, CatalogError> {
    let response = HTTP_CLIENT.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status.as_u16()));
    }
    let text = response.text().await?;
    parse_catalog(&text)
}

/// Single fail-soft attempt at loading the catalog. Failures are logged and
/// reported as `Unavailable` so the grid falls back to its placeholder.
pub async fn load_catalog(location: &str) -> CatalogStatus {
    let result = match resolve_source(location) {
        Ok(url) => fetch_catalog(&url).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(catalog) => {
            tracing::info!("Loaded catalog with {} albums", catalog.len());
            CatalogStatus::Ready(catalog)
        }
        Err(err) => {
            tracing::warn!("No catalog available, waiting for music: {err}");
            CatalogStatus::Unavailable
        }
    }
}
