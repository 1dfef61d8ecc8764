//! Where the employee listing comes from: the remote demo API or a local
//! JSON file with the same body shape.

use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, instrument};

pub const DEFAULT_API_URL: &str = "https://dummyjson.com/users";
pub const DEFAULT_PAGE_LIMIT: usize = 20;

/// A listing item as returned by the directory API. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: u32,
    pub phone: Option<String>,
    pub address: Option<RemoteAddress>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteAddress {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UsersPage {
    pub users: Vec<RemoteUser>,
}

pub trait DirectorySource {
    /// Fetch up to `limit` listing items.
    fn fetch(&self, limit: usize) -> AppResult<Vec<RemoteUser>>;

    /// Human readable origin, for messages.
    fn describe(&self) -> String;
}

/// Remote listing endpoint queried with `GET <url>?limit=<n>`.
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration) -> AppResult<Self> {
        reqwest::Url::parse(url).map_err(|e| AppError::InvalidSource(format!("{url}: {e}")))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.to_string(),
            client,
        })
    }
}

impl DirectorySource for HttpSource {
    #[instrument(skip(self), fields(url = %self.url))]
    fn fetch(&self, limit: usize) -> AppResult<Vec<RemoteUser>> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("limit", limit)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch {
                status: status.as_u16(),
            });
        }

        let page: UsersPage = response.json()?;
        info!(count = page.users.len(), "directory page received");
        Ok(page.users)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Local JSON file shaped like the API body.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DirectorySource for FileSource {
    fn fetch(&self, limit: usize) -> AppResult<Vec<RemoteUser>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            AppError::InvalidSource(format!("{}: {e}", self.path.display()))
        })?;
        let page: UsersPage = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), count = page.users.len(), "directory file read");
        Ok(page.users.into_iter().take(limit).collect())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Build the source named by a config or CLI value: URLs go over HTTP,
/// anything else is a file path (`~/` is expanded).
pub fn from_location(location: &str, timeout: Duration) -> AppResult<Box<dyn DirectorySource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(crate::utils::path::expand_tilde(
            location,
        ))))
    }
}
