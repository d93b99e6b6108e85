//! Remote template retrieval
//!
//! A template is a subdirectory of a remote repository. Fetching downloads
//! the repository tarball for one git reference and unpacks only that
//! subdirectory, so the result carries no version history. Every fetch is a
//! fresh download: nothing is cached between calls or between runs.
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use payload_templates_projects::fetch::{RemoteTemplate, TemplateFetcher, TracingFetchObserver};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = TemplateFetcher::new("https://codeload.github.com")?;
//! let remote = RemoteTemplate::new("Lotus015", "payload-templates", "templates/modern");
//! let summary = fetcher
//!     .fetch(&remote, Utf8Path::new("/work/my-firm"), &TracingFetchObserver)
//!     .await?;
//! println!("{} files", summary.files);
//! # Ok(())
//! # }
//! ```

mod archive;
mod observer;

pub use archive::extract_subdirectory;
pub use observer::{FetchEvent, FetchObserver, TracingFetchObserver};

use camino::{Utf8Path, Utf8PathBuf};
use payload_templates_core::config::SourceConfig;
use payload_templates_core::TemplateDescriptor;
use reqwest::StatusCode;
use std::fmt;
use std::fs;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("payload-templates/", env!("CARGO_PKG_VERSION"));

/// A template location: `{owner}/{repo}/{subpath}` at a git reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTemplate {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Git reference to download
    pub reference: String,
    /// Directory inside the repository
    pub subpath: String,
}

impl RemoteTemplate {
    /// Create a remote template at `HEAD`
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, subpath: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            reference: "HEAD".to_string(),
            subpath: subpath.into(),
        }
    }

    /// Locate a registered template in the configured source repository
    pub fn from_source(source: &SourceConfig, template: &TemplateDescriptor) -> Self {
        Self::new(&source.repo_owner, &source.repo_name, template.subpath)
            .with_reference(&source.reference)
    }

    /// Set the git reference
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    /// URL of the repository tarball under `base_url`
    pub fn archive_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/{}/tar.gz/{}",
            base_url.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.reference
        )
    }
}

impl fmt::Display for RemoteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.owner, self.repo, self.subpath)?;
        if self.reference != "HEAD" {
            write!(f, "#{}", self.reference)?;
        }
        Ok(())
    }
}

/// Outcome of a successful fetch
#[derive(Debug, Clone)]
pub struct FetchSummary {
    /// Directory the template was written to
    pub destination: Utf8PathBuf,
    /// Number of files written
    pub files: usize,
    /// Size of the downloaded archive
    pub bytes: u64,
}

/// Downloads templates over HTTP
#[derive(Debug, Clone)]
pub struct TemplateFetcher {
    client: reqwest::Client,
    archive_base_url: String,
}

impl TemplateFetcher {
    /// Create a fetcher for archives served under `archive_base_url`
    pub fn new(archive_base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            archive_base_url: archive_base_url.into(),
        })
    }

    /// Fetch `remote` into `destination`, overwriting conflicting files
    ///
    /// # Errors
    /// Returns error if:
    /// - The repository or reference does not exist
    /// - The download fails
    /// - The archive has no `remote.subpath` directory
    ///
    /// A destination created by a failed call is removed again, so the
    /// same project name can be retried.
    pub async fn fetch(
        &self,
        remote: &RemoteTemplate,
        destination: &Utf8Path,
        observer: &dyn FetchObserver,
    ) -> Result<FetchSummary> {
        info!("Fetching template: {} -> {}", remote, destination);

        if is_non_empty_dir(destination)? {
            observer.on_event(&FetchEvent::DestinationNotEmpty {
                path: destination.to_path_buf(),
            });
        }

        let url = remote.archive_url(&self.archive_base_url);
        debug!("Downloading {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::template_not_found(url));
        }
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16(), url));
        }

        let data = response.bytes().await?;
        let bytes = data.len() as u64;
        observer.on_event(&FetchEvent::Downloaded { bytes });

        let created = !destination.exists();
        let files = match extract_subdirectory(&data, &remote.subpath, destination) {
            Ok(files) => files,
            Err(e) => {
                if created {
                    discard_partial(destination);
                }
                return Err(e);
            }
        };
        observer.on_event(&FetchEvent::Extracted { files });

        info!("Template fetched successfully");

        Ok(FetchSummary {
            destination: destination.to_path_buf(),
            files,
            bytes,
        })
    }
}

fn discard_partial(destination: &Utf8Path) {
    match fs::remove_dir_all(destination) {
        Ok(()) => debug!("Removed partially extracted {}", destination),
        Err(e) => warn!("Could not remove {}: {}", destination, e),
    }
}

fn is_non_empty_dir(path: &Utf8Path) -> Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }
    Ok(fs::read_dir(path)?.next().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_url() {
        let remote = RemoteTemplate::new("Lotus015", "payload-templates", "templates/modern");
        assert_eq!(
            remote.archive_url("https://codeload.github.com/"),
            "https://codeload.github.com/Lotus015/payload-templates/tar.gz/HEAD"
        );
    }

    #[test]
    fn test_display_degit_style() {
        let remote = RemoteTemplate::new("Lotus015", "payload-templates", "templates/boutique");
        assert_eq!(remote.to_string(), "Lotus015/payload-templates/templates/boutique");

        let pinned = remote.with_reference("v1.2.0");
        assert_eq!(
            pinned.to_string(),
            "Lotus015/payload-templates/templates/boutique#v1.2.0"
        );
    }

    #[test]
    fn test_from_source() {
        let source = SourceConfig {
            repo_owner: "acme".to_string(),
            repo_name: "starters".to_string(),
            reference: "main".to_string(),
            archive_base_url: "https://example.com".to_string(),
        };
        let template = payload_templates_core::registry::by_value("traditional").unwrap();

        let remote = RemoteTemplate::from_source(&source, template);

        assert_eq!(remote.owner, "acme");
        assert_eq!(remote.repo, "starters");
        assert_eq!(remote.reference, "main");
        assert_eq!(remote.subpath, "templates/traditional");
    }

    #[test]
    fn test_is_non_empty_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();

        assert!(!is_non_empty_dir(&dir.join("missing")).unwrap());
        assert!(!is_non_empty_dir(&dir).unwrap());

        fs::write(dir.join("file"), "x").unwrap();
        assert!(is_non_empty_dir(&dir).unwrap());
    }
}
