//! Site URL resolution for the page metadata.

/// Explicit site URL setting.
pub const SITE_URL_ENV: &str = "SITE_URL";
/// Deployment URL provided by the hosting platform.
pub const DEPLOYMENT_URL_ENV: &str = "VERCEL_URL";
/// Used when neither variable is set.
pub const LOCAL_SITE_URL: &str = "http://localhost:3000";

const COVER_IMAGE: &str = "/cover.png";

/// Resolved once at startup, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    url: String,
}

impl SiteConfig {
    /// Resolve from the process environment.
    ///
    /// `configured` is the `site_url` from the config file; it sits between
    /// `SITE_URL` and the platform deployment URL.
    pub fn from_env(configured: Option<&str>) -> Self {
        Self::resolve(|key| std::env::var(key).ok(), configured)
    }

    /// Resolve using `lookup` in place of the process environment.
    ///
    /// Order: `SITE_URL`, `configured`, `VERCEL_URL`, [`LOCAL_SITE_URL`].
    /// Empty values are skipped.
    pub fn resolve<F>(lookup: F, configured: Option<&str>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = non_empty(lookup(SITE_URL_ENV))
            .or_else(|| non_empty(configured.map(str::to_string)))
            .or_else(|| non_empty(lookup(DEPLOYMENT_URL_ENV)))
            .unwrap_or_else(|| LOCAL_SITE_URL.to_string());
        Self { url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Social-sharing cover image: the site URL plus `/cover.png`.
    pub fn cover_image_url(&self) -> String {
        format!("{}{COVER_IMAGE}", self.url)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
