//! Page rendering for the greeting card.
//!
//! Templates are embedded at build time and compiled once into a minijinja
//! environment; the server shares one [`PageRenderer`] across requests.

use anyhow::{Context, Result};
use minijinja::{Environment, context};
use serde::Serialize;

use crate::core::greeting::CardView;
use crate::core::symbols::{CELEBRATION_MESSAGE, TARGET};
use crate::io::site::SiteConfig;

const PAGE_TEMPLATE: &str = include_str!("templates/page.html");
const STYLE_TEMPLATE: &str = include_str!("templates/style.css");

/// Footer link target.
pub const REPOSITORY_URL: &str = "https://github.com/lamlam/kinga-shinnen";

/// Values for the document head that depend on the site URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadMeta {
    pub title: &'static str,
    pub og_url: String,
    pub og_type: &'static str,
    pub og_image: String,
    pub og_title: &'static str,
    pub twitter_card: &'static str,
}

impl HeadMeta {
    pub fn for_site(site: &SiteConfig) -> Self {
        Self {
            title: TARGET,
            og_url: site.url().to_string(),
            og_type: "website",
            og_image: site.cover_image_url(),
            og_title: TARGET,
            twitter_card: "summary_large_image",
        }
    }
}

/// Template engine wrapper around minijinja.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("page.html", PAGE_TEMPLATE)
            .context("compile page template")?;
        env.add_template("style.css", STYLE_TEMPLATE)
            .context("compile stylesheet template")?;
        Ok(Self { env })
    }

    /// Render the full HTML document for one card.
    pub fn render(&self, site: &SiteConfig, card: &CardView) -> Result<String> {
        let template = self.env.get_template("page.html")?;
        let rendered = template
            .render(context! {
                head => HeadMeta::for_site(site),
                card => card,
                celebration => CELEBRATION_MESSAGE,
                repository_url => REPOSITORY_URL,
            })
            .context("render page")?;
        Ok(rendered)
    }
}
