// ABOUTME: The main Client struct that obtains markup and runs the conversion pipeline.
// ABOUTME: Provides async convert_url() and the pure, infallible convert_html().

use dom_query::Document;

use crate::detect;
use crate::error::ScrubError;
use crate::options::{ClientBuilder, Options};
use crate::pipeline;
use crate::render;
use crate::resource::{fetch, FetchOptions};
use crate::result::ScrubResult;

/// Converts HTML documents to clean markdown.
///
/// Markup acquisition (HTTP fetch, optional headless render) happens here;
/// the conversion itself is a pure function of the markup and never fails.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http: reqwest::Client,
}

impl Client {
    /// Create a ClientBuilder for configuring a new Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(opts.user_agent.clone())
                .timeout(opts.timeout)
                .build()
                .unwrap_or_default()
        });
        Self { opts, http }
    }

    /// The options this client was built with.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Fetch a URL and convert it.
    ///
    /// With `render` enabled in the options the markup comes from the
    /// headless browser; otherwise from a plain GET. Only acquisition can
    /// fail; conversion of obtained markup cannot.
    pub async fn convert_url(&self, url: &str) -> Result<ScrubResult, ScrubError> {
        if self.opts.render {
            let html = render::render(url, self.opts.render_wait, self.opts.timeout).await?;
            return Ok(self.convert_markup(&html, url, true));
        }

        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
            allow_private_networks: self.opts.allow_private_networks,
        };
        let fetched = fetch(&self.http, url, &fetch_opts).await?;
        let html = fetched.text();
        Ok(self.convert_markup(&html, url, false))
    }

    /// Convert markup that the caller already obtained.
    ///
    /// `rendered` records whether a scripted renderer produced the markup;
    /// it selects the provenance notice and nothing else.
    pub fn convert_html(&self, html: &str, source: &str, rendered: bool) -> ScrubResult {
        self.convert_markup(html, source, rendered)
    }

    fn convert_markup(&self, html: &str, source: &str, rendered: bool) -> ScrubResult {
        let rules = &self.opts.rules;

        // The detector must see a parse of the original markup, never a tree
        // the filter stages have already altered.
        let probe = Document::from(html);
        let looks_js_rendered = detect::looks_js_rendered(html, &probe, rules);

        let doc = Document::from(html);
        let output = pipeline::run(&doc, rules);

        ScrubResult::assemble(source, output.title, &output.body, looks_js_rendered, rendered)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
