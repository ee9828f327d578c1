// ABOUTME: Configuration options for pagescrub and the fluent ClientBuilder.
// ABOUTME: Pattern tables ride along as an immutable ScrubRules value so components stay independently testable.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;
use crate::rules::ScrubRules;

/// Configuration options for the pagescrub client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub allow_private_networks: bool,
    /// Fetch pages through a headless browser instead of a plain GET.
    pub render: bool,
    /// Settle period after navigation before the rendered markup is read.
    pub render_wait: Duration,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
    pub rules: ScrubRules,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "Pagescrub/1.0".to_string(),
            allow_private_networks: false,
            render: false,
            render_wait: Duration::from_secs(3),
            http_client: None,
            headers: HashMap::new(),
            rules: ScrubRules::default(),
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Allow or disallow requests to private networks.
    pub fn allow_private_networks(mut self, allow: bool) -> Self {
        self.opts.allow_private_networks = allow;
        self
    }

    /// Fetch through a headless browser so client-side scripts run.
    pub fn render(mut self, render: bool) -> Self {
        self.opts.render = render;
        self
    }

    /// Set the post-navigation settle period used when rendering.
    pub fn render_wait(mut self, wait: Duration) -> Self {
        self.opts.render_wait = wait;
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Replace the conversion rule tables.
    pub fn rules(mut self, rules: ScrubRules) -> Self {
        self.opts.rules = rules;
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}
