// ABOUTME: Render collaborator: fetches a page through headless Chrome so client-side scripts run.
// ABOUTME: Launches a browser per call, navigates, waits a settle period, and returns page.content().

use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;

use crate::error::ScrubError;

/// Fetch fully rendered markup for a URL.
///
/// `wait` is the settle period after navigation completes, giving client-side
/// frameworks time to populate the DOM before the markup is read. All
/// failures (launch, navigation, capture) surface as Render errors; the
/// caller decides whether to fall back to a plain fetch.
pub async fn render(url: &str, wait: Duration, timeout: Duration) -> Result<String, ScrubError> {
    let config = BrowserConfig::builder()
        .request_timeout(timeout)
        .build()
        .map_err(|e| {
            ScrubError::render(url, "Render", Some(anyhow::anyhow!("browser config: {}", e)))
        })?;

    let (mut browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        ScrubError::render(
            url,
            "Render",
            Some(anyhow::anyhow!("browser launch failed: {}", e)),
        )
    })?;

    // The CDP event stream must be drained for the connection to make
    // progress; per-event errors there do not fail the navigation.
    let handler_task = tokio::spawn(async move { while handler.next().await.is_some() {} });

    let result = navigate_and_capture(&browser, url, wait).await;

    let _ = browser.close().await;
    let _ = browser.wait().await;
    handler_task.abort();

    result
}

async fn navigate_and_capture(
    browser: &Browser,
    url: &str,
    wait: Duration,
) -> Result<String, ScrubError> {
    let page: Page = browser.new_page("about:blank").await.map_err(|e| {
        ScrubError::render(url, "Render", Some(anyhow::anyhow!("new page: {}", e)))
    })?;

    page.goto(url).await.map_err(|e| {
        ScrubError::render(url, "Render", Some(anyhow::anyhow!("navigation failed: {}", e)))
    })?;

    page.wait_for_navigation().await.map_err(|e| {
        ScrubError::render(url, "Render", Some(anyhow::anyhow!("load failed: {}", e)))
    })?;

    tokio::time::sleep(wait).await;

    page.content().await.map_err(|e| {
        ScrubError::render(url, "Render", Some(anyhow::anyhow!("content capture: {}", e)))
    })
}
