// ABOUTME: Main library entry point for pagescrub, an HTML to clean-markdown converter.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, ScrubResult, ScrubError, ErrorCode, Options, ScrubRules.

//! Pagescrub - converts HTML pages into clean, structure-preserving markdown.
//!
//! Navigation chrome, scripts, and hyperlink markup are stripped; headings,
//! lists, code blocks, and paragraph boundaries survive. A heuristic flags
//! pages that need JavaScript to materialize their content, and an optional
//! headless-browser path fetches a rendered copy instead.
//!
//! # Example
//!
//! ```no_run
//! use pagescrub::{Client, ScrubError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScrubError> {
//!     let client = Client::builder().build();
//!     let result = client.convert_url("https://example.com/page").await?;
//!     println!("{}", result.markdown);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod detect;
pub mod dom;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod postprocess;
pub mod render;
pub mod resource;
pub mod result;
pub mod rules;
pub mod text;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, ScrubError};
pub use crate::options::{ClientBuilder, Options};
pub use crate::result::{ScrubResult, PLAIN_NOTICE, RENDERED_NOTICE, WARNING_NOTICE};
pub use crate::rules::ScrubRules;
