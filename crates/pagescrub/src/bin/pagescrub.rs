// ABOUTME: CLI binary for pagescrub.
// ABOUTME: Converts HTML files or URLs to markdown files in an output directory, or to stdout.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use pagescrub::{Client, ScrubResult};

#[derive(Parser, Debug)]
#[command(name = "pagescrub")]
#[command(about = "Convert HTML files or webpages to clean markdown. Links are removed; structure is preserved.")]
struct Args {
    /// Output directory for markdown files (default: output)
    #[arg(short = 'o', long = "output-dir", default_value = "output")]
    output_dir: PathBuf,

    /// Print converted markdown to stdout instead of writing files
    #[arg(long = "stdout")]
    stdout: bool,

    /// Output full results as JSON instead of raw markdown
    #[arg(long = "json")]
    json_output: bool,

    /// Fetch URLs with a headless browser so client-side scripts run
    #[arg(long = "render")]
    render: bool,

    /// Milliseconds to wait after navigation for client-side rendering
    #[arg(long = "render-wait", default_value_t = 3000)]
    render_wait_ms: u64,

    /// Allow fetching from private/local networks
    #[arg(long = "allow-private-networks")]
    allow_private_networks: bool,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// One or more paths to HTML files or URLs (http/https)
    #[arg(required = true)]
    inputs: Vec<String>,
}

/// Check if the given input is a URL rather than a file path.
fn is_url(input: &str) -> bool {
    match url::Url::parse(input) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Derive the output path in the output directory from the input name.
///
/// URLs use the basename of the URL path with any query/fragment stripped,
/// or the host with dots replaced by underscores when the path is empty.
/// Files use their stem. The extension is always `.md`.
fn output_path(input: &str, output_dir: &Path) -> PathBuf {
    let basename = if is_url(input) {
        url_basename(input)
    } else {
        Path::new(input)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "page".to_string())
    };

    let stem = Path::new(&basename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page".to_string());

    output_dir.join(format!("{}.md", stem))
}

fn url_basename(input: &str) -> String {
    let Ok(parsed) = url::Url::parse(input) else {
        return "page".to_string();
    };
    let path = parsed.path().trim_end_matches('/');
    let basename = path.rsplit('/').next().unwrap_or("");
    if !basename.is_empty() {
        return basename.to_string();
    }
    match parsed.host_str() {
        Some(host) => host.replace('.', "_"),
        None => "page".to_string(),
    }
}

/// Convert a single input. Returns the result or reports the error.
async fn process_input(client: &Client, input: &str) -> Option<ScrubResult> {
    if is_url(input) {
        match client.convert_url(input).await {
            Ok(result) => Some(result),
            Err(e) => {
                eprintln!("error converting {}: {}", input, e);
                None
            }
        }
    } else {
        match fs::read_to_string(input) {
            Ok(html) => Some(client.convert_html(&html, input, false)),
            Err(e) => {
                eprintln!("error reading file {}: {}", input, e);
                None
            }
        }
    }
}

/// Emit one result to stdout or to its file in the output directory.
fn emit(result: &ScrubResult, input: &str, args: &Args) -> bool {
    let content = if args.json_output {
        match serde_json::to_string_pretty(result) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("error serializing result for {}: {}", input, e);
                return false;
            }
        }
    } else {
        result.markdown.clone()
    };

    if args.stdout {
        println!("{}", content);
        return true;
    }

    let path = output_path(input, &args.output_dir);
    if let Err(e) = fs::write(&path, format!("{}\n", content)) {
        eprintln!("error writing to {:?}: {}", path, e);
        return false;
    }
    println!("Converted '{}' -> '{}'", input, path.display());
    true
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if !args.stdout {
        if let Err(e) = fs::create_dir_all(&args.output_dir) {
            eprintln!("error creating output directory {:?}: {}", args.output_dir, e);
            return ExitCode::from(1);
        }
    }

    let client = Client::builder()
        .render(args.render)
        .render_wait(Duration::from_millis(args.render_wait_ms))
        .allow_private_networks(args.allow_private_networks)
        .build();

    let start = Instant::now();
    let mut success_count = 0usize;
    let mut fail_count = 0usize;

    for input in &args.inputs {
        let ok = match process_input(&client, input).await {
            Some(result) => emit(&result, input, &args),
            None => false,
        };
        if ok {
            success_count += 1;
        } else {
            fail_count += 1;
        }
    }

    let elapsed = start.elapsed();

    if args.inputs.len() > 1 {
        println!("\nSummary: {} succeeded, {} failed", success_count, fail_count);
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    if fail_count > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
