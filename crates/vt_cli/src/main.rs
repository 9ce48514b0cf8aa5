use anyhow::{bail, Context};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tracing::info;
use vt_core::lexicon::{TOP_FAKE_WORDS, TOP_REAL_WORDS};
use vt_core::{Article, SampleKind};
use vt_inference::{Config, ModelKind, DEFAULT_BASE_URL, DEFAULT_MODEL_NAME};
use vt_web::AppState;

mod logging;
mod output;

#[derive(Debug, Clone, Copy, PartialEq)]
struct HumanDuration(Duration);

fn unit_seconds(unit: char) -> Option<u64> {
    match unit {
        's' => Some(1),
        'm' => Some(60),
        'h' => Some(3600),
        _ => None,
    }
}

impl FromStr for HumanDuration {
    type Err = String;

    /// Parses `30s`, `1m`, `1h15m30s` or a bare number of seconds.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if !s.chars().any(|c| c.is_ascii_digit()) {
            return Err("Duration must include a number".to_string());
        }

        let too_large = || "Duration too large".to_string();
        let mut total: u64 = 0;
        let mut pending: Option<u64> = None;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if let Some(digit) = c.to_digit(10) {
                let value = pending
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(u64::from(digit)))
                    .ok_or_else(too_large)?;
                pending = Some(value);
                continue;
            }

            let multiplier = unit_seconds(c).ok_or_else(|| format!("Invalid duration unit: {}", c))?;
            let value = pending.take().ok_or_else(|| format!("Missing number before '{}'", c))?;
            total = value
                .checked_mul(multiplier)
                .and_then(|secs| total.checked_add(secs))
                .ok_or_else(too_large)?;
        }

        // A trailing bare number is seconds
        if let Some(secs) = pending {
            total = total.checked_add(secs).ok_or_else(too_large)?;
        }

        if total == 0 {
            return Err("Duration must be greater than zero".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "News credibility analyzer", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, default_value = "gemini", help = "Model to use for inference. Available models: gemini (default), heuristic, keyword")]
    model: String,
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long, global = true, default_value = DEFAULT_MODEL_NAME)]
    model_name: String,
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Timeout for the remote model (e.g. 30s, 1m)
    #[arg(long, global = true, default_value = "30s")]
    timeout: HumanDuration,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Classify an article as REAL or FAKE
    Analyze {
        #[arg(long, default_value = "")]
        title: String,
        /// Body text. Read from stdin when neither --text nor --file is given.
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        /// Analyze a canned article instead (fake or real)
        #[arg(long, conflicts_with_all = ["title", "text", "file"])]
        sample: Option<String>,
        /// Print the raw JSON verdict
        #[arg(long)]
        json: bool,
    },
    /// Serve the analysis API over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Print the keyword weights used by the offline models
    Lexicon,
    /// Print a canned article (fake or real)
    Sample { kind: String },
}

impl Cli {
    fn inference_config(&self) -> anyhow::Result<Config> {
        Ok(Config {
            model: ModelKind::from_str(&self.model)?,
            api_key: self.api_key.clone(),
            model_name: self.model_name.clone(),
            base_url: self.base_url.clone(),
            timeout: self.timeout.0,
        })
    }
}

async fn read_article(title: String, text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<Article> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            buffer
        }
    };

    let article = Article::new(title, text);
    if article.is_blank() {
        bail!("Nothing to analyze: provide a title, --text, --file or pipe text on stdin");
    }
    Ok(article)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Lexicon => {
            output::print_weights("FAKE", TOP_FAKE_WORDS);
            println!();
            output::print_weights("REAL", TOP_REAL_WORDS);
            return Ok(());
        }
        Commands::Sample { ref kind } => {
            output::print_article(&vt_core::sample(kind.parse::<SampleKind>()?));
            return Ok(());
        }
        _ => {}
    }

    let config = cli.inference_config()?;
    let inference = vt_inference::create_model(Some(config)).await?;
    info!("🧠 Inference model initialized successfully (using {})", inference.name());

    match cli.command {
        Commands::Analyze { title, text, file, sample, json } => {
            let article = match sample {
                Some(kind) => vt_core::sample(kind.parse::<SampleKind>()?),
                None => read_article(title, text, file).await?,
            };
            info!("📰 Analyzing: {}", article.title);
            let result = inference.analyze_article(&article).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                output::print_result(&result);
            }
        }
        Commands::Serve { host, port } => {
            let addr: SocketAddr = format!("{}:{}", host, port)
                .parse()
                .with_context(|| format!("Invalid listen address {}:{}", host, port))?;
            vt_web::run_server(AppState::new(inference), addr).await?;
        }
        Commands::Lexicon | Commands::Sample { .. } => {}
    }

    Ok(())
}
