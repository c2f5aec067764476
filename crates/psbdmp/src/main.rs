use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use clap::{ArgGroup, Parser};
use colored::Colorize;

use psbdmp_core::dates;

use crate::client::{ClientConfig, DumpClient};
use crate::prelude::{println, *};

mod client;
mod error;
mod fetch;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about = "Search and download paste dumps from the psbdmp.ws service"
)]
#[command(group(ArgGroup::new("query").required(true)))]
pub struct App {
    /// ID of a dump to download and print to stdout
    #[arg(long = "dl", value_name = "ID", group = "query")]
    dl: Option<String>,

    /// Domain to search the dumps for
    #[arg(long, group = "query")]
    domain: Option<String>,

    /// Email to search the dumps for
    #[arg(long, group = "query")]
    email: Option<String>,

    /// Keyword to search the dumps for
    #[arg(long, group = "query")]
    search: Option<String>,

    /// Number of days back to get dumps from (sign is ignored)
    #[arg(long, value_name = "DAYS", group = "query", allow_negative_numbers = true)]
    since: Option<i64>,

    /// Fetch each dump found and write it to disk instead of listing IDs
    #[arg(long)]
    fetch: bool,

    /// Directory where the fetched dumps are written
    #[arg(long, value_name = "DIR", default_value_os_t = std::env::temp_dir())]
    out: PathBuf,

    /// Output search results as JSON
    #[arg(long)]
    json: bool,

    /// Base URL of the psbdmp service
    #[arg(long, env = "PSBDMP_BASE_URL", default_value = client::DEFAULT_BASE_URL)]
    base_url: String,

    /// User-Agent header sent with every request
    #[arg(long, env = "PSBDMP_USER_AGENT", default_value = client::DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "PSBDMP_TIMEOUT", default_value = "9")]
    timeout: u64,

    /// Whether to display additional information
    #[arg(long, env = "PSBDMP_VERBOSE", default_value = "false")]
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Download(String),
    Domain(String),
    Email(String),
    Search(String),
    Since(i64),
}

impl App {
    /// The query mode selected on the command line. clap guarantees at most
    /// one of the mode flags is present; download wins if that ever changes.
    fn mode(&self) -> Option<Mode> {
        if let Some(id) = &self.dl {
            return Some(Mode::Download(id.clone()));
        }
        if let Some(domain) = &self.domain {
            return Some(Mode::Domain(domain.clone()));
        }
        if let Some(email) = &self.email {
            return Some(Mode::Email(email.clone()));
        }
        if let Some(keyword) = &self.search {
            return Some(Mode::Search(keyword.clone()));
        }
        self.since.map(Mode::Since)
    }

    fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.base_url.clone())
            .with_user_agent(self.user_agent.clone())
            .with_timeout(Duration::from_secs(self.timeout))
    }
}

async fn run(app: App) -> Result<()> {
    let Some(mode) = app.mode() else {
        return Err(eyre!(
            "gotta choose an option: --dl, --domain, --email, --search or --since"
        ));
    };

    if app.verbose {
        println!("psbdmp API base: {}", app.base_url);
        println!();
    }

    let client = DumpClient::new(app.client_config())?;

    let dumps = match mode {
        Mode::Download(id) => {
            let content = client.get_dump_content(&id).await?;
            println!("{content}");
            return Ok(());
        }
        Mode::Domain(domain) => client.search_by_domain(&domain).await?,
        Mode::Email(email) => client.search_by_email(&email).await?,
        Mode::Search(keyword) => client.search(&keyword).await?,
        Mode::Since(days) => {
            let (from, to) = dates::since_range(Local::now().date_naive(), days);
            client.get_by_date(from, to).await?
        }
    };

    if app.json {
        println!("{}", serde_json::to_string_pretty(&dumps)?);
        return Ok(());
    }

    println!(
        "{} {} dumps found!",
        "[+]".green().bold(),
        dumps.len().to_string().bright_yellow()
    );

    if app.fetch {
        println!("{} fetching the dumps and writing to disk...", "[+]".green().bold());
        let written = fetch::fetch_all(&client, &dumps, &app.out).await?;
        println!(
            "{} wrote {} of {} dumps to {}",
            "[+]".green().bold(),
            written,
            dumps.len(),
            app.out.display().to_string().cyan()
        );
    } else if !dumps.is_empty() {
        println!("{} dump IDs matching the query:", "[+]".green().bold());
        for dump in &dumps {
            println!("{}", dump.id);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    run(App::parse()).await
}
