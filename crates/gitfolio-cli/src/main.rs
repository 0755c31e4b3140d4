use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gitfolio_api::{EmailClient, GitHubClient};
use gitfolio_core::providers::GitHubProjectSource;
use gitfolio_core::{Config, ProjectPanel, ProjectSource};
use gitfolio_tui::App;

#[derive(Parser)]
#[command(name = "gitfolio")]
#[command(version, about = "Terminal portfolio browser for a GitHub user's repositories", long_about = None)]
struct Cli {
    /// GitHub username to browse (overrides the configured one)
    #[arg(short, long)]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the repository list without starting the TUI
    List,
    /// Manage the stored GitHub access token
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(clap::Subcommand)]
enum TokenAction {
    /// Store a personal access token in the config file
    Set { token: String },
    /// Remove the stored token
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gitfolio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(user) = cli.user {
        config.github.username = user;
    }

    match cli.command {
        Some(Commands::List) => list_projects(&config).await,
        Some(Commands::Token { action }) => manage_token(config, action),
        None => browse(config).await,
    }
}

/// Launch the interactive portfolio browser
async fn browse(config: Config) -> anyhow::Result<()> {
    let client = GitHubClient::with_base_url(config.github_token(), config.github.api_url.clone());
    let authenticated = client.is_authenticated();
    let source = GitHubProjectSource::with_client(client);
    let panel = ProjectPanel::new(
        Box::new(source),
        config.github.username.clone(),
        config.github.max_repos,
    );

    let email_client = config.email.clone().map(EmailClient::new);
    let app = App::new(
        config.github.username.clone(),
        config.ui.dark_mode,
        authenticated,
    );

    gitfolio_tui::run_tui(app, panel, email_client, config).await
}

/// Plain listing for scripts and quick checks
async fn list_projects(config: &Config) -> anyhow::Result<()> {
    let client = GitHubClient::with_base_url(config.github_token(), config.github.api_url.clone());
    let source = GitHubProjectSource::with_client(client);

    let projects = source
        .list_projects(&config.github.username, config.github.max_repos)
        .await?;

    for project in projects {
        println!(
            "{:<32} {:>6}\u{2605} {:>5}\u{2442}  {:<12} updated {}",
            project.name,
            project.stars,
            project.forks,
            project.language.as_deref().unwrap_or("-"),
            project.updated_at.format("%Y-%m-%d"),
        );
    }

    Ok(())
}

fn manage_token(mut config: Config, action: TokenAction) -> anyhow::Result<()> {
    match action {
        TokenAction::Set { token } => {
            config.github.token = Some(token);
            config.save()?;
            println!("Token stored. API calls now run with the higher quota.");
        }
        TokenAction::Clear => {
            config.github.token = None;
            config.save()?;
            println!("Token cleared.");
        }
    }
    Ok(())
}
