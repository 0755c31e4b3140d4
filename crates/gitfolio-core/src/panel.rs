//! Projects panel state machine.
//!
//! `Idle -> Loading -> { Loaded, Failed }`, with a user-triggered retry from
//! `Failed` back through `Loading`. Filtering happens on the `Loaded`
//! snapshot elsewhere and never re-enters this machine.

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::{
    models::{Project, ProjectCard},
    source::ProjectSource,
    Error,
};

/// UI-facing lifecycle of the projects grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    Loading,
    Loaded(Vec<ProjectCard>),
    Failed(LoadFailure),
}

/// Why a top-level load failed. Drives which error panel gets rendered:
/// a spent rate limit gets its own, more descriptive panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    RateLimit,
    Api(u16),
    Network(String),
}

impl From<Error> for LoadFailure {
    fn from(err: Error) -> Self {
        match err {
            Error::RateLimitExceeded => LoadFailure::RateLimit,
            Error::ApiError(status) => LoadFailure::Api(status),
            Error::NotFound(_) => LoadFailure::Api(404),
            Error::NetworkError(msg) => LoadFailure::Network(msg),
            other => LoadFailure::Network(other.to_string()),
        }
    }
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadFailure::RateLimit => write!(f, "GitHub API rate limit exceeded"),
            LoadFailure::Api(status) => write!(f, "GitHub API error (status {})", status),
            LoadFailure::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

/// Owns the full project collection and the load lifecycle.
///
/// The loaded card list is the single source of truth the filter engine and
/// the renderer derive their views from; nothing else holds project state.
pub struct ProjectPanel {
    source: Box<dyn ProjectSource>,
    username: String,
    max_projects: u32,
    state: PanelState,
}

impl ProjectPanel {
    pub fn new(source: Box<dyn ProjectSource>, username: String, max_projects: u32) -> Self {
        Self {
            source,
            username,
            max_projects,
            state: PanelState::Idle,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The full loaded collection, if any
    pub fn cards(&self) -> Option<&[ProjectCard]> {
        match &self.state {
            PanelState::Loaded(cards) => Some(cards),
            _ => None,
        }
    }

    /// Whether the manual retry affordance applies
    pub fn can_retry(&self) -> bool {
        matches!(self.state, PanelState::Failed(_))
    }

    /// Fetch the repository list and resolve every card's cover image.
    ///
    /// The list fetch is all-or-nothing; cover lookups run as one concurrent
    /// batch and each failure is confined to its own card. The panel only
    /// becomes `Loaded` once every cover has settled.
    pub async fn load(&mut self) {
        self.state = PanelState::Loading;

        let projects = match self
            .source
            .list_projects(&self.username, self.max_projects)
            .await
        {
            Ok(projects) => projects,
            Err(e) => {
                warn!("Failed to load projects for {}: {}", self.username, e);
                self.state = PanelState::Failed(LoadFailure::from(e));
                return;
            }
        };

        info!("Loaded {} projects for {}", projects.len(), self.username);

        let cards = self.resolve_covers(projects).await;
        self.state = PanelState::Loaded(cards);
    }

    async fn resolve_covers(&self, projects: Vec<Project>) -> Vec<ProjectCard> {
        let source = self.source.as_ref();
        let username = self.username.as_str();

        let lookups = projects.iter().map(|project| {
            let name = project.name.as_str();
            async move {
                match source.cover_image(username, name).await {
                    Ok(cover) => cover,
                    Err(e) => {
                        // Missing or failed covers degrade to the placeholder
                        debug!("Cover lookup failed for {}/{}: {}", username, name, e);
                        None
                    }
                }
            }
        });

        let covers = join_all(lookups).await;

        projects
            .into_iter()
            .zip(covers)
            .map(|(project, cover)| ProjectCard::new(project, cover))
            .collect()
    }

    /// Topic tags for one project, fetched lazily when its detail view opens.
    /// Best-effort: a failed lookup yields no topics rather than an error.
    pub async fn topics_for(&self, name: &str) -> Vec<String> {
        match self.source.topics(&self.username, name).await {
            Ok(topics) => topics,
            Err(e) => {
                debug!("Topics lookup failed for {}/{}: {}", self.username, name, e);
                Vec::new()
            }
        }
    }
}
