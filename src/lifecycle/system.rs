use crate::clients::{LessonClient, WeekClient};
use crate::config::{ClientConfig, ConfigError};
use crate::token_store::TokenStore;
use resource_framework::{ActorClient, ApiContext, FrameworkError};
use thiserror::Error;
use tracing::{error, info, warn};

/// Errors raised while starting or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Context(#[from] FrameworkError),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// The runtime orchestrator: both resource actors plus their clients.
///
/// # Example
///
/// ```ignore
/// let system = TalkieSystem::start(&config, &store).await?;
///
/// let lesson = system.lesson_client.create_lesson(LessonCreate::new("Colours")).await?;
/// let weeks = system.week_client.fetch_all().await?;
///
/// system.shutdown().await?;
/// ```
pub struct TalkieSystem {
    /// Client for interacting with the Lesson actor
    pub lesson_client: LessonClient,

    /// Client for interacting with the Week actor
    pub week_client: WeekClient,

    has_token: bool,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TalkieSystem {
    /// Reads the token, spawns both actors and, if configured, prefetches both
    /// collections.
    ///
    /// The config is validated first, so a hand-built one with a zero buffer or
    /// timeout is rejected rather than reaching the actors.
    ///
    /// Without a token the system still starts; every operation then answers
    /// `Unauthenticated` without touching the network.
    pub async fn start(
        config: &ClientConfig,
        token_store: &dyn TokenStore,
    ) -> Result<Self, SystemError> {
        config.validate()?;

        let token = token_store.read(&config.token_key);
        if token.is_none() {
            warn!(token_key = %config.token_key, "No bearer token stored; requests will be skipped");
        }

        let context = ApiContext::with_timeout(
            config.base_url.as_str(),
            token,
            config.request_timeout(),
        )?;
        let has_token = context.has_token();

        // 1. Create actors
        let (lesson_actor, lesson_client) =
            crate::lesson_actor::with_buffer(config.channel_buffer);
        let (week_actor, week_client) = crate::week_actor::with_buffer(config.channel_buffer);

        // 2. Start actors with the shared context injected
        let lesson_handle = tokio::spawn(lesson_actor.run(context.clone()));
        let week_handle = tokio::spawn(week_actor.run(context));

        let system = Self {
            lesson_client,
            week_client,
            has_token,
            handles: vec![lesson_handle, week_handle],
        };

        if has_token && config.prefetch {
            system.prefetch().await;
        }

        info!(base_url = %config.base_url, has_token, "System started");
        Ok(system)
    }

    pub fn has_token(&self) -> bool {
        self.has_token
    }

    /// Loads both collections concurrently. Failures are logged and stay in state.
    pub async fn prefetch(&self) {
        let (lessons, weeks) = tokio::join!(
            self.lesson_client.fetch_all(),
            self.week_client.fetch_all()
        );

        match lessons {
            Ok(items) => info!(size = items.len(), "Lessons prefetched"),
            Err(e) => warn!(error = %e, "Lesson prefetch failed"),
        }
        match weeks {
            Ok(items) => info!(size = items.len(), "Weeks prefetched"),
            Err(e) => warn!(error = %e, "Week prefetch failed"),
        }
    }

    /// Gracefully shuts down both actors.
    ///
    /// Drops the clients, which closes their channels, then waits for every actor
    /// task. Returns an error if a task panicked.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.lesson_client);
        drop(self.week_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
