//! # System Lifecycle
//!
//! Boots the lesson and week actors against one [`ApiContext`](resource_framework::ApiContext)
//! and shuts them down again.
//!
//! ## Start-up
//!
//! ```rust,ignore
//! let config = ClientConfig::load(Path::new("talkie.json"))?;
//! let store = token_store::from_env(&config.token_key, &config.token_file);
//! let system = TalkieSystem::start(&config, store.as_ref()).await?;
//!
//! let lessons = system.lesson_client.fetch_all().await?;
//! system.shutdown().await?;
//! ```
//!
//! 1. **Token** - read once from the [`TokenStore`](crate::token_store::TokenStore).
//!    It is never re-read; an expired token simply makes requests fail.
//! 2. **Context** - one `reqwest` client with the configured timeout, shared by both actors.
//! 3. **Actors** - created first, then spawned with the context injected through `run()`.
//! 4. **Prefetch** - with a token and `prefetch` on, both collections are loaded once.
//!    A failed prefetch is logged and left in each resource's `error`.
//!
//! ## Graceful Shutdown
//!
//! Dropping the clients closes the request channels; each actor drains what is
//! queued, logs its final size, and exits. [`TalkieSystem::shutdown`] awaits them.
//! Clones of the clients handed out elsewhere keep their actor alive until they
//! are dropped as well.

pub mod system;

pub use system::*;
