use std::sync::Arc;

use crate::client::SupabaseClient;
use crate::config::{load_config, resolve_connection, resolve_connection_with, Config, Connection};
use crate::error::KalitaResult;
use crate::feed::polling::PollingFeed;
use crate::feed::sample::sample_items;
use crate::feed::static_feed::StaticFeed;
use crate::feed::NewsFeed;
use crate::logging::log_info;
use crate::models::NewsItem;

/// Central context for CLI operations: the loaded configuration and the
/// choice between the live feed and the built-in demo items.
pub struct CliContext {
    config: Config,
    demo: bool,
    env: Option<Vec<(String, String)>>,
    connection: Option<Connection>,
    client: Option<Arc<SupabaseClient>>,
}

impl CliContext {
    /// Load context from the saved configuration
    pub fn load(demo: bool) -> KalitaResult<Self> {
        CliContextBuilder::new().demo(demo).build()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_demo(&self) -> bool {
        self.demo
    }

    /// Resolved connection settings. Fails with `MissingConfig` when neither
    /// the environment nor the config file provide them.
    pub fn connection(&mut self) -> KalitaResult<&Connection> {
        let connection = match self.connection.take() {
            Some(connection) => connection,
            None => match &self.env {
                Some(vars) => resolve_connection_with(&self.config, |key| {
                    vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
                })?,
                None => resolve_connection(&self.config)?,
            },
        };
        Ok(self.connection.insert(connection))
    }

    /// Get or create the PostgREST client
    pub fn client(&mut self) -> KalitaResult<Arc<SupabaseClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let connection = self.connection()?.clone();
        let client = Arc::new(SupabaseClient::new(
            &connection.url,
            &connection.anon_key,
            &connection.table,
        )?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// The feed every view reads from. Demo mode never touches the network.
    pub fn feed(&mut self) -> KalitaResult<Box<dyn NewsFeed>> {
        if self.demo {
            log_info("Using built-in demo feed");
            return Ok(Box::new(StaticFeed::sample()));
        }

        let refresh = self.connection()?.refresh;
        let client = self.client()?;
        log_info(&format!(
            "Polling {} every {}s",
            client.endpoint(),
            refresh.as_secs()
        ));
        Ok(Box::new(PollingFeed::spawn(client.as_ref().clone(), refresh)))
    }

    /// Items used by one-shot commands in demo mode.
    pub fn demo_items(&self) -> Vec<NewsItem> {
        sample_items()
    }
}

/// Builder for contexts with explicit settings, used by tests and `main`.
pub struct CliContextBuilder {
    config: Option<Config>,
    demo: bool,
    env: Option<Vec<(String, String)>>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            demo: false,
            env: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn demo(mut self, demo: bool) -> Self {
        self.demo = demo;
        self
    }

    /// Replace the process environment with fixed values when resolving
    /// the connection.
    pub fn with_env(mut self, vars: &[(&str, &str)]) -> Self {
        self.env = Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    pub fn build(self) -> KalitaResult<CliContext> {
        let config = match self.config {
            Some(config) => config,
            None => load_config()?,
        };

        Ok(CliContext {
            config,
            demo: self.demo,
            env: self.env,
            connection: None,
            client: None,
        })
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
