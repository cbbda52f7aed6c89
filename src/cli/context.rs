//! Shared state handed to every command.

use tracing::debug;

use civiclens_core::{
    FilterComposition, Issue, IssueProvider, JsonlProvider, MockProvider, SortKey, User, ViewQuery,
    ViewTag,
};

use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::format::print_json;
use crate::session::{FileStore, Session};

/// Resolved config plus output mode.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    json: bool,
}

impl CommandContext {
    #[must_use]
    pub const fn new(config: Config, json: bool) -> Self {
        Self { config, json }
    }

    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print `value` as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[allow(clippy::unused_self)]
    pub fn json<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        print_json(value)
    }

    #[must_use]
    pub fn session_store(&self) -> FileStore {
        FileStore::new(&self.config.session_file)
    }

    #[must_use]
    pub fn session(&self) -> Session {
        Session::load(&self.session_store())
    }

    /// Persist `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be written.
    pub fn save_session(&self, session: &Session) -> Result<()> {
        session.save(&mut self.session_store())
    }

    /// The signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn` when nobody is signed in.
    pub fn require_user(&self) -> Result<User> {
        let session = self.session();
        session.require_user().cloned()
    }

    /// Where issues come from for this invocation.
    #[must_use]
    pub fn provider(&self) -> Box<dyn IssueProvider> {
        match &self.config.data_file {
            Some(path) => Box::new(JsonlProvider::new(path)),
            None => Box::new(MockProvider),
        }
    }

    /// Load the full issue collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed cannot be read or parsed.
    pub fn load_issues(&self) -> Result<Vec<Issue>> {
        let provider = self.provider();
        let issues = provider.load()?;
        debug!(source = %provider.describe(), count = issues.len(), "loaded issues");
        Ok(issues)
    }

    /// View state from list flags, falling back to configured defaults.
    #[must_use]
    pub fn view_query(&self, args: &ListArgs) -> ViewQuery {
        let view = args
            .view
            .as_deref()
            .map_or(self.config.default_view, |tag| {
                tag.parse::<ViewTag>().unwrap_or_default()
            });
        let sort = args
            .sort
            .as_deref()
            .map_or_else(|| self.config.default_sort.clone(), |key| {
                key.parse::<SortKey>().unwrap_or_default()
            });
        let composition = if args.compose {
            FilterComposition::Compose
        } else {
            self.config.filter_composition
        };
        ViewQuery {
            view,
            search: args.search.clone().unwrap_or_default(),
            sort,
            composition,
        }
    }
}
