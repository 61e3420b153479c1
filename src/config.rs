use std::path::PathBuf;

/// Conventional corpus location, relative to the working directory.
pub const DEFAULT_CORPUS_ROOT: &str = "data/json";

/// Environment variable overriding the default corpus root.
pub const CORPUS_ROOT_ENV: &str = "PRIMEVUE_DOCS_ROOT";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub corpus_root: PathBuf,
}

impl ServerConfig {
    /// Resolve configuration from the command line and environment.
    ///
    /// Precedence: first CLI argument, then `PRIMEVUE_DOCS_ROOT`, then the
    /// conventional `data/json`. Always succeeds; a bad path surfaces later
    /// as an empty corpus, not a startup failure.
    pub fn from_args_and_env() -> Self {
        let arg = std::env::args().nth(1);
        let env = std::env::var(CORPUS_ROOT_ENV).ok();
        Self::resolve(arg, env)
    }

    fn resolve(arg: Option<String>, env: Option<String>) -> Self {
        let corpus_root = arg
            .or(env)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS_ROOT));
        Self { corpus_root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_wins_over_environment() {
        let config = ServerConfig::resolve(Some("cli/docs".into()), Some("env/docs".into()));
        assert_eq!(config.corpus_root, PathBuf::from("cli/docs"));
    }

    #[test]
    fn environment_used_without_cli_argument() {
        let config = ServerConfig::resolve(None, Some("env/docs".into()));
        assert_eq!(config.corpus_root, PathBuf::from("env/docs"));
    }

    #[test]
    fn defaults_to_conventional_path() {
        let config = ServerConfig::resolve(None, None);
        assert_eq!(config.corpus_root, PathBuf::from(DEFAULT_CORPUS_ROOT));
    }
}
