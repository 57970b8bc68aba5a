use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Application-level constants
pub const APP_NAME: &str = "Advocate Directory";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Address the API binds to when none is given.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "advocate_directory=info"
}

/// Command-line and environment configuration for the server binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "advocate-directory", version, about = "Advocate directory HTTP API")]
pub struct Settings {
    /// SQLite database file. Without it the server starts, but every
    /// data route answers with a configuration error.
    #[arg(long = "database-path", env = "DATABASE_URL")]
    pub database_path: Option<PathBuf>,

    /// Socket address to listen on.
    #[arg(long, env = "ADVOCATES_BIND", default_value = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    /// Insert the reference specialties and sample advocates before serving.
    #[arg(long)]
    pub seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_to_localhost() {
        let settings = Settings::try_parse_from(["advocate-directory"]).unwrap();
        assert_eq!(settings.bind.to_string(), DEFAULT_BIND_ADDR);
        assert!(!settings.seed);
    }

    #[test]
    fn flags_override_defaults() {
        let settings = Settings::try_parse_from([
            "advocate-directory",
            "--database-path",
            "/tmp/advocates.db",
            "--bind",
            "0.0.0.0:8080",
            "--seed",
        ])
        .unwrap();
        assert_eq!(settings.database_path, Some(PathBuf::from("/tmp/advocates.db")));
        assert_eq!(settings.bind.port(), 8080);
        assert!(settings.seed);
    }

    #[test]
    fn malformed_bind_address_is_rejected() {
        let result = Settings::try_parse_from(["advocate-directory", "--bind", "not-an-addr"]);
        assert!(result.is_err());
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
