use clap::Parser;

use mitigate_config::MitigateConfig;

/// Top-level CLI parser for the `mitigate` binary.
#[derive(Debug, Parser)]
#[command(
    name = "mitigate",
    version,
    about = "Mitigate - COVID mitigation records and insights service"
)]
pub struct Cli {
    /// Address to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database file, or ":memory:" (overrides store.path)
    #[arg(long)]
    pub database: Option<String>,

    /// Verbose mode (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Skip the startup citizen_id normalization pass
    #[arg(long)]
    pub skip_normalize: bool,
}

impl Cli {
    /// Layer command-line flags over the loaded configuration.
    pub fn apply(&self, config: &mut MitigateConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = &self.database {
            config.store.path.clone_from(path);
        }
        if self.skip_normalize {
            config.store.normalize_on_startup = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clap_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "mitigate",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--database",
            "/tmp/m.db",
            "--skip-normalize",
        ])
        .expect("cli should parse");

        let mut config = MitigateConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.server.address(), "127.0.0.1:8080");
        assert_eq!(config.store.path, "/tmp/m.db");
        assert!(!config.store.normalize_on_startup);
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let cli = Cli::try_parse_from(["mitigate"]).expect("cli should parse");
        let mut config = MitigateConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.server.port, 5001);
        assert!(config.store.normalize_on_startup);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["mitigate", "-v", "-q"]).is_err());
    }
}
