use anyhow::{Context, Result};
use clap::Parser;
use keyenv::cli::{self, Cli};
use keyenv::{dotenv, observability, EnvConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Env file first (it may carry <PREFIX>_LOG_*), report after tracing init.
    let loaded = match &cli.env_file {
        Some(path) => {
            let report = dotenv::load_from(path)
                .with_context(|| format!("loading {}", path.display()))?;
            Some((path, report))
        }
        None => None,
    };

    let cfg = EnvConfig::new(cli.prefix.as_str());
    observability::init_tracing(&cfg);
    if let Some((path, report)) = &loaded {
        report.log(path);
    }
    tracing::debug!(prefix = %cfg.prefix(), "keyenv starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(&cli.command, &cfg, &mut out)
}
