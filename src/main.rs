use anyhow::{Context, Result};
use stylemark::{Config, build_site};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let site = config.site_config()?;
    let report = build_site(&config, &site).context("Failed to build site")?;

    log::info!(
        "Generated {} pages ({} skipped) with {} utility classes into {}",
        report.pages,
        report.skipped,
        report.utilities,
        config.output.display()
    );

    if report.skipped > 0 {
        log::warn!("{} pages failed to compile; see warnings above", report.skipped);
    }

    Ok(())
}
