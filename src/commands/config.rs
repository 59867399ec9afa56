use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::GlobalConfig;

pub fn init(force: bool) -> Result<()> {
    let path = GlobalConfig::config_path()?;

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}\n\nUse --force to overwrite it.",
            path.display()
        );
    }

    GlobalConfig::create_default_config(&path)?;
    println!("{} {}", "Wrote".green(), path.display());
    Ok(())
}

pub fn path() -> Result<()> {
    println!("{}", GlobalConfig::config_path()?.display());
    Ok(())
}
