use crate::builder;
use crate::configuration::Settings;
use crate::models::Cli;
use crate::scanner;
use anyhow::Context;
use log::{debug, info};
use resolve_path::PathResolveExt;
use std::io::Write;

/// Scans the log named by `cli` and either builds a gallery in `--todir` or
/// writes the urls, one per line, to `out`.
pub async fn run<W: Write>(cli: &Cli, settings: &Settings, out: &mut W) -> anyhow::Result<()> {
    debug!("Settings {:?}", settings);
    let urls = scanner::scan(&cli.logfile, settings)?;

    match &cli.todir {
        Some(todir) => {
            let dest_dir = todir
                .try_resolve()
                .with_context(|| format!("unable to resolve {}", todir.display()))?;
            info!("Output Directory: {}", dest_dir.display());
            builder::build(&urls, &dest_dir).await?;
            info!("Finished!");
        }
        None => {
            writeln!(out, "{}", urls.join("\n"))?;
        }
    }

    Ok(())
}
