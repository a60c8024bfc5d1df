use crate::{CleanArgs, build::{Builder, SiteKind}};

use super::load_config;

pub async fn run(args: &CleanArgs) -> Result<(), anyhow::Error> {
    let (config, base_path) = load_config(args.config_file.as_deref())?;
    let builder = Builder::new(config, base_path);

    for kind in [SiteKind::StaticHtml, SiteKind::Jekyll] {
        let site_path = builder.output_dir(kind);
        if !site_path.exists() {
            continue;
        }

        let site_path = site_path.canonicalize().unwrap_or(site_path);
        if args.dry_run {
            println!("Would delete {}", site_path.display());
        } else {
            tokio::fs::remove_dir_all(&site_path).await?;
            println!("Deleted {}", site_path.display());
        }
    }

    Ok(())
}
