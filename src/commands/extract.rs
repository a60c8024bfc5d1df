use crate::{ExtractArgs, legacy::{ExtractOutcome, Extractor}};

use super::load_config;

pub async fn run(args: &ExtractArgs) -> Result<(), anyhow::Error> {
    let (config, base_path) = load_config(args.config_file.as_deref())?;

    let mut extractor = Extractor::new(&config.legacy, &base_path);
    if let Some(database) = &args.database {
        extractor = extractor.with_database(database.clone());
    }
    if let Some(output_dir) = &args.output_dir {
        extractor = extractor.with_output_dir(output_dir.clone());
    }

    println!(
        "Extracting blog posts from {}",
        extractor.database().display()
    );

    let path = match extractor.run().await? {
        ExtractOutcome::Extracted { path, count } => {
            println!("Found {count} blog post(s)");
            println!("Saved to {}", path.display());
            path
        }
        ExtractOutcome::Sample {
            path,
            count,
            reason,
        } => {
            println!("Could not read the database: {reason}");
            println!("Saved {count} sample blog post(s) to {}", path.display());
            path
        }
    };

    println!();
    println!("To build the site from these posts, add to clubsite.yaml:");
    println!();
    println!("  posts:");
    println!("    json: {}", path.display());

    Ok(())
}
