use crate::{JekyllArgs, build::Builder};

use super::load_config;

pub async fn run(args: &JekyllArgs) -> Result<(), anyhow::Error> {
    let (config, base_path) = load_config(args.config_file.as_deref())?;

    let builder = Builder::new(config, base_path);
    let result = builder.build_jekyll_site()?;

    let display_output = result
        .output_dir
        .canonicalize()
        .unwrap_or(result.output_dir.clone());
    println!(
        "Generated Jekyll site in {} ({} files, {} posts, {} static files)",
        display_output.display(),
        result.files,
        result.posts,
        result.static_files
    );

    println!();
    println!("Next steps:");
    println!("  1. cd {}", display_output.display());
    println!("  2. bundle install");
    println!("  3. bundle exec jekyll serve");
    println!("  4. Open http://localhost:4000 to preview the site");

    Ok(())
}
