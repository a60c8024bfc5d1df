use crate::{BuildArgs, build::Builder, util::tree_lines};

use super::load_config;

pub async fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
    let (config, base_path) = load_config(args.config_file.as_deref())?;

    let builder = Builder::new(config, base_path);
    let result = builder.build_static_site()?;

    let display_output = result
        .output_dir
        .canonicalize()
        .unwrap_or(result.output_dir.clone());
    println!(
        "Built static site to {} ({} pages, {} posts, {} static files)",
        display_output.display(),
        result.pages,
        result.posts,
        result.static_files
    );

    println!();
    for line in tree_lines(&result.output_dir)? {
        println!("{line}");
    }

    println!();
    println!("Next steps:");
    println!(
        "  1. Open {} in a browser to preview the site",
        display_output.join("index.html").display()
    );
    println!("  2. Commit the output directory and push to GitHub");
    println!("  3. In the repository settings, serve GitHub Pages from this directory");

    Ok(())
}
