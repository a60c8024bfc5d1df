//! Configuration type definitions.
//!
//! Every section carries serde defaults, so an empty (or absent) config file
//! describes the stock society site.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// =============================================================================
// Root config
// =============================================================================

/// The full site configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    /// Top navigation bar, in display order
    pub nav: Vec<NavItem>,
    /// Footer links to social media profiles
    pub social: Vec<SocialLink>,
    /// Image file names shown on the gallery page (relative to `images/`)
    pub gallery: Vec<String>,
    pub posts: PostsConfig,
    pub output: OutputConfig,
    pub assets: AssetsConfig,
    pub jekyll: JekyllConfig,
    pub theme: ThemeConfig,
    pub legacy: LegacyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            nav: default_nav(),
            social: default_social(),
            gallery: default_gallery(),
            posts: PostsConfig::default(),
            output: OutputConfig::default(),
            assets: AssetsConfig::default(),
            jekyll: JekyllConfig::default(),
            theme: ThemeConfig::default(),
            legacy: LegacyConfig::default(),
        }
    }
}

// =============================================================================
// Site configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    /// Short name used in page titles ("QMES - Gallery")
    pub short_name: String,
    pub description: String,
    /// Public URL of the published site (Jekyll `url`)
    pub url: String,
    /// Path prefix when served as a project page (Jekyll `baseurl`)
    pub baseurl: String,
    /// Default author for posts that don't name one
    pub author: String,
    /// Closing line of the footer
    pub footer_note: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Queen Mary Electronics Society".to_string(),
            short_name: "QMES".to_string(),
            description: "QMES - Electronics, Programming, and Robotics Society at Queen Mary University of London".to_string(),
            url: "https://qmes.github.io".to_string(),
            baseurl: String::new(),
            author: "QMES Team".to_string(),
            footer_note: "This site was created for QMES by the QMES team, EST 2024".to_string(),
        }
    }
}

// =============================================================================
// Navigation and footer
// =============================================================================

/// An entry in the top navigation bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Identifier pages use to mark themselves active
    pub key: String,
    /// Display label
    pub label: String,
    /// Page name without extension; `index` is the home page
    pub page: String,
}

impl NavItem {
    fn new(key: &str, label: &str, page: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            page: page.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

fn default_nav() -> Vec<NavItem> {
    vec![
        NavItem::new("home", "HOME", "index"),
        NavItem::new("about-us", "BECOME A MEMBER", "about-us"),
        NavItem::new("our-progress", "OUR PROGRESS", "our-progress"),
        NavItem::new("gallery", "GALLERY", "gallery"),
        NavItem::new("contact", "CONTACT US", "contact"),
    ]
}

fn default_social() -> Vec<SocialLink> {
    [
        ("Twitter", "https://twitter.com/"),
        ("Youtube", "https://www.youtube.com/"),
        ("TikTok", "https://www.tiktok.com/"),
        ("Instagram", "https://www.instagram.com/"),
        ("Facebook", "https://www.facebook.com/"),
    ]
    .into_iter()
    .map(|(name, url)| SocialLink {
        name: name.to_string(),
        url: url.to_string(),
    })
    .collect()
}

fn default_gallery() -> Vec<String> {
    [
        "gallery-image-1.jpg",
        "gallery-image-2.jpg",
        "gallery-image-3.jpg",
        "gallery-image-4.jpg",
        "gallery-image-5.jpg",
        "robot.jpg",
        "robot.png",
        "pcb.png",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

// =============================================================================
// Post sources
// =============================================================================

/// Where post records come from. With neither field set the built-in
/// sample posts are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    /// A JSON array of post records (the extractor's output format)
    pub json: Option<PathBuf>,
    /// A directory of Markdown files with YAML front matter
    pub markdown_dir: Option<PathBuf>,
}

// =============================================================================
// Output and assets
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Plain HTML site, ready for GitHub Pages' `docs/` folder
    pub static_site: PathBuf,
    /// Jekyll source tree
    pub jekyll: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            static_site: PathBuf::from("docs"),
            jekyll: PathBuf::from("_site"),
        }
    }
}

/// A directory copied verbatim into an output tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDir {
    /// Source directory (relative to the config file)
    pub from: PathBuf,
    /// Destination (relative to the output directory)
    pub to: PathBuf,
}

impl AssetDir {
    fn new(from: &str, to: &str) -> Self {
        Self {
            from: PathBuf::from(from),
            to: PathBuf::from(to),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub static_site: Vec<AssetDir>,
    pub jekyll: Vec<AssetDir>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            static_site: vec![
                AssetDir::new("app/static/images", "images"),
                AssetDir::new("app/static/styles", "styles"),
            ],
            jekyll: vec![
                AssetDir::new("app/static/images", "images"),
                AssetDir::new("app/static/styles", "assets/css"),
            ],
        }
    }
}

// =============================================================================
// Jekyll
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JekyllConfig {
    /// Categories written into every post's front matter
    pub categories: Vec<String>,
    /// Tags written into every post's front matter
    pub tags: Vec<String>,
    /// Paths Jekyll should not process
    pub exclude: Vec<String>,
}

impl Default for JekyllConfig {
    fn default() -> Self {
        Self {
            categories: vec!["blog".to_string()],
            tags: ["qmes", "electronics", "robotics"]
                .into_iter()
                .map(String::from)
                .collect(),
            exclude: [
                "Gemfile.lock",
                "node_modules",
                "vendor",
                ".git",
                ".github",
                "app/",
                "clubsite.yaml",
                "extracted_blog_posts.json",
                "sample_blog_posts.json",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Directory whose `templates/` override the built-in templates by name
    pub path: Option<PathBuf>,
}

// =============================================================================
// Legacy database
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyConfig {
    /// SQLite database of the old Flask site
    pub database: PathBuf,
    /// Table holding blog posts
    pub table: String,
    /// Written when posts were read from the database
    pub extracted_file: PathBuf,
    /// Written when the database was unavailable
    pub sample_file: PathBuf,
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("app/site.db"),
            table: "blogpost".to_string(),
            extracted_file: PathBuf::from("extracted_blog_posts.json"),
            sample_file: PathBuf::from("sample_blog_posts.json"),
        }
    }
}
