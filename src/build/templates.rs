//! Built-in templates, embedded in the binary.
//!
//! Names mirror the `templates/` directory, which is also the layout a
//! theme directory uses to override them.

macro_rules! builtin {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../../templates/", $name)))),*]
    };
}

/// `(name, source)` pairs for every built-in template.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = builtin![
    // Shared chrome
    "base.html",
    "partials/nav.html",
    "partials/footer.html",
    "partials/scripts.html",
    "partials/post_preview.html",
    "bodies/about-us.html",
    "bodies/contact.html",
    // Static HTML site
    "pages/index.html",
    "pages/about-us.html",
    "pages/our-progress.html",
    "pages/gallery.html",
    "pages/contact.html",
    "pages/post.html",
    // Jekyll site
    "jekyll/Gemfile",
    "jekyll/_layouts/default.html",
    "jekyll/_layouts/post.html",
    "jekyll/_layouts/page.html",
    "jekyll/_includes/navigation.html",
    "jekyll/_includes/footer.html",
    "jekyll/index.html",
    "jekyll/about-us.html",
    "jekyll/our-progress.html",
    "jekyll/gallery.html",
    "jekyll/contact.html",
];
