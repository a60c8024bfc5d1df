//! Output naming for posts.
//!
//! Both output trees name a post after its date and title
//! (`2024-01-15-welcome-to-qmes`), so names are planned once per build.

use std::collections::HashSet;

use crate::post::Post;
use crate::util::slugify;

/// A post together with the file stem it is written under.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPost {
    pub post: Post,
    pub stem: String,
}

/// The natural file stem of a post: `YYYY-MM-DD-<slug>`.
///
/// A title with no usable characters falls back to `post-<id>`.
pub fn post_file_stem(post: &Post) -> String {
    let slug = slugify(&post.title);
    let slug = if slug.is_empty() {
        format!("post-{}", post.id)
    } else {
        slug
    };
    format!("{}-{}", post.date_posted.format("%Y-%m-%d"), slug)
}

/// Assign every post a unique file stem and order them newest first.
///
/// Stems are handed out oldest first, so when two posts collide the older
/// one keeps the natural name and later ones get `-2`, `-3`, ...
pub fn plan_posts(posts: &[Post]) -> Vec<PlannedPost> {
    let mut ordered: Vec<&Post> = posts.iter().collect();
    ordered.sort_by(|a, b| (a.date_posted, a.id).cmp(&(b.date_posted, b.id)));

    let mut taken: HashSet<String> = HashSet::new();
    let mut planned: Vec<PlannedPost> = Vec::with_capacity(ordered.len());

    for post in ordered {
        let natural = post_file_stem(post);
        let mut stem = natural.clone();
        let mut n = 2;
        while !taken.insert(stem.clone()) {
            stem = format!("{natural}-{n}");
            n += 1;
        }

        if stem != natural {
            log::warn!(
                "post {} ('{}') renamed to {} to avoid a file name collision",
                post.id,
                post.title,
                stem
            );
        }

        planned.push(PlannedPost {
            post: post.clone(),
            stem,
        });
    }

    planned.reverse();
    planned
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::post::sample_posts;

    fn post(id: i64, title: &str, date: (i32, u32, u32)) -> Post {
        Post {
            id,
            title: title.to_string(),
            subtitle: String::new(),
            author: "QMES Team".to_string(),
            date_posted: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            content: String::new(),
        }
    }

    #[test]
    fn test_post_file_stem() {
        let posts = sample_posts();
        let stems: Vec<String> = posts.iter().map(post_file_stem).collect();
        assert_eq!(
            stems,
            [
                "2024-01-15-welcome-to-qmes",
                "2024-02-20-first-robotics-competition",
                "2024-03-10-weekly-electronics-workshops",
            ]
        );
    }

    #[test]
    fn test_post_file_stem_without_usable_title() {
        assert_eq!(
            post_file_stem(&post(9, "?!", (2024, 5, 1))),
            "2024-05-01-post-9"
        );
    }

    #[test]
    fn test_plan_posts_newest_first() {
        let planned = plan_posts(&sample_posts());
        let ids: Vec<i64> = planned.iter().map(|p| p.post.id).collect();
        assert_eq!(ids, [3, 2, 1]);
        assert_eq!(planned[0].stem, "2024-03-10-weekly-electronics-workshops");
    }

    #[test]
    fn test_plan_posts_disambiguates_collisions() {
        // Same date, titles differing only in punctuation
        let posts = vec![
            post(2, "Hello?", (2024, 1, 1)),
            post(1, "Hello!", (2024, 1, 1)),
            post(3, "Hello", (2024, 1, 1)),
        ];
        let planned = plan_posts(&posts);

        let mut stems: Vec<(i64, String)> = planned
            .iter()
            .map(|p| (p.post.id, p.stem.clone()))
            .collect();
        stems.sort();
        assert_eq!(
            stems,
            [
                (1, "2024-01-01-hello".to_string()),
                (2, "2024-01-01-hello-2".to_string()),
                (3, "2024-01-01-hello-3".to_string()),
            ]
        );
    }

    #[test]
    fn test_plan_posts_distinct_pairs_give_distinct_stems() {
        let posts = vec![
            post(1, "Workshop", (2024, 1, 1)),
            post(2, "Workshop", (2024, 1, 2)),
            post(3, "Workshop!", (2024, 1, 2)),
            post(4, "Work shop", (2024, 1, 2)),
            post(5, "Work-shop", (2024, 1, 2)),
        ];
        let planned = plan_posts(&posts);
        let unique: HashSet<&str> = planned.iter().map(|p| p.stem.as_str()).collect();
        assert_eq!(unique.len(), posts.len());
    }

    #[test]
    fn test_plan_posts_is_deterministic() {
        let posts = sample_posts();
        assert_eq!(plan_posts(&posts), plan_posts(&posts));
    }
}
