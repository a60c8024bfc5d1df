//! The built-in posts, used when no other source is configured and as the
//! extractor's fallback data set.

use chrono::NaiveDate;

use super::Post;

struct SamplePost {
    id: i64,
    title: &'static str,
    subtitle: &'static str,
    date: (i32, u32, u32),
    paragraphs: &'static [&'static str],
}

const AUTHOR: &str = "QMES Team";

const SAMPLES: &[SamplePost] = &[
    SamplePost {
        id: 1,
        title: "Welcome to QMES!",
        subtitle: "Our First Blog Post",
        date: (2024, 1, 15),
        paragraphs: &[
            "Welcome to the Queen Mary Electronics Society! We're excited to share our journey with you.",
            "Our society focuses on electronics, programming, and robotics, bringing together passionate students from Queen Mary University.",
            "Stay tuned for updates on our projects, competitions, and activities!",
        ],
    },
    SamplePost {
        id: 2,
        title: "First Robotics Competition",
        subtitle: "A Great Success",
        date: (2024, 2, 20),
        paragraphs: &[
            "We recently participated in our first robotics competition and it was an amazing experience!",
            "The team worked hard to build and program our robot, and we learned so much in the process.",
            "Special thanks to all our sponsors and supporters who made this possible.",
        ],
    },
    SamplePost {
        id: 3,
        title: "Weekly Electronics Workshops",
        subtitle: "Learning Together",
        date: (2024, 3, 10),
        paragraphs: &[
            "Our weekly electronics workshops are in full swing!",
            "Students are learning about circuit design, Arduino programming, and sensor integration.",
            "It's great to see everyone's enthusiasm and creativity in action.",
        ],
    },
];

/// The three sample posts, oldest first.
pub fn sample_posts() -> Vec<Post> {
    SAMPLES
        .iter()
        .filter_map(|sample| {
            let (y, m, d) = sample.date;
            let date_posted = NaiveDate::from_ymd_opt(y, m, d)?;
            let content = sample
                .paragraphs
                .iter()
                .map(|p| format!("<p>{p}</p>"))
                .collect::<Vec<_>>()
                .join("\n");

            Some(Post {
                id: sample.id,
                title: sample.title.to_string(),
                subtitle: sample.subtitle.to_string(),
                author: AUTHOR.to_string(),
                date_posted,
                content,
            })
        })
        .collect()
}
