//! Random blog posts for seeding a database.

use crate::post::post_model::{Author, BlogPost};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Number of posts seeded before each integration test.
pub const SEED_COUNT: usize = 10;

pub const TITLES: &[&str] = &[
    "10 things -- you won't believe #4",
    "Eggs are overrated",
    "Mesmerizing meringues",
    "Why I gave up on sourdough",
    "A field guide to breakfast",
];

pub const CONTENTS: &[&str] = &[
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
    "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
    "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
];

pub const FIRST_NAMES: &[&str] = &["Ada", "Grace", "Linus", "Barbara", "Ken"];

pub const LAST_NAMES: &[&str] = &["Lovelace", "Hopper", "Torvalds", "Liskov", "Thompson"];

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&str]) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}

pub fn generate_author<R: Rng + ?Sized>(rng: &mut R) -> Author {
    Author {
        first_name: pick(rng, FIRST_NAMES),
        last_name: pick(rng, LAST_NAMES),
    }
}

pub fn generate_post_with<R: Rng + ?Sized>(rng: &mut R) -> BlogPost {
    let author = generate_author(rng);
    let title = pick(rng, TITLES);
    let content = pick(rng, CONTENTS);
    BlogPost::new(author, title, content)
}

pub fn generate_post() -> BlogPost {
    generate_post_with(&mut rand::rng())
}

pub fn generate_posts(count: usize) -> Vec<BlogPost> {
    let mut rng = rand::rng();
    (0..count).map(|_| generate_post_with(&mut rng)).collect()
}
