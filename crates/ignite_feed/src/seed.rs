// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashSet;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::{Author, PostData};

const BUILTIN: &str = include_str!("../feed.json");

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("malformed feed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("post {0} appears more than once")]
    DuplicatePost(u32),
    #[error("post {0} has no content")]
    EmptyPost(u32),
}

/// Posts shown on the page, along with the identity used to sign comments
/// written on it.
#[derive(Debug, Clone, Deserialize)]
pub struct Feed {
    pub viewer: Author,
    pub posts: Vec<PostData>,
}

impl Feed {
    /// The feed bundled with the app.
    pub fn builtin() -> Result<Self, FeedError> {
        Feed::from_json(BUILTIN)
    }

    pub fn from_json(json: &str) -> Result<Self, FeedError> {
        let feed: Feed = serde_json::from_str(json)?;

        let mut seen = HashSet::with_capacity(feed.posts.len());

        for post in &feed.posts {
            if !seen.insert(post.id) {
                return Err(FeedError::DuplicatePost(post.id));
            }
            if post.content.is_empty() {
                return Err(FeedError::EmptyPost(post.id));
            }
        }

        debug!("loaded feed with {} post(s)", feed.posts.len());

        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentKind;

    const VIEWER: &str = r#""viewer": { "avatarUrl": "a.png", "name": "Ana", "role": "Dev" }"#;

    fn post(id: u32, content: &str) -> String {
        format!(
            r#"{{
                "id": {id},
                "author": {{ "avatarUrl": "b.png", "name": "Bia", "role": "CTO" }},
                "publishedAt": "2022-05-03T20:00:00Z",
                "content": [{content}]
            }}"#
        )
    }

    #[test]
    fn builtin_feed_loads() {
        let feed = Feed::builtin().unwrap();

        assert!(!feed.viewer.name.is_empty());
        assert_eq!(feed.posts.len(), 2);
        assert!(feed
            .posts
            .iter()
            .flat_map(|post| &post.content)
            .any(|line| line.kind == ContentKind::Link));
    }

    #[test]
    fn parses_posts_in_order() {
        let line = r#"{ "type": "paragraph", "content": "Oi" }"#;
        let json = format!(r#"{{ {VIEWER}, "posts": [{}, {}] }}"#, post(2, line), post(1, line));

        let feed = Feed::from_json(&json).unwrap();

        assert_eq!(feed.viewer.name, "Ana");
        assert_eq!(feed.posts.iter().map(|p| p.id).collect::<Vec<_>>(), [2, 1]);
    }

    #[test]
    fn rejects_duplicate_posts() {
        let line = r#"{ "type": "paragraph", "content": "Oi" }"#;
        let json = format!(r#"{{ {VIEWER}, "posts": [{}, {}] }}"#, post(4, line), post(4, line));

        assert!(matches!(Feed::from_json(&json), Err(FeedError::DuplicatePost(4))));
    }

    #[test]
    fn rejects_empty_posts() {
        let json = format!(r#"{{ {VIEWER}, "posts": [{}] }}"#, post(9, ""));

        assert!(matches!(Feed::from_json(&json), Err(FeedError::EmptyPost(9))));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Feed::from_json(r#"{ "posts": [] }"#).unwrap_err();

        assert!(matches!(err, FeedError::Json(_)));
        assert!(err.to_string().starts_with("malformed feed: missing field `viewer`"));
    }
}
