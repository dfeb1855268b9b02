// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Ignite Feed
//!
//! State and data behind the Ignite feed page. Nothing in this crate touches
//! the DOM, so everything here can be tested on the host:
//!
//! - [`CommentThread`] owns the comments and the pending draft of one post.
//! - [`PublishedTime`] turns a timestamp into the strings a `<time>` element shows.
//! - [`Feed`] is the seed data the page renders.
//!
//! ```
//! use chrono::Utc;
//! use ignite_feed::{Author, CommentThread};
//!
//! let viewer = Author::new("https://github.com/octocat.png", "Octocat", "Mascot");
//! let mut thread = CommentThread::new();
//!
//! thread.update_draft("Muito bom!");
//!
//! let id = thread.submit_draft(&viewer, Utc::now()).unwrap();
//!
//! assert_eq!(thread.draft(), "");
//! assert_eq!(thread.like(id), Some(1));
//! ```

mod comment;
mod model;
mod seed;
mod thread;

pub mod time;

pub use comment::{CommentId, CommentRecord, LikeCounter};
pub use model::{Author, ContentKind, ContentLine, PostData};
pub use seed::{Feed, FeedError};
pub use thread::{CommentThread, ThreadError};
pub use time::PublishedTime;
