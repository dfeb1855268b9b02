// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::Author;

/// Identifier of a comment, unique within its [`CommentThread`](crate::CommentThread).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommentId(pub(crate) u32);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Approval counter of a single comment. Lives and dies with its comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LikeCounter(u32);

impl LikeCounter {
    pub fn like(&mut self) -> u32 {
        self.0 = self.0.saturating_add(1);
        self.0
    }

    pub fn count(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: CommentId,
    pub author: Author,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub likes: LikeCounter,
}
