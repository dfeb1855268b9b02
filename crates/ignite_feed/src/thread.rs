// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use log::debug;
use thiserror::Error;

use crate::{Author, CommentId, CommentRecord, LikeCounter};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThreadError {
    #[error("cannot publish an empty comment")]
    EmptyDraft,
    #[error("no comment ids left in this thread")]
    IdsExhausted,
}

/// Comments of a single post, in the order they were published, along with
/// the draft of the next one.
#[derive(Debug, Default)]
pub struct CommentThread {
    comments: Vec<CommentRecord>,
    draft: String,
    next_id: u32,
}

impl CommentThread {
    pub fn new() -> Self {
        CommentThread::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_draft_empty(&self) -> bool {
        self.draft.is_empty()
    }

    pub fn comments(&self) -> &[CommentRecord] {
        &self.comments
    }

    pub fn get(&self, id: CommentId) -> Option<&CommentRecord> {
        self.comments.iter().find(|comment| comment.id == id)
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn update_draft(&mut self, text: &str) {
        // Keeps the capacity of the previous draft around while typing
        self.draft.replace_range(.., text);
    }

    /// Publish the draft as a new comment at the end of the thread and clear
    /// the draft. Empty drafts are rejected without touching the thread, as
    /// are submissions once every id has been handed out.
    pub fn submit_draft(
        &mut self,
        author: &Author,
        now: DateTime<Utc>,
    ) -> Result<CommentId, ThreadError> {
        if self.draft.is_empty() {
            return Err(ThreadError::EmptyDraft);
        }

        let id = CommentId(self.next_id);

        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(ThreadError::IdsExhausted)?;
        self.comments.push(CommentRecord {
            id,
            author: author.clone(),
            text: std::mem::take(&mut self.draft),
            created_at: now,
            likes: LikeCounter::default(),
        });

        debug!("published comment {id}, {} in thread", self.comments.len());

        Ok(id)
    }

    /// Remove the comment with the given `id`, returns `false` if there was none.
    pub fn delete_comment(&mut self, id: CommentId) -> bool {
        let before = self.comments.len();

        self.comments.retain(|comment| comment.id != id);

        let removed = self.comments.len() != before;

        if removed {
            debug!("deleted comment {id}");
        }

        removed
    }

    /// Remove every comment whose text equals `text`, returns how many were
    /// removed. Prefer [`delete_comment`](CommentThread::delete_comment) when
    /// the id is known, as duplicate texts all go at once here.
    pub fn delete_by_text(&mut self, text: &str) -> usize {
        let before = self.comments.len();

        self.comments.retain(|comment| comment.text != text);

        let removed = before - self.comments.len();

        if removed > 0 {
            debug!("deleted {removed} comment(s) matching text");
        }

        removed
    }

    /// Like a comment, returns the new like count or `None` if there is no
    /// comment with that `id`.
    pub fn like(&mut self, id: CommentId) -> Option<u32> {
        let comment = self.comments.iter_mut().find(|comment| comment.id == id)?;
        let count = comment.likes.like();

        debug!("comment {id} has {count} like(s)");

        Some(count)
    }
}
