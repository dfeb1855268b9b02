// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use ignite_feed::{Author, CommentId, CommentRecord, CommentThread, PostData, PublishedTime};
use log::warn;

/// State owned by a single post on the page.
pub struct PostState {
    pub post: PostData,
    pub viewer: Author,
    pub thread: CommentThread,
    pub published: PublishedTime,
    /// Display times of `thread.comments()`, index for index.
    comment_times: Vec<PublishedTime>,
}

impl PostState {
    pub fn new(post: PostData, viewer: Author) -> Self {
        let published = PublishedTime::new(post.published_at, Utc::now());

        PostState {
            post,
            viewer,
            thread: CommentThread::new(),
            published,
            comment_times: Vec::new(),
        }
    }

    pub fn comments(&self) -> impl Iterator<Item = (&CommentRecord, &PublishedTime)> {
        self.thread.comments().iter().zip(&self.comment_times)
    }

    pub fn publish(&mut self) {
        let now = Utc::now();

        match self.thread.submit_draft(&self.viewer, now) {
            Ok(_) => self.refresh(now),
            Err(err) => warn!("post {}: {err}", self.post.id),
        }
    }

    pub fn delete(&mut self, id: CommentId) {
        if self.thread.delete_comment(id) {
            self.refresh(Utc::now());
        }
    }

    pub fn like(&mut self, id: CommentId) {
        if self.thread.like(id).is_none() {
            warn!("post {}: no comment {id} to like", self.post.id);
        }
    }

    /// Relative times only move forward when the thread changes.
    fn refresh(&mut self, now: DateTime<Utc>) {
        self.published = PublishedTime::new(self.post.published_at, now);
        self.comment_times.clear();
        self.comment_times.extend(
            self.thread
                .comments()
                .iter()
                .map(|comment| PublishedTime::new(comment.created_at, now)),
        );
    }
}

#[cfg(test)]
mod tests {
    use ignite_feed::Feed;

    use super::*;

    fn state() -> PostState {
        let Feed { viewer, mut posts } = Feed::builtin().unwrap();

        PostState::new(posts.remove(0), viewer)
    }

    #[test]
    fn comments_carry_display_times() {
        let mut state = state();

        for text in ["Boa Diego!", "Parabéns!!"] {
            state.thread.update_draft(text);
            state.publish();
        }

        let comments: Vec<_> = state.comments().collect();

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].0.text, "Boa Diego!");
        assert_eq!(comments[0].0.author, state.viewer);
        assert_eq!(comments[1].1.relative, "há menos de um minuto");

        let first = comments[0].0.id;

        state.delete(first);

        assert_eq!(state.comments().count(), 1);
        assert_eq!(state.thread.comments()[0].text, "Parabéns!!");
    }

    #[test]
    fn empty_draft_publishes_nothing() {
        let mut state = state();

        state.publish();

        assert!(state.thread.is_empty());
        assert_eq!(state.comments().count(), 0);
    }

    #[test]
    fn likes_follow_the_comment() {
        let mut state = state();

        state.thread.update_draft("a");
        state.publish();
        state.thread.update_draft("b");
        state.publish();

        let b = state.thread.comments()[1].id;

        state.like(b);
        state.like(b);
        state.delete(state.thread.comments()[0].id);

        assert_eq!(state.thread.comments()[0].likes.count(), 2);
    }
}
