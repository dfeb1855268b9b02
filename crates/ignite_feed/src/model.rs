// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub avatar_url: String,
    pub name: String,
    pub role: String,
}

impl Author {
    pub fn new(avatar_url: &str, name: &str, role: &str) -> Self {
        Author {
            avatar_url: avatar_url.into(),
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Tag of a [`ContentLine`]. Only links render differently, every other tag
/// is shown as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ContentKind {
    Paragraph,
    Link,
    Other(String),
}

impl ContentKind {
    pub fn as_str(&self) -> &str {
        match self {
            ContentKind::Paragraph => "paragraph",
            ContentKind::Link => "link",
            ContentKind::Other(tag) => tag.as_str(),
        }
    }
}

impl From<String> for ContentKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "paragraph" => ContentKind::Paragraph,
            "link" => ContentKind::Link,
            _ => ContentKind::Other(tag),
        }
    }
}

impl From<ContentKind> for String {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Other(tag) => tag,
            kind => kind.as_str().into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentLine {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub content: String,
    /// Link target, only meaningful for [`ContentKind::Link`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl ContentLine {
    pub fn is_link(&self) -> bool {
        self.kind == ContentKind::Link
    }

    /// Target for the anchor of a link line. Links without an explicit target
    /// point back at the current page.
    pub fn href(&self) -> &str {
        self.href.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub id: u32,
    pub author: Author,
    pub published_at: DateTime<FixedOffset>,
    pub content: Vec<ContentLine>,
}
