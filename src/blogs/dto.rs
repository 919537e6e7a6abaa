use serde::{Deserialize, Serialize};

use super::repo_types::Blog;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: String,
    pub sub_title: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedBlogResponse {
    pub message: &'static str,
    pub blog: Blog,
}

/// List projection: ids, owner and timestamps are left out.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSummary {
    pub title: String,
    pub sub_title: String,
    pub content: String,
}

impl From<Blog> for BlogSummary {
    fn from(b: Blog) -> Self {
        Self {
            title: b.title,
            sub_title: b.sub_title,
            content: b.content,
        }
    }
}
