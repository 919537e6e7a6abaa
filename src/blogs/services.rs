use tracing::{debug, info};
use uuid::Uuid;

use super::{
    dto::{BlogSummary, CreateBlogRequest},
    repo_types::{Blog, NewBlog},
};
use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

/// Validates and stores a post owned by `user_id`. Fields are kept verbatim.
pub async fn create_blog(state: &AppState, user_id: Uuid, req: CreateBlogRequest) -> ApiResult<Blog> {
    let blank: Vec<&str> = [
        ("title", &req.title),
        ("subTitle", &req.sub_title),
        ("content", &req.content),
    ]
    .into_iter()
    .filter(|(_, v)| v.trim().is_empty())
    .map(|(name, _)| name)
    .collect();
    if !blank.is_empty() {
        return Err(ApiError::validation(format!(
            "Blog fields must not be blank: {}",
            blank.join(", ")
        )));
    }

    let blog = state
        .blogs
        .create(
            user_id,
            NewBlog {
                title: req.title,
                sub_title: req.sub_title,
                content: req.content,
            },
        )
        .await
        .map_err(|e| ApiError::internal("Error creating blog", e))?;

    info!(blog_id = %blog.id, %user_id, "blog created");
    Ok(blog)
}

/// Posts of `user_id` only. An empty list is a normal result, not an error.
pub async fn list_blogs(state: &AppState, user_id: Uuid) -> ApiResult<Vec<BlogSummary>> {
    let blogs = state
        .blogs
        .list_by_user(user_id)
        .await
        .map_err(|e| ApiError::internal("Error fetching blogs", e))?;
    debug!(%user_id, count = blogs.len(), "blogs fetched");
    Ok(blogs.into_iter().map(BlogSummary::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(title: &str, sub_title: &str, content: &str) -> CreateBlogRequest {
        CreateBlogRequest {
            title: title.into(),
            sub_title: sub_title.into(),
            content: content.into(),
        }
    }

    #[tokio::test]
    async fn create_then_list_preserves_fields() {
        let state = AppState::fake();
        let owner = Uuid::new_v4();
        let blog = create_blog(&state, owner, req("  Hi ", "Süb\ttitle", "Body\n\nwith 🦀"))
            .await
            .unwrap();
        assert_eq!(blog.user_id, owner);

        let listed = list_blogs(&state, owner).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "  Hi ");
        assert_eq!(listed[0].sub_title, "Süb\ttitle");
        assert_eq!(listed[0].content, "Body\n\nwith 🦀");
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_without_writing() {
        let state = AppState::fake();
        let owner = Uuid::new_v4();
        for bad in [req("", "s", "c"), req("t", "   ", "c"), req("t", "s", "\n\t ")] {
            let err = create_blog(&state, owner, bad).await.unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)));
        }
        assert!(list_blogs(&state, owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn listing_is_scoped_to_owner() {
        let state = AppState::fake();
        let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
        create_blog(&state, alice, req("a1", "s", "c")).await.unwrap();
        create_blog(&state, bob, req("b1", "s", "c")).await.unwrap();
        create_blog(&state, alice, req("a2", "s", "c")).await.unwrap();

        let titles: Vec<String> = list_blogs(&state, alice)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, ["a1", "a2"]);
    }

    #[tokio::test]
    async fn store_failure_maps_to_internal() {
        let state = AppState::failing();
        let err = list_blogs(&state, Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.to_string(), "Error fetching blogs");
    }
}
