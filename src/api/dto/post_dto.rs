//! Post DTOs for list, search, create, update, and delete.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{PostFilter, PostOrdering, PostPatch};

/// Query parameters for `GET /api/posts`.
///
/// Sorting applies only when both parameters are present.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsParams {
    /// `title` sorts by title; any other value sorts by content.
    #[serde(default)]
    pub sort: Option<String>,
    /// `desc` for descending; any other value is ascending.
    #[serde(default)]
    pub direction: Option<String>,
}

impl ListPostsParams {
    /// Converts the raw parameters into an optional ordering.
    #[must_use]
    pub fn ordering(&self) -> Option<PostOrdering> {
        PostOrdering::from_params(self.sort.as_deref(), self.direction.as_deref())
    }
}

/// Query parameters for `GET /api/posts/search`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchPostsParams {
    /// Substring the title must contain.
    #[serde(default)]
    pub title: Option<String>,
    /// Substring the content must contain.
    #[serde(default)]
    pub content: Option<String>,
}

impl From<SearchPostsParams> for PostFilter {
    fn from(params: SearchPostsParams) -> Self {
        Self::new(params.title, params.content)
    }
}

/// Query parameters for `PUT /api/posts`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdatePostParams {
    /// Id of the post to update. Kept raw so that a non-integer value is
    /// reported with the service's own error body.
    #[serde(default)]
    pub id: Option<String>,
}

/// Request body for `POST /api/posts`.
///
/// Both fields are required; they are optional here so that their absence
/// surfaces as a validation error instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    /// Post title.
    #[serde(default)]
    pub title: Option<String>,
    /// Post content.
    #[serde(default)]
    pub content: Option<String>,
}

/// Request body for `PUT /api/posts`. Absent or `null` fields are kept.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement content.
    #[serde(default)]
    pub content: Option<String>,
}

impl From<UpdatePostRequest> for PostPatch {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
        }
    }
}

/// Response body for `DELETE /api/posts/{id}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeletePostResponse {
    /// Confirmation message.
    pub message: String,
}
