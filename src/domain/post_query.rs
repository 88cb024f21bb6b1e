//! Read-side shaping of the collection: ordering and substring filtering.

use super::Post;

/// Field a listing is sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Sort by `title`.
    Title,
    /// Sort by `content`.
    Content,
}

impl SortField {
    /// `"title"` selects [`SortField::Title`]; every other value falls back
    /// to [`SortField::Content`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "title" {
            Self::Title
        } else {
            Self::Content
        }
    }

    fn key(self, post: &Post) -> &str {
        match self {
            Self::Title => &post.title,
            Self::Content => &post.content,
        }
    }
}

/// Direction of a sorted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Lexicographically ascending.
    Asc,
    /// Reverse of the ascending order.
    Desc,
}

impl SortDirection {
    /// `"desc"` selects [`SortDirection::Desc`]; anything else is ascending.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "desc" { Self::Desc } else { Self::Asc }
    }
}

/// Requested ordering for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostOrdering {
    /// Field to compare.
    pub field: SortField,
    /// Ascending or descending.
    pub direction: SortDirection,
}

impl PostOrdering {
    /// Builds an ordering from raw query values.
    ///
    /// Returns `None` unless both `sort` and `direction` are given, in
    /// which case the listing keeps collection order.
    #[must_use]
    pub fn from_params(sort: Option<&str>, direction: Option<&str>) -> Option<Self> {
        let (sort, direction) = sort.zip(direction)?;
        Some(Self {
            field: SortField::parse(sort),
            direction: SortDirection::parse(direction),
        })
    }

    /// Sorts `posts` in place.
    ///
    /// Stable ascending sort by the chosen field; descending reverses the
    /// ascending result, so ties come out in reverse collection order.
    pub fn apply(&self, posts: &mut [Post]) {
        let field = self.field;
        posts.sort_by(|a, b| field.key(a).cmp(field.key(b)));
        if self.direction == SortDirection::Desc {
            posts.reverse();
        }
    }
}

/// Case-sensitive substring filter over title and content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Needle the title must contain. Empty matches everything.
    pub title: String,
    /// Needle the content must contain. Empty matches everything.
    pub content: String,
}

impl PostFilter {
    /// Builds a filter, treating absent needles as empty.
    #[must_use]
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
        }
    }

    /// Returns `true` when both needles are contained in the post.
    #[must_use]
    pub fn matches(&self, post: &Post) -> bool {
        post.title.contains(self.title.as_str()) && post.content.contains(self.content.as_str())
    }
}
