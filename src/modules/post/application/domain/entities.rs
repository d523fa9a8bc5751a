use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::validation::{required, FieldErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Like {
    #[schema(value_type = String)]
    pub user: UserId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub user: UserId,
    pub name: String,
    pub avatar: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Name and avatar copied onto posts and comments when they are written.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: UserId,
    pub name: String,
    pub avatar: String,
}

/// Likes and comments are kept newest first.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Post {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub user: UserId,
    #[schema(example = "hello")]
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    #[serde(skip)]
    pub version: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostRuleError {
    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Post has not yet been liked")]
    NotLiked,

    #[error("Comment does not exist")]
    CommentNotFound,

    #[error("User not authorized")]
    NotCommentAuthor,
}

impl Post {
    pub fn is_authored_by(&self, user: UserId) -> bool {
        self.user == user
    }

    pub fn like(&mut self, user: UserId) -> Result<(), PostRuleError> {
        if self.likes.iter().any(|l| l.user == user) {
            return Err(PostRuleError::AlreadyLiked);
        }
        self.likes.insert(0, Like { user });
        Ok(())
    }

    pub fn unlike(&mut self, user: UserId) -> Result<(), PostRuleError> {
        let index = self
            .likes
            .iter()
            .position(|l| l.user == user)
            .ok_or(PostRuleError::NotLiked)?;
        self.likes.remove(index);
        Ok(())
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// Removes exactly the comment with `comment_id`, provided `caller` wrote it.
    pub fn remove_comment(&mut self, comment_id: Uuid, caller: UserId) -> Result<(), PostRuleError> {
        let index = self
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or(PostRuleError::CommentNotFound)?;

        if self.comments[index].user != caller {
            return Err(PostRuleError::NotCommentAuthor);
        }

        self.comments.remove(index);
        Ok(())
    }
}

impl Comment {
    pub fn new(author: &Author, text: PostText) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.id,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            text: text.into_inner(),
            created_at: Utc::now(),
        }
    }
}

/// Body of post and comment creation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct TextForm {
    #[schema(example = "hello")]
    pub text: Option<String>,
}

/// Non-blank, trimmed text of a post or comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostText(String);

impl PostText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<TextForm> for PostText {
    type Error = FieldErrors;

    fn try_from(form: TextForm) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();
        let text = required(&mut errors, "text", form.text, "Text is required");
        errors.into_result(Self(text))
    }
}
