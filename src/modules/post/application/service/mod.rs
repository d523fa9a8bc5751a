pub mod create_post_service;
pub mod delete_post_service;
pub mod edit_post_service;
pub mod get_posts_service;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::modules::post::application::domain::entities::Author;

/// Current name and avatar of `user`, for snapshotting onto posts and comments.
async fn find_author<Q>(users: &Q, user: UserId) -> Result<Option<Author>, UserQueryError>
where
    Q: UserQuery,
{
    Ok(users.find_by_id(user).await?.map(|u| Author {
        id: u.id,
        name: u.name,
        avatar: u.avatar,
    }))
}
