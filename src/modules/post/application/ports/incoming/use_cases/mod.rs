mod create_post;
mod delete_post;
mod edit_post;
mod get_posts;

pub use create_post::{CreatePostError, CreatePostUseCase};
pub use delete_post::{DeletePostError, DeletePostUseCase};
pub use edit_post::{EditPostError, EditPostUseCase, PostEdit};
pub use get_posts::{GetPostError, GetPostUseCase, ListPostsError, ListPostsUseCase};
