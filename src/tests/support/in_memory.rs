//! In-memory adapters for the outgoing ports, shared by service and handler tests.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::auth::application::domain::entities::{gravatar_url, User, UserId};
use crate::auth::application::ports::outgoing::{
    AccountArchiver, AccountArchiverError, HashError, NewUserData, PasswordHasher, UserQuery, UserQueryError, UserQueryResult,
    UserRepository, UserRepositoryError,
};
use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::outgoing::{
    CreatePostData, PostRepository, PostRepositoryError,
};
use crate::modules::profile::application::domain::entities::{
    Profile, ProfileFields, ProfileOwner, ProfileView,
};
use crate::modules::profile::application::ports::outgoing::{
    CreateProfileData, ProfileQuery, ProfileQueryError, ProfileRepository, ProfileRepositoryError,
};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ========================= Users =========================

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    rows: Arc<Mutex<Vec<UserQueryResult>>>,
}

impl InMemoryUsers {
    pub fn insert(&self, name: &str, email: &str, password_hash: &str) -> UserQueryResult {
        let row = UserQueryResult {
            id: UserId::from(Uuid::new_v4()),
            name: name.to_string(),
            email: email.to_string(),
            avatar: gravatar_url(email),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        lock(&self.rows).push(row.clone());
        row
    }

    pub fn by_email(&self, email: &str) -> Option<UserQueryResult> {
        lock(&self.rows).iter().find(|u| u.email == email).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.rows).len()
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(lock(&self.rows).iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.by_email(email))
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: NewUserData) -> Result<User, UserRepositoryError> {
        if self.by_email(&data.email).is_some() {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let row = UserQueryResult {
            id: UserId::from(Uuid::new_v4()),
            name: data.name,
            email: data.email,
            avatar: data.avatar,
            password_hash: data.password_hash,
            created_at: Utc::now(),
        };
        lock(&self.rows).push(row.clone());
        Ok(row.into_user())
    }
}

/// Reversible stand-in for Argon2 so tests stay fast.
pub struct PlainTextHasher;

#[async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

// ========================= Profiles =========================

#[derive(Default)]
struct ProfileRows {
    rows: Vec<Profile>,
    failing_saves: u32,
}

/// Profiles table with compare-and-swap saves. Owners are resolved from the
/// attached users, if any.
#[derive(Clone, Default)]
pub struct InMemoryProfiles {
    state: Arc<Mutex<ProfileRows>>,
    users: Option<InMemoryUsers>,
}

impl InMemoryProfiles {
    pub fn with_users(users: InMemoryUsers) -> Self {
        Self::default().owners_from(users)
    }

    /// Same rows, with owners read from `users`.
    pub fn owners_from(&self, users: InMemoryUsers) -> Self {
        Self {
            state: Arc::clone(&self.state),
            users: Some(users),
        }
    }

    pub fn seed(&self, user: UserId, fields: ProfileFields) -> Profile {
        let profile = new_profile(user, fields);
        lock(&self.state).rows.push(profile.clone());
        profile
    }

    pub fn get(&self, user: UserId) -> Option<Profile> {
        lock(&self.state).rows.iter().find(|p| p.user == user).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.state).rows.len()
    }

    /// The next `n` saves lose their race against a simulated concurrent writer.
    pub fn fail_next_saves(&self, n: u32) {
        lock(&self.state).failing_saves = n;
    }

    fn owner(&self, user: UserId) -> Option<ProfileOwner> {
        let users = self.users.as_ref()?;
        lock(&users.rows)
            .iter()
            .find(|u| u.id == user)
            .map(|u| ProfileOwner {
                id: u.id,
                name: u.name.clone(),
                avatar: u.avatar.clone(),
            })
    }
}

fn new_profile(user: UserId, fields: ProfileFields) -> Profile {
    let now = Utc::now();
    Profile {
        id: Uuid::new_v4(),
        user,
        company: fields.company,
        website: fields.website,
        location: fields.location,
        status: fields.status,
        skills: fields.skills,
        bio: fields.bio,
        githubusername: fields.githubusername,
        social: fields.social,
        experience: vec![],
        education: vec![],
        version: 1,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn create_profile(
        &self,
        data: CreateProfileData,
    ) -> Result<Profile, ProfileRepositoryError> {
        let mut state = lock(&self.state);
        if state.rows.iter().any(|p| p.user == data.user) {
            return Err(ProfileRepositoryError::AlreadyExists);
        }
        let profile = new_profile(data.user, data.fields);
        state.rows.push(profile.clone());
        Ok(profile)
    }

    async fn find_by_user(&self, user: UserId) -> Result<Option<Profile>, ProfileRepositoryError> {
        Ok(self.get(user))
    }

    async fn save_profile(&self, profile: Profile) -> Result<Profile, ProfileRepositoryError> {
        let mut state = lock(&self.state);
        let simulate_conflict = state.failing_saves > 0;
        if simulate_conflict {
            state.failing_saves -= 1;
        }

        let stored = state
            .rows
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or(ProfileRepositoryError::NotFound)?;

        if simulate_conflict {
            stored.version += 1;
            return Err(ProfileRepositoryError::VersionConflict);
        }
        if stored.version != profile.version {
            return Err(ProfileRepositoryError::VersionConflict);
        }

        *stored = Profile {
            version: profile.version + 1,
            updated_at: Utc::now(),
            ..profile
        };
        Ok(stored.clone())
    }
}

#[async_trait]
impl ProfileQuery for InMemoryProfiles {
    async fn list_profiles(&self) -> Result<Vec<ProfileView>, ProfileQueryError> {
        let rows = lock(&self.state).rows.clone();
        Ok(rows
            .into_iter()
            .map(|profile| ProfileView {
                owner: self.owner(profile.user),
                profile,
            })
            .collect())
    }

    async fn find_by_user(&self, user: UserId) -> Result<Option<ProfileView>, ProfileQueryError> {
        Ok(self.get(user).map(|profile| ProfileView {
            owner: self.owner(user),
            profile,
        }))
    }
}

// ========================= Posts =========================

#[derive(Default)]
struct PostRows {
    rows: Vec<Post>,
    failing_saves: u32,
}

/// Posts table with compare-and-swap saves. Rows are kept in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryPosts {
    state: Arc<Mutex<PostRows>>,
}

impl InMemoryPosts {
    /// Stores a post by a fresh author.
    pub fn seed(&self, text: &str) -> Post {
        let author = UserId::from(Uuid::new_v4());
        let post = Post {
            id: Uuid::new_v4(),
            user: author,
            text: text.to_string(),
            name: "Author".to_string(),
            avatar: gravatar_url("author@example.com"),
            likes: vec![],
            comments: vec![],
            version: 1,
            created_at: Utc::now(),
        };
        lock(&self.state).rows.push(post.clone());
        post
    }

    pub fn get(&self, post_id: Uuid) -> Option<Post> {
        lock(&self.state).rows.iter().find(|p| p.id == post_id).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.state).rows.len()
    }

    pub fn fail_next_saves(&self, n: u32) {
        lock(&self.state).failing_saves = n;
    }
}

#[async_trait]
impl PostRepository for InMemoryPosts {
    async fn create_post(&self, data: CreatePostData) -> Result<Post, PostRepositoryError> {
        let post = Post {
            id: Uuid::new_v4(),
            user: data.author.id,
            text: data.text.into_inner(),
            name: data.author.name,
            avatar: data.author.avatar,
            likes: vec![],
            comments: vec![],
            version: 1,
            created_at: Utc::now(),
        };
        lock(&self.state).rows.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostRepositoryError> {
        Ok(self.get(post_id))
    }

    async fn list_posts(&self) -> Result<Vec<Post>, PostRepositoryError> {
        Ok(lock(&self.state).rows.iter().rev().cloned().collect())
    }

    async fn save_post(&self, post: Post) -> Result<Post, PostRepositoryError> {
        let mut state = lock(&self.state);
        let simulate_conflict = state.failing_saves > 0;
        if simulate_conflict {
            state.failing_saves -= 1;
        }

        let stored = state
            .rows
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(PostRepositoryError::NotFound)?;

        if simulate_conflict {
            stored.version += 1;
            return Err(PostRepositoryError::VersionConflict);
        }
        if stored.version != post.version {
            return Err(PostRepositoryError::VersionConflict);
        }

        stored.likes = post.likes;
        stored.comments = post.comments;
        stored.version += 1;
        Ok(stored.clone())
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let mut state = lock(&self.state);
        let before = state.rows.len();
        state.rows.retain(|p| p.id != post_id);
        if state.rows.len() == before {
            return Err(PostRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ========================= Accounts =========================

/// Deletes a user with their profile and posts across the in-memory stores.
#[derive(Clone)]
pub struct InMemoryAccounts {
    pub users: InMemoryUsers,
    pub profiles: InMemoryProfiles,
    pub posts: InMemoryPosts,
}

#[async_trait]
impl AccountArchiver for InMemoryAccounts {
    async fn delete_account(&self, user_id: UserId) -> Result<(), AccountArchiverError> {
        let mut users = lock(&self.users.rows);
        let before = users.len();
        users.retain(|u| u.id != user_id);
        if users.len() == before {
            return Err(AccountArchiverError::NotFound);
        }

        lock(&self.posts.state).rows.retain(|p| p.user != user_id);
        lock(&self.profiles.state).rows.retain(|p| p.user != user_id);
        Ok(())
    }
}
