//! Post use-case service.
//!
//! # Responsibility
//! - Enforce the non-blank title precondition on create.
//! - Obtain an image URL from the generation collaborator before insert.
//!
//! # Invariants
//! - Image generation never fails a create; the collaborator guarantees a
//!   fallback URL.
//! - The generator is not consulted for declined creates.

use crate::db::ConnectionProvider;
use crate::image::ImageGenerator;
use crate::model::post::Post;
use crate::repo::post_repo::PostRepository;
use crate::repo::{RecordId, RepoError};
use crate::service::is_blank;
use log::{error, warn};

/// Validation and orchestration layer for posts.
pub struct PostService<'p, G: ImageGenerator> {
    repo: PostRepository<'p>,
    images: G,
}

impl<'p, G: ImageGenerator> PostService<'p, G> {
    pub fn new(provider: &'p ConnectionProvider, images: G) -> Self {
        Self {
            repo: PostRepository::new(provider),
            images,
        }
    }

    /// Creates a post. The title doubles as the image-generation prompt;
    /// whatever URL the collaborator returns is stored.
    pub fn create_post(&self, mut post: Post) -> Option<Post> {
        if is_blank(&post.title) {
            warn!("event=post_create module=service status=declined reason=blank_title");
            return None;
        }

        post.image_url = self.images.generate_image_url(&post.title);

        match self.repo.insert(&mut post) {
            Ok(_) => Some(post),
            Err(err) => {
                error!("event=post_create module=service status=error error={err}");
                None
            }
        }
    }

    pub fn get_post(&self, id: RecordId) -> Option<Post> {
        match self.repo.get(id) {
            Ok(found) => found,
            Err(err) => {
                error!("event=post_get module=service status=error id={id} error={err}");
                None
            }
        }
    }

    /// Lists posts most recent first.
    pub fn list_posts(&self) -> Vec<Post> {
        match self.repo.list() {
            Ok(posts) => posts,
            Err(err) => {
                error!("event=post_list module=service status=error error={err}");
                Vec::new()
            }
        }
    }

    /// Lists one author's posts most recent first.
    pub fn list_posts_by_author(&self, author_id: RecordId) -> Vec<Post> {
        match self.repo.list_by_author(author_id) {
            Ok(posts) => posts,
            Err(err) => {
                error!(
                    "event=post_list_by_author module=service status=error \
                     author_id={author_id} error={err}"
                );
                Vec::new()
            }
        }
    }

    /// Updates a post. Requires a storage-assigned id; does not regenerate
    /// the image and never rewrites the author.
    pub fn update_post(&self, post: &mut Post) -> bool {
        if post.id <= 0 {
            warn!("event=post_update module=service status=declined reason=missing_id");
            return false;
        }

        match self.repo.update(post) {
            Ok(()) => true,
            Err(RepoError::NotFound(_)) => false,
            Err(err) => {
                error!(
                    "event=post_update module=service status=error id={} error={err}",
                    post.id
                );
                false
            }
        }
    }

    pub fn delete_post(&self, id: RecordId) -> bool {
        match self.repo.delete(id) {
            Ok(()) => true,
            Err(RepoError::NotFound(_)) => false,
            Err(err) => {
                error!("event=post_delete module=service status=error id={id} error={err}");
                false
            }
        }
    }
}
