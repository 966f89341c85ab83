/**
 * Post Validation
 *
 * Turns a `PostMessageRequest` into a `Message`, applying defaults and the
 * single invariant every stored message satisfies: non-blank text or an
 * attached file.
 *
 * Text is only trimmed for the emptiness check. The stored text is exactly
 * what was submitted, so pasted code keeps its leading indentation.
 */

use crate::shared::message::DEFAULT_USER;
use crate::shared::{FileAttachment, Message, PostMessageRequest, SharedError};
use chrono::{DateTime, Utc};

/// Error message returned when a post has neither text nor file
pub const TEXT_OR_FILE_REQUIRED: &str = "text or file required";

/// A post that passed validation, ready to be stamped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPost {
    pub user: String,
    pub text: String,
    pub file: Option<FileAttachment>,
}

impl ValidatedPost {
    /// Build the message, stamping it with `posted_at`
    pub fn into_message(self, posted_at: DateTime<Utc>) -> Message {
        Message::at(posted_at, self.user, self.text, self.file)
    }
}

/// Validate a post request
///
/// # Rules
///
/// - missing or empty `user` becomes `"anon"`
/// - missing `text` becomes the empty string
/// - blank text without a file is rejected
///
/// # Example
///
/// ```rust
/// use codeshare::backend::messages::validation::validate_post;
/// use codeshare::shared::PostMessageRequest;
///
/// assert!(validate_post(PostMessageRequest::text("you", "hello")).is_ok());
/// assert!(validate_post(PostMessageRequest::text("you", "   ")).is_err());
/// ```
pub fn validate_post(request: PostMessageRequest) -> Result<ValidatedPost, SharedError> {
    let user = request
        .user
        .filter(|user| !user.is_empty())
        .unwrap_or_else(|| DEFAULT_USER.to_string());
    let text = request.text.unwrap_or_default();

    if text.trim().is_empty() && request.file.is_none() {
        return Err(SharedError::invalid_post("text", TEXT_OR_FILE_REQUIRED));
    }

    Ok(ValidatedPost {
        user,
        text,
        file: request.file,
    })
}
