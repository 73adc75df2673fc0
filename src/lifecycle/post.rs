use crate::domain::{Post, PostStatus, PostUpdate};
use crate::error::PreconditionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum PostAction {
    Approve,
    Edit,
    Publish,
    MarkPublished,
}

/// Decide whether `action` may be requested for `post`.
///
/// `pending_edit` is whatever the user has typed but not saved yet; it only
/// matters for approval, where a schedule that exists only locally must be
/// saved first.
pub fn check_post_action(
    post: &Post,
    action: PostAction,
    pending_edit: Option<&PostUpdate>,
) -> Result<(), PreconditionError> {
    let refuse = || PreconditionError::InvalidTransition {
        post_id: post.id,
        action: action.to_string(),
        status: post.status.to_string(),
    };

    match action {
        PostAction::Approve => {
            if post.status == PostStatus::Approved || post.status.is_published() {
                return Err(refuse());
            }
            if post.schedule().is_some() {
                return Ok(());
            }
            if pending_edit.is_some_and(has_unsaved_schedule) {
                Err(PreconditionError::UnsavedSchedule { post_id: post.id })
            } else {
                Err(PreconditionError::MissingSchedule { post_id: post.id })
            }
        }
        PostAction::Edit => {
            if post.status == PostStatus::Approved || post.status.is_published() {
                Err(refuse())
            } else {
                Ok(())
            }
        }
        PostAction::Publish | PostAction::MarkPublished => {
            if post.status.allows_manual_publish() {
                Ok(())
            } else {
                Err(refuse())
            }
        }
    }
}

fn has_unsaved_schedule(edit: &PostUpdate) -> bool {
    [&edit.scheduled_for, &edit.scheduled_date]
        .into_iter()
        .flatten()
        .any(|s| !s.trim().is_empty())
}
