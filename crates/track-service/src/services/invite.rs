//! Invite service
//!
//! Issuing, resolving, accepting and revoking course invites. An invite
//! is a single-use, time-limited token; accepting it converts the token
//! into a durable share row.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use track_core::entities::{Invite, Share};
use track_core::error::DomainError;
use track_core::value_objects::Permission;

use crate::dto::requests::CreateInviteRequest;
use crate::dto::responses::{InvitePreviewResponse, InviteResponse, ShareResponse};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Invite service
pub struct InviteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InviteService<'a> {
    /// Create a new InviteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a new invite for a course. Owner only.
    ///
    /// A `coder` invite must name a student of the course; a `tl` invite
    /// must not name one.
    #[instrument(skip(self, request))]
    pub async fn issue(
        &self,
        course_id: Uuid,
        user_id: Uuid,
        request: CreateInviteRequest,
    ) -> ServiceResult<InviteResponse> {
        let access = AccessService::new(self.ctx);
        let course = access.require_owner(course_id, user_id).await?;

        match (request.permission, request.student_id) {
            (Permission::Coder, Some(student_id)) => {
                let student = self
                    .ctx
                    .student_repo()
                    .find_by_id(student_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Student", student_id.to_string()))?;

                if student.course_id != course.id {
                    return Err(ServiceError::from(DomainError::InvalidScope(
                        "student does not belong to this course".to_string(),
                    )));
                }
            }
            (Permission::Coder, None) => {
                return Err(ServiceError::from(DomainError::InvalidScope(
                    "coder invite requires a student".to_string(),
                )));
            }
            (Permission::Tl, Some(_)) => {
                return Err(ServiceError::from(DomainError::InvalidScope(
                    "tl invite must not name a student".to_string(),
                )));
            }
            (Permission::Tl, None) => {}
        }

        let invite = Invite::new(
            course.id,
            request.permission,
            request.student_id,
            self.ctx.invite_ttl(),
        );
        let invite = self.ctx.invite_repo().create(&invite).await?;

        info!(
            course_id = %course.id,
            permission = %invite.permission,
            "Invite issued"
        );

        Ok(InviteResponse::from_invite(invite, self.ctx.invite_origin()))
    }

    /// Preview an invite without consuming it. Unknown, expired and
    /// already-claimed tokens all produce the same error.
    #[instrument(skip(self, token))]
    pub async fn resolve(&self, token: &str) -> ServiceResult<InvitePreviewResponse> {
        let invite = self
            .ctx
            .invite_repo()
            .find_live(token)
            .await?
            .ok_or(DomainError::InvalidOrExpired)?;

        if !invite.scope_is_valid() {
            // Rendered exactly like an unknown token; a malformed stored
            // row must not be distinguishable from the outside.
            warn!(course_id = %invite.course_id, "Invite with inconsistent scope");
            return Err(ServiceError::from(DomainError::InvalidOrExpired));
        }

        let course = self
            .ctx
            .course_repo()
            .find_by_id(invite.course_id)
            .await?
            .ok_or(DomainError::InvalidOrExpired)?;

        let student_name = match invite.student_id {
            Some(student_id) => self
                .ctx
                .student_repo()
                .find_by_id(student_id)
                .await?
                .map(|s| s.full_name()),
            None => None,
        };

        Ok(InvitePreviewResponse {
            course_id: course.id,
            course_name: course.name,
            permission: invite.permission,
            student_id: invite.student_id,
            student_name,
            expires_at: invite.expires_at,
        })
    }

    /// Accept an invite, converting it into a share.
    ///
    /// The token is claimed atomically: the row is deleted in the same
    /// statement that reads it, so of two concurrent acceptors exactly
    /// one gets the share. The resulting share overwrites any earlier
    /// share the user held on the course.
    #[instrument(skip(self, token))]
    pub async fn accept(&self, token: &str, user_id: Uuid) -> ServiceResult<ShareResponse> {
        let invite = self
            .ctx
            .invite_repo()
            .claim(token)
            .await?
            .ok_or(DomainError::InvalidOrExpired)?;

        if !invite.scope_is_valid() {
            // Token is already consumed at this point; the invite was
            // unusable anyway. Same opaque error as an unknown token.
            warn!(course_id = %invite.course_id, "Claimed invite with inconsistent scope");
            return Err(ServiceError::from(DomainError::InvalidOrExpired));
        }

        let share = Share::from_invite(&invite, user_id);
        let share = self
            .ctx
            .share_repo()
            .upsert(&share)
            .await
            .map_err(|e| DomainError::UpsertFailed(e.to_string()))?;

        info!(
            course_id = %share.course_id,
            user_id = %share.user_id,
            permission = %share.permission,
            "Invite accepted"
        );

        Ok(ShareResponse::from(share))
    }

    /// Pending invites for a course. Owner only.
    #[instrument(skip(self))]
    pub async fn list_for_course(
        &self,
        course_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<Vec<InviteResponse>> {
        let access = AccessService::new(self.ctx);
        let course = access.require_owner(course_id, user_id).await?;

        let invites = self.ctx.invite_repo().find_by_course(course.id).await?;

        Ok(invites
            .into_iter()
            .map(|i| InviteResponse::from_invite(i, self.ctx.invite_origin()))
            .collect())
    }

    /// Revoke a pending invite. Owner only; revoking an already-consumed
    /// or expired token is a no-op.
    #[instrument(skip(self, token))]
    pub async fn revoke(&self, course_id: Uuid, token: &str, user_id: Uuid) -> ServiceResult<()> {
        let access = AccessService::new(self.ctx);
        let course = access.require_owner(course_id, user_id).await?;

        let removed = self
            .ctx
            .invite_repo()
            .delete(course.id, token)
            .await
            .map_err(|e| DomainError::TokenCleanupFailed(e.to_string()))?;

        if removed {
            info!(course_id = %course.id, "Invite revoked");
        }

        Ok(())
    }
}
