//! Service layer integration tests
//!
//! These run against the in-memory repositories, so no database is
//! required. They cover the invite lifecycle, access rules, tracking,
//! and statistics end to end at the service boundary.
//!
//! Run with: cargo test -p integration-tests --test service_tests

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use integration_tests::{login_user, memory_context};
use track_core::entities::{Invite, Share};
use track_core::value_objects::Permission;
use track_service::{
    AuthService, CourseResponse, CourseService, CreateActivityRequest, CreateCourseRequest,
    CreateInviteRequest, CreateStudentRequest, InviteService, RatingEntry, SaveRatingsRequest,
    ServiceContext, ServiceError, StatsService, StudentResponse, StudentService, TrackingService,
};

fn assert_error(err: &ServiceError, status: u16, code: &str) {
    assert_eq!(err.status_code(), status, "unexpected status for {err}");
    assert_eq!(err.error_code(), code, "unexpected code for {err}");
}

async fn create_course(ctx: &ServiceContext, owner_id: Uuid, name: &str) -> CourseResponse {
    CourseService::new(ctx)
        .create_course(owner_id, CreateCourseRequest { name: name.to_string() })
        .await
        .expect("course creation should succeed")
}

async fn add_student(
    ctx: &ServiceContext,
    course_id: Uuid,
    owner_id: Uuid,
    first: &str,
    last: &str,
) -> StudentResponse {
    StudentService::new(ctx)
        .add_student(
            course_id,
            owner_id,
            CreateStudentRequest {
                first_name: first.to_string(),
                last_name: last.to_string(),
                cell: None,
                photo_url: None,
            },
        )
        .await
        .expect("student creation should succeed")
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

// ============================================================================
// Invite Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_issue_and_accept_tl_invite() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let tl = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;

    let invites = InviteService::new(&ctx);
    let invite = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Tl,
                student_id: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(invite.token.len(), 32);
    assert!(invite.url.ends_with(&format!("/invite/{}", invite.token)));

    let share = invites.accept(&invite.token, tl).await.unwrap();
    assert_eq!(share.course_id, course.id);
    assert_eq!(share.user_id, tl);
    assert_eq!(share.permission, Permission::Tl);
    assert_eq!(share.student_id, None);

    // The course now shows up in the accepter's listing
    let courses = CourseService::new(&ctx).list_courses(tl).await.unwrap();
    assert!(courses.iter().any(|c| c.id == course.id));
}

#[tokio::test]
async fn test_issue_validates_invite_scope() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;
    let other_course = create_course(&ctx, owner, "Other Course").await;
    let stranger_student = add_student(&ctx, other_course.id, owner, "Alan", "Turing").await;

    let invites = InviteService::new(&ctx);

    // coder without a student
    let err = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Coder,
                student_id: None,
            },
        )
        .await
        .unwrap_err();
    assert_error(&err, 400, "INVALID_SCOPE");

    // tl naming a student
    let err = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Tl,
                student_id: Some(Uuid::new_v4()),
            },
        )
        .await
        .unwrap_err();
    assert_error(&err, 400, "INVALID_SCOPE");

    // coder naming an unknown student
    let err = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Coder,
                student_id: Some(Uuid::new_v4()),
            },
        )
        .await
        .unwrap_err();
    assert_error(&err, 404, "NOT_FOUND");

    // coder naming a student of a different course
    let err = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Coder,
                student_id: Some(stranger_student.id),
            },
        )
        .await
        .unwrap_err();
    assert_error(&err, 400, "INVALID_SCOPE");
}

#[tokio::test]
async fn test_invite_is_single_use() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let first = login_user(&ctx).await;
    let second = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;

    let invites = InviteService::new(&ctx);
    let invite = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Tl,
                student_id: None,
            },
        )
        .await
        .unwrap();

    invites.accept(&invite.token, first).await.unwrap();

    // A second accept sees the same error as an unknown token
    let err = invites.accept(&invite.token, second).await.unwrap_err();
    assert_error(&err, 404, "INVITE_INVALID_OR_EXPIRED");
}

#[tokio::test]
async fn test_concurrent_accepts_have_one_winner() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let alice = login_user(&ctx).await;
    let bob = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;

    let invite = InviteService::new(&ctx)
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Tl,
                student_id: None,
            },
        )
        .await
        .unwrap();

    let ctx_a = ctx.clone();
    let ctx_b = ctx.clone();
    let token_a = invite.token.clone();
    let token_b = invite.token.clone();

    let task_a =
        tokio::spawn(async move { InviteService::new(&ctx_a).accept(&token_a, alice).await });
    let task_b =
        tokio::spawn(async move { InviteService::new(&ctx_b).accept(&token_b, bob).await });

    let result_a = task_a.await.unwrap();
    let result_b = task_b.await.unwrap();

    let winners = usize::from(result_a.is_ok()) + usize::from(result_b.is_ok());
    assert_eq!(winners, 1, "exactly one concurrent acceptor must win");

    // The loser got the invalid-or-expired error, not a partial share
    let shares = ctx.share_repo().find_by_course(course.id).await.unwrap();
    assert_eq!(shares.len(), 1);
}

#[tokio::test]
async fn test_expired_invite_rejected() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let user = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;

    // Seed an already-expired row directly
    let expired = Invite::new(course.id, Permission::Tl, None, Duration::seconds(-60));
    ctx.invite_repo().create(&expired).await.unwrap();

    let invites = InviteService::new(&ctx);

    let err = invites.resolve(&expired.token).await.unwrap_err();
    assert_error(&err, 404, "INVITE_INVALID_OR_EXPIRED");

    let err = invites.accept(&expired.token, user).await.unwrap_err();
    assert_error(&err, 404, "INVITE_INVALID_OR_EXPIRED");
}

#[tokio::test]
async fn test_resolve_previews_without_consuming() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let coder = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;
    let student = add_student(&ctx, course.id, owner, "Ada", "Lovelace").await;

    let invites = InviteService::new(&ctx);
    let invite = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Coder,
                student_id: Some(student.id),
            },
        )
        .await
        .unwrap();

    // Resolving repeatedly leaves the token live and yields the same view
    let first = invites.resolve(&invite.token).await.unwrap();
    let second = invites.resolve(&invite.token).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.course_name, "Rust Bootcamp");
    assert_eq!(first.permission, Permission::Coder);
    assert_eq!(first.student_name.as_deref(), Some("Ada Lovelace"));

    let share = invites.accept(&invite.token, coder).await.unwrap();
    assert_eq!(share.student_id, Some(student.id));
}

#[tokio::test]
async fn test_malformed_invite_looks_expired() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let user = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;

    // A coder invite without a student cannot be issued through the
    // service; seed the malformed row directly
    let malformed = Invite::new(course.id, Permission::Coder, None, Duration::days(7));
    ctx.invite_repo().create(&malformed).await.unwrap();

    let invites = InviteService::new(&ctx);

    let err = invites.resolve(&malformed.token).await.unwrap_err();
    assert_error(&err, 404, "INVITE_INVALID_OR_EXPIRED");

    let err = invites.accept(&malformed.token, user).await.unwrap_err();
    assert_error(&err, 404, "INVITE_INVALID_OR_EXPIRED");

    // No share was granted by the failed accept
    let shares = ctx.share_repo().find_by_course(course.id).await.unwrap();
    assert!(shares.is_empty());
}

#[tokio::test]
async fn test_accept_overwrites_existing_share() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let user = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;
    let student = add_student(&ctx, course.id, owner, "Ada", "Lovelace").await;

    let invites = InviteService::new(&ctx);

    let coder_invite = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Coder,
                student_id: Some(student.id),
            },
        )
        .await
        .unwrap();
    invites.accept(&coder_invite.token, user).await.unwrap();

    let tl_invite = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Tl,
                student_id: None,
            },
        )
        .await
        .unwrap();
    let share = invites.accept(&tl_invite.token, user).await.unwrap();

    // Last accepted invite wins, and there is still only one share
    assert_eq!(share.permission, Permission::Tl);
    assert_eq!(share.student_id, None);
    let shares = ctx.share_repo().find_by_course(course.id).await.unwrap();
    assert_eq!(shares.len(), 1);
}

#[tokio::test]
async fn test_revoke_invite() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let stranger = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;
    let other_course = create_course(&ctx, owner, "Other Course").await;

    let invites = InviteService::new(&ctx);
    let invite = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Tl,
                student_id: None,
            },
        )
        .await
        .unwrap();

    // Only the owner may revoke
    let err = invites
        .revoke(course.id, &invite.token, stranger)
        .await
        .unwrap_err();
    assert_error(&err, 403, "NOT_OWNER");

    // Revoking through another course is a no-op
    invites
        .revoke(other_course.id, &invite.token, owner)
        .await
        .unwrap();
    assert!(invites.resolve(&invite.token).await.is_ok());

    invites.revoke(course.id, &invite.token, owner).await.unwrap();
    let err = invites.resolve(&invite.token).await.unwrap_err();
    assert_error(&err, 404, "INVITE_INVALID_OR_EXPIRED");

    // Revoking an already-gone token is still a success
    invites.revoke(course.id, &invite.token, owner).await.unwrap();
}

#[tokio::test]
async fn test_list_invites_is_owner_only() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let tl = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;

    let invites = InviteService::new(&ctx);
    let invite = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Tl,
                student_id: None,
            },
        )
        .await
        .unwrap();
    invites.accept(&invite.token, tl).await.unwrap();

    invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Tl,
                student_id: None,
            },
        )
        .await
        .unwrap();

    let pending = invites.list_for_course(course.id, owner).await.unwrap();
    assert_eq!(pending.len(), 1);

    // A tl has access to the course but is not the owner
    let err = invites.list_for_course(course.id, tl).await.unwrap_err();
    assert_error(&err, 403, "NOT_OWNER");
}

// ============================================================================
// Access Control Tests
// ============================================================================

#[tokio::test]
async fn test_nonmember_sees_not_found() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let stranger = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;

    // Inaccessible courses are reported as missing, not forbidden
    let err = CourseService::new(&ctx)
        .get_course(course.id, stranger)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    let err = StudentService::new(&ctx)
        .list_students(course.id, stranger)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_shared_access_is_not_ownership() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let tl = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;

    let invites = InviteService::new(&ctx);
    let invite = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Tl,
                student_id: None,
            },
        )
        .await
        .unwrap();
    invites.accept(&invite.token, tl).await.unwrap();

    // Roster and course mutations stay owner-only
    let err = StudentService::new(&ctx)
        .add_student(
            course.id,
            tl,
            CreateStudentRequest {
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                cell: None,
                photo_url: None,
            },
        )
        .await
        .unwrap_err();
    assert_error(&err, 403, "NOT_OWNER");

    let err = CourseService::new(&ctx)
        .delete_course(course.id, tl)
        .await
        .unwrap_err();
    assert_error(&err, 403, "NOT_OWNER");

    let err = invites
        .issue(
            course.id,
            tl,
            CreateInviteRequest {
                permission: Permission::Tl,
                student_id: None,
            },
        )
        .await
        .unwrap_err();
    assert_error(&err, 403, "NOT_OWNER");
}

#[tokio::test]
async fn test_coder_sees_only_their_student() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let coder = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;
    let ada = add_student(&ctx, course.id, owner, "Ada", "Lovelace").await;
    let alan = add_student(&ctx, course.id, owner, "Alan", "Turing").await;

    let invites = InviteService::new(&ctx);
    let invite = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Coder,
                student_id: Some(ada.id),
            },
        )
        .await
        .unwrap();
    invites.accept(&invite.token, coder).await.unwrap();

    let students = StudentService::new(&ctx)
        .list_students(course.id, coder)
        .await
        .unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, ada.id);

    // Ratings in the day sheet are filtered the same way
    let tracking = TrackingService::new(&ctx);
    let date = day(2025, 3, 3);
    let activity = tracking
        .create_activity(
            course.id,
            owner,
            CreateActivityRequest {
                date,
                name: "Katas".to_string(),
            },
        )
        .await
        .unwrap();
    tracking
        .save_ratings(
            course.id,
            owner,
            SaveRatingsRequest {
                activity_id: activity.id,
                ratings: vec![
                    RatingEntry {
                        student_id: ada.id,
                        score: 8.0,
                        notes: None,
                    },
                    RatingEntry {
                        student_id: alan.id,
                        score: 6.0,
                        notes: None,
                    },
                ],
            },
        )
        .await
        .unwrap();

    let sheet = tracking.get_day(course.id, coder, date).await.unwrap();
    assert_eq!(sheet.activities.len(), 1);
    assert_eq!(sheet.ratings.len(), 1);
    assert_eq!(sheet.ratings[0].student_id, ada.id);

    // And so are the statistics
    let stats = StatsService::new(&ctx)
        .course_stats(course.id, coder)
        .await
        .unwrap();
    assert_eq!(stats.days.len(), 1);
    assert!((stats.days[0].average - 8.0).abs() < f64::EPSILON);

    // Coders are read-only
    let err = tracking
        .create_activity(
            course.id,
            coder,
            CreateActivityRequest {
                date,
                name: "Review".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert_error(&err, 403, "MISSING_PERMISSIONS");
}

#[tokio::test]
async fn test_ownership_overrides_any_share_row() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;
    let ada = add_student(&ctx, course.id, owner, "Ada", "Lovelace").await;
    let alan = add_student(&ctx, course.id, owner, "Alan", "Turing").await;

    // A stray coder share for the owner themselves must not narrow
    // what they see
    let share = Share {
        course_id: course.id,
        user_id: owner,
        permission: Permission::Coder,
        student_id: Some(ada.id),
        created_at: Utc::now(),
    };
    ctx.share_repo().upsert(&share).await.unwrap();

    let students = StudentService::new(&ctx)
        .list_students(course.id, owner)
        .await
        .unwrap();
    assert_eq!(students.len(), 2);
    assert!(students.iter().any(|s| s.id == alan.id));

    // Writes stay open too
    TrackingService::new(&ctx)
        .create_activity(
            course.id,
            owner,
            CreateActivityRequest {
                date: day(2025, 3, 3),
                name: "Katas".to_string(),
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_tl_has_full_tracking_access() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let tl = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;
    let ada = add_student(&ctx, course.id, owner, "Ada", "Lovelace").await;

    let invites = InviteService::new(&ctx);
    let invite = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Tl,
                student_id: None,
            },
        )
        .await
        .unwrap();
    invites.accept(&invite.token, tl).await.unwrap();

    let tracking = TrackingService::new(&ctx);
    let date = day(2025, 3, 3);
    let activity = tracking
        .create_activity(
            course.id,
            tl,
            CreateActivityRequest {
                date,
                name: "Katas".to_string(),
            },
        )
        .await
        .unwrap();

    let saved = tracking
        .save_ratings(
            course.id,
            tl,
            SaveRatingsRequest {
                activity_id: activity.id,
                ratings: vec![RatingEntry {
                    student_id: ada.id,
                    score: 9.5,
                    notes: Some("great pace".to_string()),
                }],
            },
        )
        .await
        .unwrap();
    assert_eq!(saved.len(), 1);
}

// ============================================================================
// Tracking Tests
// ============================================================================

#[tokio::test]
async fn test_day_sheet_and_dates() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;

    let tracking = TrackingService::new(&ctx);
    let day1 = day(2025, 3, 3);
    let day2 = day(2025, 3, 10);

    // Created out of order; the date listing sorts ascending
    for (date, name) in [(day2, "Review"), (day1, "Katas"), (day1, "Pairing")] {
        tracking
            .create_activity(
                course.id,
                owner,
                CreateActivityRequest {
                    date,
                    name: name.to_string(),
                },
            )
            .await
            .unwrap();
    }

    let dates = tracking.list_dates(course.id, owner).await.unwrap();
    assert_eq!(dates, vec![day1, day2]);

    let sheet = tracking.get_day(course.id, owner, day1).await.unwrap();
    assert_eq!(sheet.date, day1);
    assert_eq!(sheet.activities.len(), 2);
    assert!(sheet.ratings.is_empty());
}

#[tokio::test]
async fn test_save_ratings_overwrites() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;
    let ada = add_student(&ctx, course.id, owner, "Ada", "Lovelace").await;

    let tracking = TrackingService::new(&ctx);
    let date = day(2025, 3, 3);
    let activity = tracking
        .create_activity(
            course.id,
            owner,
            CreateActivityRequest {
                date,
                name: "Katas".to_string(),
            },
        )
        .await
        .unwrap();

    for score in [5.0, 9.0] {
        tracking
            .save_ratings(
                course.id,
                owner,
                SaveRatingsRequest {
                    activity_id: activity.id,
                    ratings: vec![RatingEntry {
                        student_id: ada.id,
                        score,
                        notes: None,
                    }],
                },
            )
            .await
            .unwrap();
    }

    let sheet = tracking.get_day(course.id, owner, date).await.unwrap();
    assert_eq!(sheet.ratings.len(), 1, "second save must overwrite");
    assert!((sheet.ratings[0].score - 9.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_save_ratings_validation() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;
    let other_course = create_course(&ctx, owner, "Other Course").await;
    let ada = add_student(&ctx, course.id, owner, "Ada", "Lovelace").await;
    let outsider = add_student(&ctx, other_course.id, owner, "Alan", "Turing").await;

    let tracking = TrackingService::new(&ctx);
    let activity = tracking
        .create_activity(
            course.id,
            owner,
            CreateActivityRequest {
                date: day(2025, 3, 3),
                name: "Katas".to_string(),
            },
        )
        .await
        .unwrap();

    // Out-of-range score
    let err = tracking
        .save_ratings(
            course.id,
            owner,
            SaveRatingsRequest {
                activity_id: activity.id,
                ratings: vec![RatingEntry {
                    student_id: ada.id,
                    score: 11.0,
                    notes: None,
                }],
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);

    // Student from another course
    let err = tracking
        .save_ratings(
            course.id,
            owner,
            SaveRatingsRequest {
                activity_id: activity.id,
                ratings: vec![RatingEntry {
                    student_id: outsider.id,
                    score: 5.0,
                    notes: None,
                }],
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    // Activity from another course
    let err = tracking
        .save_ratings(
            other_course.id,
            owner,
            SaveRatingsRequest {
                activity_id: activity.id,
                ratings: vec![],
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_delete_activity_drops_its_ratings() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;
    let ada = add_student(&ctx, course.id, owner, "Ada", "Lovelace").await;

    let tracking = TrackingService::new(&ctx);
    let date = day(2025, 3, 3);
    let activity = tracking
        .create_activity(
            course.id,
            owner,
            CreateActivityRequest {
                date,
                name: "Katas".to_string(),
            },
        )
        .await
        .unwrap();
    tracking
        .save_ratings(
            course.id,
            owner,
            SaveRatingsRequest {
                activity_id: activity.id,
                ratings: vec![RatingEntry {
                    student_id: ada.id,
                    score: 7.0,
                    notes: None,
                }],
            },
        )
        .await
        .unwrap();

    tracking
        .delete_activity(course.id, activity.id, owner)
        .await
        .unwrap();

    let sheet = tracking.get_day(course.id, owner, date).await.unwrap();
    assert!(sheet.activities.is_empty());
    assert!(sheet.ratings.is_empty());

    let stats = StatsService::new(&ctx)
        .course_stats(course.id, owner)
        .await
        .unwrap();
    assert!(stats.days.is_empty());
}

// ============================================================================
// Statistics Tests
// ============================================================================

#[tokio::test]
async fn test_course_stats_aggregation() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;
    let ada = add_student(&ctx, course.id, owner, "Ada", "Lovelace").await;
    let alan = add_student(&ctx, course.id, owner, "Alan", "Turing").await;

    let tracking = TrackingService::new(&ctx);
    let date = day(2025, 3, 3);
    let katas = tracking
        .create_activity(
            course.id,
            owner,
            CreateActivityRequest {
                date,
                name: "Katas".to_string(),
            },
        )
        .await
        .unwrap();
    let review = tracking
        .create_activity(
            course.id,
            owner,
            CreateActivityRequest {
                date,
                name: "Review".to_string(),
            },
        )
        .await
        .unwrap();

    tracking
        .save_ratings(
            course.id,
            owner,
            SaveRatingsRequest {
                activity_id: katas.id,
                ratings: vec![
                    RatingEntry {
                        student_id: ada.id,
                        score: 8.0,
                        notes: None,
                    },
                    RatingEntry {
                        student_id: alan.id,
                        score: 6.0,
                        notes: None,
                    },
                ],
            },
        )
        .await
        .unwrap();
    tracking
        .save_ratings(
            course.id,
            owner,
            SaveRatingsRequest {
                activity_id: review.id,
                ratings: vec![RatingEntry {
                    student_id: ada.id,
                    score: 10.0,
                    notes: None,
                }],
            },
        )
        .await
        .unwrap();

    let stats = StatsService::new(&ctx)
        .course_stats(course.id, owner)
        .await
        .unwrap();

    assert_eq!(stats.days.len(), 1);
    let day_stats = &stats.days[0];
    assert_eq!(day_stats.activities.len(), 2);
    // Day average weights every score equally: (8 + 6 + 10) / 3
    assert!((day_stats.average - 8.0).abs() < f64::EPSILON);
}

// ============================================================================
// Course Tests
// ============================================================================

#[tokio::test]
async fn test_course_slug_conflicts() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let other = login_user(&ctx).await;

    create_course(&ctx, owner, "Rust 101").await;

    // Same owner, same derived slug
    let err = CourseService::new(&ctx)
        .create_course(
            owner,
            CreateCourseRequest {
                name: "Rust 101".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert_error(&err, 409, "SLUG_TAKEN");

    // Slugs are only unique per owner
    create_course(&ctx, other, "Rust 101").await;
}

#[tokio::test]
async fn test_delete_course_cascades() {
    let ctx = memory_context();
    let owner = login_user(&ctx).await;
    let tl = login_user(&ctx).await;
    let course = create_course(&ctx, owner, "Rust Bootcamp").await;
    add_student(&ctx, course.id, owner, "Ada", "Lovelace").await;

    let invites = InviteService::new(&ctx);
    let invite = invites
        .issue(
            course.id,
            owner,
            CreateInviteRequest {
                permission: Permission::Tl,
                student_id: None,
            },
        )
        .await
        .unwrap();
    invites.accept(&invite.token, tl).await.unwrap();

    CourseService::new(&ctx)
        .delete_course(course.id, owner)
        .await
        .unwrap();

    let err = CourseService::new(&ctx)
        .get_course(course.id, owner)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    // The share went with the course
    let courses = CourseService::new(&ctx).list_courses(tl).await.unwrap();
    assert!(courses.is_empty());
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login_upserts_by_github_id() {
    let ctx = memory_context();
    let auth = AuthService::new(&ctx);

    let mut user = integration_tests::github_user();
    let first = auth.login_github_user(user.clone()).await.unwrap();

    // Same GitHub account with a renamed login maps to the same profile
    user.login = format!("{}-renamed", user.login);
    let second = auth.login_github_user(user.clone()).await.unwrap();

    assert_eq!(first.user.id, second.user.id);
    assert_eq!(second.user.username, user.login);

    let me = auth.me(first.user.id).await.unwrap();
    assert_eq!(me.username, user.login);
}

#[tokio::test]
async fn test_refresh_flow() {
    let ctx = memory_context();
    let auth = AuthService::new(&ctx);

    let login = auth
        .login_github_user(integration_tests::github_user())
        .await
        .unwrap();

    let refreshed = auth.refresh(&login.refresh_token).await.unwrap();
    assert_eq!(refreshed.user.id, login.user.id);
    assert!(!refreshed.access_token.is_empty());

    // An access token is not accepted as a refresh token
    assert!(auth.refresh(&login.access_token).await.is_err());
}

#[tokio::test]
async fn test_me_unknown_user() {
    let ctx = memory_context();
    let err = AuthService::new(&ctx).me(Uuid::new_v4()).await.unwrap_err();
    assert_error(&err, 404, "PROFILE_NOT_FOUND");
}
