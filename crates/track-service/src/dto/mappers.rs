//! Entity -> response DTO conversions

use track_core::entities::{Activity, Course, Invite, Profile, Rating, Share, Student};

use super::responses::{
    ActivityResponse, CourseResponse, InviteResponse, ProfileResponse, RatingResponse,
    ShareResponse, StudentResponse,
};

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            username: profile.username,
            email: profile.email,
            avatar_url: profile.avatar_url,
            created_at: profile.created_at,
        }
    }
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            slug: course.slug,
            owner_id: course.owner_id,
            created_at: course.created_at,
        }
    }
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            course_id: student.course_id,
            first_name: student.first_name,
            last_name: student.last_name,
            cell: student.cell,
            photo_url: student.photo_url,
        }
    }
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            course_id: activity.course_id,
            date: activity.date,
            name: activity.name,
        }
    }
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            id: rating.id,
            student_id: rating.student_id,
            activity_id: rating.activity_id,
            score: rating.score,
            notes: rating.notes,
        }
    }
}

impl From<Share> for ShareResponse {
    fn from(share: Share) -> Self {
        Self {
            course_id: share.course_id,
            user_id: share.user_id,
            permission: share.permission,
            student_id: share.student_id,
            created_at: share.created_at,
        }
    }
}

impl InviteResponse {
    /// Build the owner-facing response, including the acceptance link
    pub fn from_invite(invite: Invite, origin: &str) -> Self {
        let url = invite.url(origin);
        Self {
            url,
            token: invite.token,
            course_id: invite.course_id,
            permission: invite.permission,
            student_id: invite.student_id,
            created_at: invite.created_at,
            expires_at: invite.expires_at,
        }
    }
}
