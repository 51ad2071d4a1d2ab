//! # track-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AccessService, AuthService, CourseService, InviteService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StatsService, StudentService,
    TrackingService,
};

pub use dto::{
    ActivityResponse, ActivityStats, ApiResponse, AuthResponse, CourseResponse,
    CourseStatsResponse, CreateActivityRequest, CreateCourseRequest, CreateInviteRequest,
    CreateStudentRequest, DaySheetResponse, DayStats, HealthResponse, InvitePreviewResponse,
    InviteResponse, LoginRequest, ProfileResponse, RatingEntry, RatingResponse,
    ReadinessResponse, SaveRatingsRequest, ShareResponse, StudentResponse, StudentScore,
    UpdateStudentRequest,
};
