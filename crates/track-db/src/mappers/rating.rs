//! Rating entity <-> model mappers

use track_core::entities::Rating;
use track_core::traits::StatRow;

use crate::models::{RatingModel, StatRowModel};

impl From<RatingModel> for Rating {
    fn from(model: RatingModel) -> Self {
        Rating {
            id: model.id,
            student_id: model.student_id,
            activity_id: model.activity_id,
            score: model.score,
            notes: model.notes,
        }
    }
}

impl From<StatRowModel> for StatRow {
    fn from(model: StatRowModel) -> Self {
        StatRow {
            date: model.date,
            activity_id: model.activity_id,
            activity_name: model.activity_name,
            student_id: model.student_id,
            student_name: format!("{} {}", model.first_name, model.last_name),
            score: model.score,
        }
    }
}
