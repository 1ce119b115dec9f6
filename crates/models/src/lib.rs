//! SeaORM entities for the circuit registry, their field validators and the
//! database connection helpers.

pub mod errors;
pub mod db;
pub mod validate;
pub mod provider;
pub mod circuit_type;
pub mod site;
pub mod circuit;
pub mod circuit_termination;
pub mod token;

use chrono::Utc;
use sea_orm::{prelude::DateTimeWithTimeZone, ActiveValue, Set};

/// Maintain `created_at`/`updated_at` from `ActiveModelBehavior::before_save`.
pub(crate) fn stamp(
    created_at: &mut ActiveValue<DateTimeWithTimeZone>,
    updated_at: &mut ActiveValue<DateTimeWithTimeZone>,
    insert: bool,
) {
    let now: DateTimeWithTimeZone = Utc::now().into();
    if insert {
        *created_at = Set(now);
    }
    *updated_at = Set(now);
}
