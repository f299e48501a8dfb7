pub mod object;
pub mod series;

pub use object::{CreatePlan, UpdatePlan, plan_create, plan_update, validate_event};
pub use series::{EventPatch, SeriesEdit, SeriesScope, delete_series, edit_series};
