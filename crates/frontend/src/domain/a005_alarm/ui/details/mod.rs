mod view;
mod view_model;

pub use view::AlarmDetails;
pub use view_model::{AlarmDetailsViewModel, AlarmDraft};
