mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::{CategoryDetailsViewModel, CategoryDraft};
