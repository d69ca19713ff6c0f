mod view;
mod view_model;

pub use view::DiscountDetails;
pub use view_model::{DiscountDetailsViewModel, DiscountDraft};
