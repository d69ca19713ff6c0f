//! Форма бренда (MVVM: view_model.rs - состояние и команды, view.rs - UI)

mod view;
mod view_model;

pub use view::BrandDetails;
pub use view_model::BrandDetailsViewModel;
