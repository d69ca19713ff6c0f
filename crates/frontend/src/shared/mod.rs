pub mod components;
pub mod crud_wizard;
pub mod data;
pub mod icons;
pub mod modal_frame;
pub mod pagination_window;
pub mod table_engine;
pub mod tag_filter;
