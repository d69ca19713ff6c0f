pub mod delete_dialog;
pub mod form_fields;
pub mod page_header;
pub mod pagination_controls;
pub mod table;
pub mod tag_editor;
pub mod tag_filter_panel;
