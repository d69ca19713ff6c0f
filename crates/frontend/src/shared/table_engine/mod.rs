//! Движок таблиц справочников: фильтр, сортировка, пагинация, выбор строк

pub mod columns;
pub mod query;
pub mod selection;
pub mod state;

pub use columns::{
    compose_columns, CellRule, CellValue, ColumnDescriptor, ColumnOptions, SearchField,
    TableColumn,
};
pub use query::{derive_view, toggle_page_selection, TableConfig, TableView, VisibleRow};
pub use selection::HeaderCheckState;
pub use state::{SortDirection, SortState, TableState};
