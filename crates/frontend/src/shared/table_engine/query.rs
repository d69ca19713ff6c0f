//! Вычисление отображаемого среза таблицы
//!
//! `derive_view`: чистая функция от (строки, состояние, конфигурация):
//! фильтрация → сортировка → пагинация → признаки выбора.

use super::columns::{row_number, ColumnDescriptor, SearchField};
use super::selection::HeaderCheckState;
use super::state::{SortDirection, SortState, TableState};
use contracts::domain::common::MasterRecord;

/// Пейджер показывается, только если строк больше порога
pub const DEFAULT_PAGINATION_THRESHOLD: usize = 10;

/// Конфигурация движка таблицы
pub struct TableConfig<T> {
    pub columns: Vec<ColumnDescriptor<T>>,
    pub search_fields: Vec<SearchField<T>>,
    pub sorting: bool,
    pub selection: bool,
    pub pagination_threshold: usize,
}

impl<T> TableConfig<T> {
    pub fn new(columns: Vec<ColumnDescriptor<T>>) -> Self {
        Self {
            columns,
            search_fields: Vec::new(),
            sorting: true,
            selection: false,
            pagination_threshold: DEFAULT_PAGINATION_THRESHOLD,
        }
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDescriptor<T>> {
        self.columns.iter().find(|c| c.key == key)
    }
}

#[derive(Debug)]
pub struct VisibleRow<'a, T> {
    pub row_number: usize,
    pub row: &'a T,
    pub selected: bool,
}

#[derive(Debug)]
pub struct TableView<'a, T> {
    pub rows: Vec<VisibleRow<'a, T>>,
    pub page_count: usize,
    pub total_filtered: usize,
    pub show_pagination: bool,
    pub header_check: HeaderCheckState,
}

impl<T: MasterRecord> TableView<'_, T> {
    pub fn visible_ids(&self) -> Vec<T::Id> {
        self.rows.iter().map(|r| r.row.id()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Глобальный фильтр без учёта регистра
///
/// Текст фильтра сравнивается как есть, без обрезки пробелов. Если поля
/// поиска не настроены, фильтр ничего не отсекает, какой бы текст ни был
/// введён.
pub fn filter_rows<'a, T>(rows: &'a [T], filter: &str, fields: &[SearchField<T>]) -> Vec<&'a T> {
    let needle = filter.to_lowercase();
    if needle.is_empty() || fields.is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|row| {
            fields
                .iter()
                .any(|f| (f.value)(row).to_lowercase().contains(&needle))
        })
        .collect()
}

/// Стабильная сортировка по accessor активной колонки
pub fn sort_rows<T>(rows: &mut [&T], sort: Option<&SortState>, columns: &[ColumnDescriptor<T>]) {
    let Some(sort) = sort else {
        return;
    };
    let Some(column) = columns.iter().find(|c| c.key == sort.key && c.sortable) else {
        log::debug!("sort key '{}' is not a sortable column, ignored", sort.key);
        return;
    };
    rows.sort_by(|a, b| {
        let cmp = column.value(a).compare(&column.value(b));
        match sort.direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Строки заданной страницы; страница за пределами диапазона пуста
pub fn page_slice<'s, 'a, T>(rows: &'s [&'a T], page_index: usize, page_size: usize) -> &'s [&'a T] {
    let page_size = page_size.max(1);
    let start = page_index.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Отфильтрованные и отсортированные строки (все страницы)
pub fn filtered_sorted<'a, T: MasterRecord>(
    rows: &'a [T],
    state: &TableState<T::Id>,
    config: &TableConfig<T>,
) -> Vec<&'a T> {
    let mut filtered = filter_rows(rows, &state.global_filter, &config.search_fields);
    if config.sorting {
        sort_rows(&mut filtered, state.sort.as_ref(), &config.columns);
    }
    filtered
}

pub fn derive_view<'a, T: MasterRecord>(
    rows: &'a [T],
    state: &TableState<T::Id>,
    config: &TableConfig<T>,
) -> TableView<'a, T> {
    let filtered = filtered_sorted(rows, state, config);
    let total_filtered = filtered.len();
    let page = page_slice(&filtered, state.page_index, state.page_size);

    let visible: Vec<VisibleRow<'a, T>> = page
        .iter()
        .enumerate()
        .map(|(pos, row)| VisibleRow {
            row_number: row_number(state.page_index, state.page_size, pos),
            row: *row,
            selected: state.is_selected(&row.id()),
        })
        .collect();

    let visible_ids: Vec<T::Id> = visible.iter().map(|r| r.row.id()).collect();
    let header_check = HeaderCheckState::for_page(visible_ids.iter(), &state.selected);

    TableView {
        rows: visible,
        page_count: page_count(total_filtered, state.page_size),
        total_filtered,
        show_pagination: total_filtered > config.pagination_threshold,
        header_check,
    }
}

/// Клик по чекбоксу заголовка: меняет выбор только строк текущей страницы
pub fn toggle_page_selection<T: MasterRecord>(
    rows: &[T],
    state: &mut TableState<T::Id>,
    config: &TableConfig<T>,
) {
    let (ids, target) = {
        let view = derive_view(rows, state, config);
        (view.visible_ids(), view.header_check.toggle_target())
    };
    state.set_page_selected(ids, target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_engine::columns::CellValue;

    #[derive(Debug, Clone)]
    struct Row {
        id: u32,
        name: String,
        country: String,
    }

    impl MasterRecord for Row {
        type Id = u32;
        fn id(&self) -> u32 {
            self.id
        }
        fn set_id(&mut self, id: u32) {
            self.id = id;
        }
        fn display_name(&self) -> &str {
            &self.name
        }
        fn aggregate_index() -> &'static str {
            "t001"
        }
        fn collection_name() -> &'static str {
            "row"
        }
        fn element_name() -> &'static str {
            "Row"
        }
        fn list_name() -> &'static str {
            "Rows"
        }
    }

    fn rows(n: u32) -> Vec<Row> {
        (1..=n)
            .map(|i| Row {
                id: i,
                name: format!("Item {:02}", i),
                country: if i % 2 == 0 { "India" } else { "Germany" }.to_string(),
            })
            .collect()
    }

    fn config(searchable: bool) -> TableConfig<Row> {
        let mut config = TableConfig::new(vec![
            ColumnDescriptor::new("name", "Name", |r: &Row| CellValue::text(&r.name)).sortable(),
            ColumnDescriptor::new("country", "Country", |r: &Row| CellValue::text(&r.country))
                .sortable(),
            ColumnDescriptor::new("id", "Id", |r: &Row| CellValue::Integer(r.id as i64)),
        ]);
        if searchable {
            config.search_fields = vec![
                SearchField::new("name", |r: &Row| r.name.clone()),
                SearchField::new("country", |r: &Row| r.country.clone()),
            ];
        }
        config.selection = true;
        config
    }

    #[test]
    fn test_pages_cover_filtered_set() {
        let data = rows(23);
        let cfg = config(true);
        for page_size in [1, 4, 5, 10, 23, 50] {
            let mut state = TableState::new(page_size);
            state.set_global_filter("india");
            let pages = derive_view(&data, &state, &cfg).page_count;
            let mut total = 0;
            for p in 0..pages {
                state.set_page(p);
                total += derive_view(&data, &state, &cfg).rows.len();
            }
            assert_eq!(total, 11, "page_size {}", page_size);
        }
    }

    #[test]
    fn test_empty_rows() {
        let data: Vec<Row> = Vec::new();
        let state = TableState::new(10);
        let view = derive_view(&data, &state, &config(true));
        assert_eq!(view.page_count, 0);
        assert_eq!(view.total_filtered, 0);
        assert!(view.is_empty());
        assert!(!view.show_pagination);
        assert_eq!(view.header_check, HeaderCheckState::Unchecked);
    }

    #[test]
    fn test_filter_is_noop_without_search_fields() {
        let data = rows(5);
        let mut state = TableState::new(10);
        state.set_global_filter("no such text");
        assert_eq!(derive_view(&data, &state, &config(false)).total_filtered, 5);
        assert_eq!(derive_view(&data, &state, &config(true)).total_filtered, 0);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let data = rows(5);
        let mut state = TableState::new(10);
        state.set_global_filter("GERM");
        let view = derive_view(&data, &state, &config(true));
        let ids: Vec<u32> = view.visible_ids();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_filter_text_is_not_trimmed() {
        let data = rows(5);
        let cfg = config(true);
        let mut state = TableState::new(10);
        state.set_global_filter("   ");
        assert_eq!(derive_view(&data, &state, &cfg).total_filtered, 0);

        state.set_global_filter("  GERM ");
        assert_eq!(derive_view(&data, &state, &cfg).total_filtered, 0);

        // "Item 01".."Item 05" содержат " 0"
        state.set_global_filter(" 0");
        assert_eq!(derive_view(&data, &state, &cfg).total_filtered, 5);
    }

    #[test]
    fn test_sort_is_stable_and_clearable() {
        let data = rows(6);
        let cfg = config(false);
        let mut state = TableState::new(10);
        state.toggle_sort("country");
        let ids = derive_view(&data, &state, &cfg).visible_ids();
        assert_eq!(ids, vec![1, 3, 5, 2, 4, 6]);

        state.toggle_sort("country");
        let ids = derive_view(&data, &state, &cfg).visible_ids();
        assert_eq!(ids, vec![2, 4, 6, 1, 3, 5]);

        state.toggle_sort("country");
        let ids = derive_view(&data, &state, &cfg).visible_ids();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_non_sortable_column_keeps_order() {
        let data = rows(3);
        let mut state = TableState::new(10);
        state.set_sort("id", SortDirection::Desc);
        let ids = derive_view(&data, &state, &config(false)).visible_ids();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_page_renders_empty() {
        let data = rows(12);
        let mut state = TableState::new(5);
        state.set_page(7);
        let view = derive_view(&data, &state, &config(false));
        assert!(view.rows.is_empty());
        assert_eq!(view.page_count, 3);
        assert_eq!(state.page_index, 7);
    }

    #[test]
    fn test_pagination_threshold() {
        let cfg = config(false);
        let state = TableState::new(5);
        assert!(!derive_view(&rows(10), &state, &cfg).show_pagination);
        assert!(derive_view(&rows(11), &state, &cfg).show_pagination);
    }

    #[test]
    fn test_row_numbers_continue_across_pages() {
        let data = rows(12);
        let mut state = TableState::new(5);
        state.set_page(1);
        let numbers: Vec<usize> = derive_view(&data, &state, &config(false))
            .rows
            .iter()
            .map(|r| r.row_number)
            .collect();
        assert_eq!(numbers, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_selection_survives_navigation() {
        let data = rows(12);
        let cfg = config(false);
        let mut state = TableState::new(5);
        state.set_page(1);
        state.toggle_row(7);
        state.set_page(0);
        assert_eq!(state.selected_count(), 1);
        let view = derive_view(&data, &state, &cfg);
        assert!(view.rows.iter().all(|r| !r.selected));
        state.set_page(1);
        let view = derive_view(&data, &state, &cfg);
        assert!(view.rows.iter().any(|r| r.row.id == 7 && r.selected));
    }

    #[test]
    fn test_select_all_affects_only_current_page() {
        let data = rows(12);
        let cfg = config(false);
        let mut state = TableState::new(5);
        state.toggle_row(8);

        toggle_page_selection(&data, &mut state, &cfg);
        assert_eq!(state.selected_ids(), vec![1, 2, 3, 4, 5, 8]);
        assert_eq!(
            derive_view(&data, &state, &cfg).header_check,
            HeaderCheckState::Checked
        );

        toggle_page_selection(&data, &mut state, &cfg);
        assert_eq!(state.selected_ids(), vec![8]);

        state.set_page(1);
        assert_eq!(
            derive_view(&data, &state, &cfg).header_check,
            HeaderCheckState::Indeterminate
        );
        toggle_page_selection(&data, &mut state, &cfg);
        assert_eq!(state.selected_ids(), vec![6, 7, 8, 9, 10]);
    }
}
