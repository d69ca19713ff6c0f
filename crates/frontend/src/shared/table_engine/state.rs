use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

/// Состояние таблицы одного экрана
///
/// Выбор хранится как множество идентификаторов строк, а не индексов на
/// странице, поэтому он переживает переход между страницами.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState<Id: Eq + Hash> {
    pub sort: Option<SortState>,
    pub page_index: usize,
    pub page_size: usize,
    pub selected: HashSet<Id>,
    pub global_filter: String,
    default_page_size: usize,
}

impl<Id: Eq + Hash + Clone + Ord> TableState<Id> {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            sort: None,
            page_index: 0,
            page_size,
            selected: HashSet::new(),
            global_filter: String::new(),
            default_page_size: page_size,
        }
    }

    /// Сброс к значениям по умолчанию (набор строк заменён целиком)
    pub fn reset(&mut self) {
        *self = Self::new(self.default_page_size);
    }

    // ------------------------------------------------------------------------
    // Сортировка
    // ------------------------------------------------------------------------

    /// Клик по заголовку: по возрастанию → по убыванию → без сортировки
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = match self.sort.take() {
            Some(s) if s.key == key => match s.direction {
                SortDirection::Asc => Some(SortState {
                    key: s.key,
                    direction: SortDirection::Desc,
                }),
                SortDirection::Desc => None,
            },
            _ => Some(SortState {
                key: key.to_string(),
                direction: SortDirection::Asc,
            }),
        };
    }

    pub fn set_sort(&mut self, key: &str, direction: SortDirection) {
        self.sort = Some(SortState {
            key: key.to_string(),
            direction,
        });
    }

    pub fn sort_direction_for(&self, key: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|s| s.key == key)
            .map(|s| s.direction)
    }

    // ------------------------------------------------------------------------
    // Пагинация
    // ------------------------------------------------------------------------

    /// Перейти на страницу. Индекс не ограничивается числом страниц:
    /// страница за пределами диапазона отрисуется пустой.
    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    // ------------------------------------------------------------------------
    // Глобальный фильтр
    // ------------------------------------------------------------------------

    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.global_filter {
            self.global_filter = text;
            self.page_index = 0;
        }
    }

    // ------------------------------------------------------------------------
    // Выбор строк
    // ------------------------------------------------------------------------

    pub fn is_selected(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }

    pub fn set_row_selected(&mut self, id: Id, selected: bool) {
        if selected {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    pub fn toggle_row(&mut self, id: Id) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Выбрать / снять выбор только у переданных (видимых на странице) строк
    pub fn set_page_selected<I>(&mut self, visible_ids: I, selected: bool)
    where
        I: IntoIterator<Item = Id>,
    {
        for id in visible_ids {
            self.set_row_selected(id, selected);
        }
    }

    pub fn select_ids<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = Id>,
    {
        self.selected.extend(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Убрать из выбора ID, которых больше нет в наборе строк
    pub fn retain_selection(&mut self, existing: &HashSet<Id>) {
        self.selected.retain(|id| existing.contains(id));
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Выбранные ID в детерминированном порядке
    pub fn selected_ids(&self) -> Vec<Id> {
        let mut ids: Vec<Id> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_cycle() {
        let mut state: TableState<u32> = TableState::new(10);
        state.toggle_sort("name");
        assert_eq!(state.sort_direction_for("name"), Some(SortDirection::Asc));
        state.toggle_sort("name");
        assert_eq!(state.sort_direction_for("name"), Some(SortDirection::Desc));
        state.toggle_sort("name");
        assert_eq!(state.sort, None);

        state.toggle_sort("name");
        state.toggle_sort("code");
        assert_eq!(state.sort_direction_for("code"), Some(SortDirection::Asc));
        assert_eq!(state.sort_direction_for("name"), None);
    }

    #[test]
    fn test_page_size_and_filter_reset_page() {
        let mut state: TableState<u32> = TableState::new(10);
        state.set_page(3);
        state.set_page_size(0);
        assert_eq!(state.page_size, 1);
        assert_eq!(state.page_index, 0);

        state.set_page(2);
        state.set_global_filter("");
        assert_eq!(state.page_index, 2);
        state.set_global_filter("acme");
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn test_set_page_is_not_clamped() {
        let mut state: TableState<u32> = TableState::new(10);
        state.set_page(99);
        assert_eq!(state.page_index, 99);
        state.set_page(0);
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn test_selection_ops() {
        let mut state: TableState<u32> = TableState::new(10);
        state.toggle_row(5);
        state.toggle_row(3);
        state.toggle_row(5);
        assert_eq!(state.selected_ids(), vec![3]);

        state.set_page_selected([1, 2], true);
        assert_eq!(state.selected_ids(), vec![1, 2, 3]);
        state.set_page_selected([1, 2], false);
        assert_eq!(state.selected_ids(), vec![3]);

        state.select_ids([7, 8]);
        let existing: HashSet<u32> = [3, 8].into_iter().collect();
        state.retain_selection(&existing);
        assert_eq!(state.selected_ids(), vec![3, 8]);
    }

    #[test]
    fn test_reset_keeps_default_page_size() {
        let mut state: TableState<u32> = TableState::new(20);
        state.set_page_size(50);
        state.toggle_sort("name");
        state.toggle_row(1);
        state.set_global_filter("x");
        state.reset();
        assert_eq!(state, TableState::new(20));
    }
}
