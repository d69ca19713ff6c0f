use std::collections::HashSet;
use std::hash::Hash;

/// Состояние чекбокса в заголовке таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl HeaderCheckState {
    /// Вычисляется только по строкам текущей страницы
    pub fn for_page<'a, Id, I>(visible_ids: I, selected: &HashSet<Id>) -> Self
    where
        Id: Eq + Hash + 'a,
        I: IntoIterator<Item = &'a Id>,
    {
        let mut total = 0usize;
        let mut checked = 0usize;
        for id in visible_ids {
            total += 1;
            if selected.contains(id) {
                checked += 1;
            }
        }

        if total == 0 || checked == 0 {
            HeaderCheckState::Unchecked
        } else if checked == total {
            HeaderCheckState::Checked
        } else {
            HeaderCheckState::Indeterminate
        }
    }

    /// Что сделает клик по чекбоксу: true = выбрать страницу, false = снять
    pub fn toggle_target(&self) -> bool {
        !matches!(self, HeaderCheckState::Checked)
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, HeaderCheckState::Checked)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, HeaderCheckState::Indeterminate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_state() {
        let selected: HashSet<u32> = [1, 2, 9].into_iter().collect();
        assert_eq!(
            HeaderCheckState::for_page(&[1, 2], &selected),
            HeaderCheckState::Checked
        );
        assert_eq!(
            HeaderCheckState::for_page(&[1, 3], &selected),
            HeaderCheckState::Indeterminate
        );
        assert_eq!(
            HeaderCheckState::for_page(&[3, 4], &selected),
            HeaderCheckState::Unchecked
        );
        assert_eq!(
            HeaderCheckState::for_page(&[] as &[u32], &selected),
            HeaderCheckState::Unchecked
        );
    }

    #[test]
    fn test_toggle_target() {
        assert!(HeaderCheckState::Unchecked.toggle_target());
        assert!(HeaderCheckState::Indeterminate.toggle_target());
        assert!(!HeaderCheckState::Checked.toggle_target());
    }
}
