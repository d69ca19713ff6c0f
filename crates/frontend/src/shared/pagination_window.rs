//! Номера страниц для пейджера
//!
//! Показывается ограниченное окно вокруг текущей страницы, первая и
//! последняя страницы, а разрывы обозначаются многоточием.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Номер страницы (с 1)
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{}", n),
            PageItem::Ellipsis => write!(f, "…"),
        }
    }
}

/// Окно номеров страниц. `current_page` и результат нумеруются с 1.
pub fn window(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<PageItem> {
    let max_visible = max_visible.max(3);

    if total_pages <= max_visible {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let half = (max_visible / 2) as i64;
    let total = total_pages as i64;
    let mut start = current_page as i64 - half;
    let mut end = current_page as i64 + half;

    if start < 1 {
        start = 1;
        end = max_visible as i64;
    }
    if end > total {
        end = total;
        start = total - (max_visible as i64 - 1);
    }

    let mut items = Vec::with_capacity(max_visible + 4);
    if start > 1 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(|p| PageItem::Page(p as usize)));
    if end < total {
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total_pages));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    fn render(items: &[PageItem]) -> String {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_single_page() {
        assert_eq!(window(1, 1, 5), vec![Page(1)]);
    }

    #[test]
    fn test_no_pages() {
        assert!(window(1, 0, 5).is_empty());
    }

    #[test]
    fn test_centered_window() {
        assert_eq!(
            window(5, 10, 5),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn test_clamped_at_start_and_end() {
        assert_eq!(render(&window(1, 10, 5)), "1 2 3 4 5 … 10");
        assert_eq!(render(&window(10, 10, 5)), "1 … 6 7 8 9 10");
        assert_eq!(render(&window(3, 10, 5)), "1 2 3 4 5 … 10");
        assert_eq!(render(&window(4, 10, 5)), "1 … 2 3 4 5 6 … 10");
    }

    #[test]
    fn test_minimum_visible_is_three() {
        assert_eq!(window(2, 3, 1), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(render(&window(5, 10, 0)), "1 … 4 5 6 … 10");
    }

    #[test]
    fn test_last_page_always_last_element() {
        for k in 1..=20 {
            assert_eq!(window(k, k, 3).last(), Some(&Page(k)), "k = {}", k);
        }
    }
}
