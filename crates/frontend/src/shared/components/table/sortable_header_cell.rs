//! Сортируемая ячейка заголовка таблицы
//!
//! Клик циклически переключает сортировку: ▲ → ▼ → без сортировки.

use crate::shared::table_engine::SortDirection;
use leptos::prelude::*;
use thaw::*;

pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => "",
    }
}

pub fn sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Направление сортировки по этой колонке (None, если сортировка по другой)
    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    on_sort: Callback<()>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(())
            >
                {label}
                <span class=move || sort_class(direction.get())>
                    {move || sort_indicator(direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator() {
        assert_eq!(sort_indicator(Some(SortDirection::Asc)), " ▲");
        assert_eq!(sort_indicator(Some(SortDirection::Desc)), " ▼");
        assert_eq!(sort_indicator(None), "");
        assert_eq!(sort_class(None), "sort-icon");
    }
}
