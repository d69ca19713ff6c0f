use crate::shared::icons::icon;
use crate::shared::pagination_window::{window, PageItem};
use leptos::prelude::*;

/// PaginationControls - пейджер с окном номеров страниц
///
/// Номера страниц считает `pagination_window::window`; снаружи страницы
/// нумеруются с 0, на экране с 1.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of filtered items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    page_size_options: Vec<usize>,

    /// Сколько номеров страниц показывать (минимум 3)
    #[prop(optional, default = 5)]
    visible_pages: usize,
) -> impl IntoView {
    let fallback_size = page_size_options.first().copied().unwrap_or(10);

    let items = move || window(current_page.get() + 1, total_pages.get(), visible_pages);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                items()
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(number) => {
                            let is_current = move || current_page.get() + 1 == number;
                            view! {
                                <button
                                    class=move || {
                                        if is_current() {
                                            "pagination-btn pagination-btn--current"
                                        } else {
                                            "pagination-btn"
                                        }
                                    }
                                    on:click=move |_| on_page_change.run(number - 1)
                                >
                                    {number.to_string()}
                                </button>
                            }
                            .into_any()
                        }
                        PageItem::Ellipsis => {
                            view! { <span class="pagination-ellipsis">{item.to_string()}</span> }
                                .into_any()
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total_pages.get()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">{move || format!("Всего: {}", total_count.get())}</span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
