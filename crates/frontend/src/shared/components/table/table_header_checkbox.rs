//! Чекбокс «выбрать все» в заголовке таблицы
//!
//! Действует только на строки текущей страницы. Состояние (включая
//! indeterminate) вычисляет движок таблицы.

use crate::shared::table_engine::HeaderCheckState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableHeaderCheckbox(
    /// Состояние для видимых строк
    #[prop(into)]
    state: Signal<HeaderCheckState>,

    /// Клик по чекбоксу
    on_toggle: Callback<()>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate задаётся только через DOM-свойство
    Effect::new(move |_| {
        let indeterminate = state.get().is_indeterminate();
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(indeterminate);
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Выбрать все на странице"
                prop:checked=move || state.get().is_checked()
                on:change=move |_| on_toggle.run(())
            />
        </TableHeaderCell>
    }
}
