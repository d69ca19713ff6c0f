//! Чекбокс выбора строки
//!
//! Клик по чекбоксу не доходит до строки (stop_propagation), поэтому строка
//! не открывается на редактирование.

use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    checked: Signal<bool>,

    /// Callback при изменении (новое значение)
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </TableCell>
    }
}
