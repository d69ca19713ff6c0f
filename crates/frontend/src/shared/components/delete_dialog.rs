use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;
use thaw::*;

/// Подтверждение удаления одной или нескольких записей
#[component]
pub fn DeleteDialog(
    #[prop(into)]
    title: String,
    /// Готовый текст вопроса
    #[prop(into)]
    message: String,
    #[prop(into)]
    confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalFrame title=title on_close=on_cancel modal_class="modal--confirm">
            <p class="confirm-dialog__message">{message}</p>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Отмена"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                    {confirm_label}
                </Button>
            </div>
        </ModalFrame>
    }
}
