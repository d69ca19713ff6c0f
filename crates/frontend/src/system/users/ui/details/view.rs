use super::view_model::UserDetailsViewModel;
use crate::shared::components::form_fields::{CheckboxField, FormActions, FormError, TextField};
use crate::shared::components::tag_editor::TagEditor;
use contracts::system::users::User;
use leptos::prelude::*;

#[component]
pub fn UserDetails(
    initial: Option<User>,
    on_submit: Callback<User>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = UserDetailsViewModel::new(initial);
    let form = vm.form;

    view! {
        <div class="details-form">
            <TextField
                label="Логин"
                required=true
                value=Signal::derive(move || form.with(|d| d.record.username.clone()))
                on_input=Callback::new(move |v| form.update(|d| d.record.username = v))
            />
            <TextField
                label="Email"
                input_type="email"
                value=Signal::derive(move || form.with(|d| d.email.clone()))
                on_input=Callback::new(move |v| form.update(|d| d.email = v))
            />
            <TextField
                label="ФИО"
                value=Signal::derive(move || form.with(|d| d.full_name.clone()))
                on_input=Callback::new(move |v| form.update(|d| d.full_name = v))
            />
            <CheckboxField
                label="Активен"
                checked=Signal::derive(move || form.with(|d| d.record.is_active))
                on_change=Callback::new(move |v| form.update(|d| d.record.is_active = v))
            />
            <CheckboxField
                label="Администратор"
                checked=Signal::derive(move || form.with(|d| d.record.is_admin))
                on_change=Callback::new(move |v| form.update(|d| d.record.is_admin = v))
            />
            <TagEditor
                tags=Signal::derive(move || form.with(|d| d.record.tags.clone()))
                on_change=Callback::new(move |tags| form.update(|d| d.record.tags = tags))
            />
            <FormError error=vm.error />
            <FormActions
                on_save=Callback::new(move |_| vm.save_command(on_submit))
                on_cancel=on_cancel
            />
        </div>
    }
}
