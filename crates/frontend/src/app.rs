use crate::domain::a001_brand::ui::list::BrandList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_supplier::ui::list::SupplierList;
use crate::domain::a004_discount::ui::list::DiscountList;
use crate::domain::a005_alarm::ui::list::AlarmList;
use crate::shared::icons::icon;
use crate::system::users::ui::list::UserList;
use contracts::shared::table_settings::{load_settings, TableSettings};
use leptos::prelude::*;

/// Экраны приложения (пункты левого меню)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Brands,
    Categories,
    Suppliers,
    Discounts,
    Alarms,
    Users,
}

impl Screen {
    pub fn all() -> [Screen; 6] {
        [
            Screen::Brands,
            Screen::Categories,
            Screen::Suppliers,
            Screen::Discounts,
            Screen::Alarms,
            Screen::Users,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Brands => "Бренды",
            Screen::Categories => "Категории",
            Screen::Suppliers => "Поставщики",
            Screen::Discounts => "Скидки",
            Screen::Alarms => "Оповещения",
            Screen::Users => "Пользователи",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Screen::Brands => "brand",
            Screen::Categories => "category",
            Screen::Suppliers => "suppliers",
            Screen::Discounts => "discount",
            Screen::Alarms => "alarm",
            Screen::Users => "users",
        }
    }

    fn render(self) -> AnyView {
        match self {
            Screen::Brands => view! { <BrandList /> }.into_any(),
            Screen::Categories => view! { <CategoryList /> }.into_any(),
            Screen::Suppliers => view! { <SupplierList /> }.into_any(),
            Screen::Discounts => view! { <DiscountList /> }.into_any(),
            Screen::Alarms => view! { <AlarmList /> }.into_any(),
            Screen::Users => view! { <UserList /> }.into_any(),
        }
    }
}

#[component]
fn Navbar(active: RwSignal<Screen>) -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                {Screen::all()
                    .into_iter()
                    .map(|screen| {
                        view! {
                            <li
                                class:active=move || active.get() == screen
                                on:click=move |_| {
                                    log::debug!("navigate: {:?}", screen);
                                    active.set(screen);
                                }
                            >
                                {icon(screen.icon_name())}
                                <span>{screen.title()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Настройки таблиц доступны всем спискам через context
    provide_context::<TableSettings>(load_settings(None));

    let active = RwSignal::new(Screen::default());

    view! {
        <div class="app-layout">
            <div data-zone="left" class="left">
                <Navbar active=active />
            </div>
            <main data-zone="center" class="center">
                {move || active.get().render()}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screens_have_distinct_icons() {
        let icons: std::collections::HashSet<_> =
            Screen::all().iter().map(Screen::icon_name).collect();
        assert_eq!(icons.len(), Screen::all().len());
    }
}
