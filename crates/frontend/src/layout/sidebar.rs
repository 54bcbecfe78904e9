//! Sidebar with collapsible menu groups. Entity entries come from the
//! descriptor registry, so adding a resource never touches this file
//! beyond choosing its group.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain;
use contracts::shared::descriptor::ResourceDescriptor;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (key, label, icon)
}

fn entity_item(d: &'static ResourceDescriptor) -> (&'static str, &'static str, &'static str) {
    (d.key, d.list_name, d.icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "home",
            label: "Dashboard",
            icon: "bar-chart",
            items: vec![],
        },
        MenuGroup {
            id: "company",
            label: "Company",
            icon: "info",
            items: vec![
                entity_item(&domain::about_us::DESCRIPTOR),
                entity_item(&domain::business_line::DESCRIPTOR),
                entity_item(&domain::microdata_option::DESCRIPTOR),
                entity_item(&domain::process::DESCRIPTOR),
            ],
        },
        MenuGroup {
            id: "people",
            label: "People",
            icon: "users",
            items: vec![
                entity_item(&domain::team::DESCRIPTOR),
                entity_item(&domain::position::DESCRIPTOR),
                entity_item(&domain::client::DESCRIPTOR),
            ],
        },
        MenuGroup {
            id: "careers",
            label: "Careers",
            icon: "briefcase",
            items: vec![
                entity_item(&domain::career::DESCRIPTOR),
                entity_item(&domain::career_opportunity::DESCRIPTOR),
            ],
        },
        MenuGroup {
            id: "portfolio",
            label: "Portfolio",
            icon: "grid",
            items: vec![
                entity_item(&domain::portfolio::DESCRIPTOR),
                entity_item(&domain::portfolio_category::DESCRIPTOR),
                entity_item(&domain::partnership::DESCRIPTOR),
            ],
        },
        MenuGroup {
            id: "services",
            label: "Services",
            icon: "briefcase",
            items: vec![
                entity_item(&domain::service::DESCRIPTOR),
                entity_item(&domain::service_landing_page::DESCRIPTOR),
                entity_item(&domain::technology::DESCRIPTOR),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["company".to_string()]);

    let groups = menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let has_children = !group.items.is_empty();

                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                !has_children
                                    && ctx.active.get().as_deref() == Some(group.id)
                            }
                            on:click=move |_| {
                                if has_children {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                } else {
                                    ctx.open_tab(group.id, group.label);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| {
                                let gid_exp = group_id_for_exp.clone();
                                view! {
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || {
                                            expanded_groups.get().contains(&gid_exp)
                                        }
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                }
                            })}
                        </div>

                        {has_children.then(|| {
                            let gid_show = group_id.clone();
                            let items_stored = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&gid_show)>
                                    <div class="app-sidebar__children">
                                        {items_stored.get_value().into_iter().map(|(key, label, icon_name)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref() == Some(key)
                                                    }
                                                    on:click=move |_| {
                                                        ctx.open_tab(key, label);
                                                    }
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
