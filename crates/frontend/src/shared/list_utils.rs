//! List search utilities shared by every resource screen.

use contracts::shared::descriptor::AdminResource;
use leptos::prelude::*;

/// Row types matchable by the list search box.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Every admin resource searches across its descriptor's search fields,
/// case-insensitively.
impl<T: AdminResource> Searchable for T {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        T::descriptor()
            .search_fields
            .iter()
            .any(|key| self.cell(key).to_lowercase().contains(&needle))
    }
}

/// Keep only matching rows. Preserves relative order and never re-sorts; an
/// empty (or all-whitespace) filter passes everything through.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter.trim()))
        .collect()
}

/// Search box with a clear button. Fires `on_change` on every keystroke;
/// the filter itself is pure client-side work, so no debounce is needed.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-box">
            <span class="search-box__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-box__input"
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
            {move || (!value.get().is_empty()).then(|| view! {
                <button
                    class="search-box__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::team::TeamMember;

    fn member(id: i64, name: &str, position: &str) -> TeamMember {
        TeamMember {
            id,
            name: name.into(),
            position: position.into(),
            photo: None,
            photo_url: None,
        }
    }

    #[test]
    fn filter_is_case_insensitive() {
        let rows = vec![member(1, "Ann", "Senior Engineer")];
        assert_eq!(filter_list(rows.clone(), "Engineer").len(), 1);
        assert_eq!(filter_list(rows, "engineer").len(), 1);
    }

    #[test]
    fn non_matching_filter_yields_no_rows() {
        let rows = vec![member(1, "Ann", "CTO"), member(2, "Bob", "Designer")];
        assert!(filter_list(rows, "quantum").is_empty());
    }

    #[test]
    fn order_is_preserved_and_filter_is_idempotent() {
        let rows = vec![
            member(1, "Ann Lee", "Dev"),
            member(2, "Bob", "Ops"),
            member(3, "Anna", "Dev"),
        ];
        let once = filter_list(rows, "an");
        let ids: Vec<i64> = once.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
        let twice = filter_list(once.clone(), "an");
        assert_eq!(
            twice.iter().map(|m| m.id).collect::<Vec<_>>(),
            ids
        );
    }

    #[test]
    fn blank_filter_passes_everything() {
        let rows = vec![member(1, "Ann", "Dev"), member(2, "Bob", "Ops")];
        assert_eq!(filter_list(rows.clone(), "").len(), 2);
        assert_eq!(filter_list(rows, "   ").len(), 2);
    }
}
