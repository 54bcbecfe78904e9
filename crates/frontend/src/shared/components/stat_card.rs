use crate::shared::icons::icon;
use leptos::prelude::*;

fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('\u{00a0}');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

/// Count tile for the dashboard grid. `None` renders as a loading dash.
#[component]
pub fn StatCard(
    label: String,
    icon_name: String,
    #[prop(into)] value: Signal<Option<usize>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__body">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">
                    {move || value.get().map(format_thousands).unwrap_or_else(|| "—".to_string())}
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_nbsp() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1234), "1\u{00a0}234");
        assert_eq!(format_thousands(1234567), "1\u{00a0}234\u{00a0}567");
    }
}
