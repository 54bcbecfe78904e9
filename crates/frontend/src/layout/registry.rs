//! Tab content registry: the single source of truth for mapping a tab key
//! to its rendered view.

use crate::shared::resource::resource_list;
use crate::system::pages::home::HomePage;
use contracts::domain::{
    about_us::AboutUs, business_line::BusinessLine, career::Career,
    career_opportunity::CareerOpportunity, client::Client, microdata_option::MicrodataOption,
    partnership::Partnership, portfolio::Portfolio, portfolio_category::PortfolioCategory,
    position::Position, process::Process, service::Service,
    service_landing_page::ServiceLandingPage, team::TeamMember, technology::Technology,
};
use leptos::prelude::*;

/// Human-readable tab title for a key. Falls back to the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    if key == "home" {
        return "Dashboard".to_string();
    }
    contracts::domain::descriptor_by_key(key)
        .map(|d| d.list_name.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Render the content for a tab key. Unknown keys get a placeholder so a
/// stale `?active=` parameter cannot take the shell down.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "home" => view! { <HomePage /> }.into_any(),

        "about_us" => resource_list::<AboutUs>().into_any(),
        "business_line" => resource_list::<BusinessLine>().into_any(),
        "microdata_option" => resource_list::<MicrodataOption>().into_any(),
        "process" => resource_list::<Process>().into_any(),
        "team" => resource_list::<TeamMember>().into_any(),
        "position" => resource_list::<Position>().into_any(),
        "client" => resource_list::<Client>().into_any(),
        "career" => resource_list::<Career>().into_any(),
        "career_opportunity" => resource_list::<CareerOpportunity>().into_any(),
        "portfolio" => resource_list::<Portfolio>().into_any(),
        "portfolio_category" => resource_list::<PortfolioCategory>().into_any(),
        "partnership" => resource_list::<Partnership>().into_any(),
        "service" => resource_list::<Service>().into_any(),
        "service_landing_page" => resource_list::<ServiceLandingPage>().into_any(),
        "technology" => resource_list::<Technology>().into_any(),

        unknown => {
            leptos::logging::log!("unknown tab key: '{}'", unknown);
            let unknown = unknown.to_string();
            view! {
                <div class="panel panel--empty">
                    <p>{format!("Unknown screen: {unknown}")}</p>
                </div>
            }
            .into_any()
        }
    }
}
