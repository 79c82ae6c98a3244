use crate::charts::dispatch;
use crate::charts::registry::{charts_for_tab, Tab};
use crate::data::{read_dashboard_data, DashboardData};
use crate::filters::FilterBar;
use shared::KpiStat;
use yew::prelude::*;

fn stat_card(stat: &KpiStat) -> Html {
    html! {
        <div class="stat-card primary">
            <h3>{ stat.label.clone().unwrap_or_default() }</h3>
            <div class="stat-value">{ stat.value }</div>
            if let Some(description) = &stat.description {
                <div class="stat-subtitle">{ description }</div>
            }
        </div>
    }
}

fn tab_button(tab: Tab, current: Tab, on_select: &Callback<Tab>) -> Html {
    let onclick = {
        let on_select = on_select.clone();
        Callback::from(move |_| on_select.emit(tab))
    };
    html! {
        <button class={classes!(
                "inline-flex", "items-center", "px-3", "py-2", "text-sm", "font-medium", "border-b-2",
                if current == tab {
                    classes!("border-blue-500", "text-blue-600")
                } else {
                    classes!("border-transparent", "text-gray-500", "hover:text-gray-700", "hover:border-gray-300")
                }
            )}
            {onclick}>
            { tab.label() }
        </button>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let current_tab = use_state(|| Tab::Studio);
    let data: UseStateHandle<std::rc::Rc<DashboardData>> =
        use_state(|| std::rc::Rc::new(read_dashboard_data()));

    let on_select_tab = {
        let current_tab = current_tab.clone();
        Callback::from(move |tab: Tab| {
            current_tab.set(tab);
        })
    };

    // Charts mount after the container divs exist, and again on every tab
    // switch since switching replaces the grid.
    {
        let data = data.clone();
        use_effect_with(*current_tab, move |tab| {
            dispatch::render_tab(*tab, &data);
            || ()
        });
    }

    let genre_options: Vec<String> = data
        .genre_counts
        .iter()
        .filter_map(|c| c.label.clone())
        .collect();
    let platform_options: Vec<String> = data
        .platform_counts
        .iter()
        .filter_map(|c| c.label.clone())
        .collect();

    html! {
        <div class="analytics-dashboard">
            <div class="dashboard-header">
                <h1>{"Gamescope Analytics"}</h1>
                <p>{"Collection-wide statistics and visualizations for the game catalog"}</p>
            </div>

            <FilterBar genres={genre_options} platforms={platform_options} />

            <div class="flex space-x-2 border-b border-gray-200 mb-6">
                { for Tab::all().iter().map(|tab| tab_button(*tab, *current_tab, &on_select_tab)) }
            </div>

            <div class="dashboard-content">
                if *current_tab == Tab::Studio {
                    <div class="dashboard-section">
                        <h2>{"Collection Overview"}</h2>
                        <div class="stats-grid">
                            if data.stats.is_empty() {
                                <div class="no-data">{"No data available"}</div>
                            } else {
                                { for data.stats.iter().map(stat_card) }
                            }
                        </div>
                    </div>
                }

                <div class="charts-grid" key={current_tab.slug()}>
                    { for charts_for_tab(*current_tab).map(|entry| html! {
                        <div class="chart-container">
                            <div id={entry.container_id}></div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
