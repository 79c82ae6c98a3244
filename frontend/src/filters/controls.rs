//! Filter form components. Submitting navigates with the encoded query so
//! the server re-renders the dashboard against the filtered collection.

use crate::filters::query::{apply_all_exclusivity, to_query, FilterSelection, ALL};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, SubmitEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct YearRangeSliderProps {
    pub label: String,
    pub min: i32,
    pub max: i32,
    pub value: i32,
    pub on_change: Callback<i32>,
}

/// Range slider whose label mirrors the slider value on every input event.
#[function_component(YearRangeSlider)]
pub fn year_range_slider(props: &YearRangeSliderProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                if let Ok(value) = input.value().parse::<i32>() {
                    on_change.emit(value);
                }
            }
        })
    };
    html! {
        <div class="filter-slider">
            <label>{ format!("{}: {}", props.label, props.value) }</label>
            <input
                type="range"
                min={props.min.to_string()}
                max={props.max.to_string()}
                value={props.value.to_string()}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct QuickPickSelectProps {
    pub label: String,
    pub options: Vec<String>,
    pub selected: Vec<String>,
    pub on_change: Callback<Vec<String>>,
}

fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.options();
    let mut values = Vec::new();
    for i in 0..options.length() {
        if let Some(option) = options
            .item(i)
            .and_then(|o| o.dyn_into::<web_sys::HtmlOptionElement>().ok())
        {
            if option.selected() {
                values.push(option.value());
            }
        }
    }
    values
}

/// Multi-select with an "All" entry that obeys the exclusivity rule. The
/// toggled value is recovered by diffing the raw DOM selection against the
/// previous state, then the rule decides the next selection.
#[function_component(QuickPickSelect)]
pub fn quick_pick_select(props: &QuickPickSelectProps) -> Html {
    let onchange = {
        let selected = props.selected.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let raw = selected_values(&select);
            let toggled = raw
                .iter()
                .find(|v| !selected.contains(v))
                .or_else(|| selected.iter().find(|v| !raw.contains(v)));
            let next = match toggled {
                Some(value) => apply_all_exclusivity(&selected, value, ALL),
                None => raw,
            };
            on_change.emit(next);
        })
    };
    html! {
        <div class="filter-select">
            <label>{ &props.label }</label>
            <select multiple=true {onchange}>
                { for std::iter::once(ALL.to_string()).chain(props.options.iter().cloned()).map(|option| {
                    let is_selected = props.selected.iter().any(|s| s == &option);
                    html! {
                        <option value={option.clone()} selected={is_selected}>{ option }</option>
                    }
                }) }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    #[prop_or(1970)]
    pub min_year: i32,
    #[prop_or(2026)]
    pub max_year: i32,
}

/// The filter form. Submit encodes the current selection and navigates;
/// the page comes back server-rendered for the filtered slice.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let selection = use_state(|| FilterSelection {
        genres: vec![ALL.to_string()],
        platforms: vec![ALL.to_string()],
        year_start: Some(props.min_year),
        year_end: Some(props.max_year),
        ..Default::default()
    });

    let on_genres = {
        let selection = selection.clone();
        Callback::from(move |genres: Vec<String>| {
            selection.set(FilterSelection { genres, ..(*selection).clone() });
        })
    };
    let on_platforms = {
        let selection = selection.clone();
        Callback::from(move |platforms: Vec<String>| {
            selection.set(FilterSelection { platforms, ..(*selection).clone() });
        })
    };
    let on_year_start = {
        let selection = selection.clone();
        Callback::from(move |year: i32| {
            selection.set(FilterSelection { year_start: Some(year), ..(*selection).clone() });
        })
    };
    let on_year_end = {
        let selection = selection.clone();
        Callback::from(move |year: i32| {
            selection.set(FilterSelection { year_end: Some(year), ..(*selection).clone() });
        })
    };

    let onsubmit = {
        let selection = selection.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let query = to_query(&selection);
            let href = if query.is_empty() {
                "/".to_string()
            } else {
                format!("/?{}", query)
            };
            if let Err(e) = gloo_utils::window().location().assign(&href) {
                log::error!("filter navigation failed: {:?}", e);
            }
        })
    };

    html! {
        <form class="filter-bar" {onsubmit}>
            <QuickPickSelect
                label="Genres"
                options={props.genres.clone()}
                selected={selection.genres.clone()}
                on_change={on_genres}
            />
            <QuickPickSelect
                label="Platforms"
                options={props.platforms.clone()}
                selected={selection.platforms.clone()}
                on_change={on_platforms}
            />
            <YearRangeSlider
                label="From"
                min={props.min_year}
                max={props.max_year}
                value={selection.year_start.unwrap_or(props.min_year)}
                on_change={on_year_start}
            />
            <YearRangeSlider
                label="To"
                min={props.min_year}
                max={props.max_year}
                value={selection.year_end.unwrap_or(props.max_year)}
                on_change={on_year_end}
            />
            <button type="submit" class="filter-apply">{ "Apply filters" }</button>
        </form>
    }
}
