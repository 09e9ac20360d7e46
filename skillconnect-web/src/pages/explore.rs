//! Explore Page - browse and filter professionals

use leptos::prelude::*;
use leptos_router::components::A;
use shared::dto::professional::{categories, filter_professionals, PriceRange, Professional, ProfessionalFilter};

use crate::data::professionals;
use crate::utils::format::{format_rating, format_usd};

const ALL_CATEGORIES: &str = "All Categories";

#[component]
pub fn ExplorePage() -> impl IntoView {
    let all = StoredValue::new(professionals());
    let category_options: Vec<String> = all.with_value(|all| {
        std::iter::once(ALL_CATEGORIES)
            .chain(categories(all))
            .map(str::to_string)
            .collect()
    });

    let search = RwSignal::new(String::new());
    let category = RwSignal::new(ALL_CATEGORIES.to_string());
    let price = RwSignal::new(PriceRange::Any);
    let crypto_only = RwSignal::new(false);

    let visible = Memo::new(move |_| {
        let filter = ProfessionalFilter {
            search: search.get(),
            category: Some(category.get()).filter(|c| c != ALL_CATEGORIES),
            price: price.get(),
            crypto_only: crypto_only.get(),
        };
        all.with_value(|all| {
            filter_professionals(all, &filter)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page">
            <h1 class="page-title">"Explore Professionals"</h1>

            <div class="filters">
                <input
                    type="search"
                    class="input"
                    placeholder="Search by name, skill, or keyword..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select class="input" on:change=move |ev| category.set(event_target_value(&ev))>
                    {category_options
                        .into_iter()
                        .map(|c| {
                            let selected = c == ALL_CATEGORIES;
                            view! { <option value=c.clone() selected=selected>{c.clone()}</option> }
                        })
                        .collect_view()}
                </select>
                <select class="input" on:change=move |ev| price.set(PriceRange::from_value(&event_target_value(&ev)))>
                    {PriceRange::ALL
                        .into_iter()
                        .map(|r| view! {
                            <option value=r.value() selected={r == PriceRange::Any}>{r.label()}</option>
                        })
                        .collect_view()}
                </select>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || crypto_only.get()
                        on:change=move |ev| crypto_only.set(event_target_checked(&ev))
                    />
                    "Accepts cryptocurrency"
                </label>
            </div>

            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! {
                    <div class="card">
                        <h3 class="card-title">"No professionals found"</h3>
                        <p class="muted">"Try adjusting your search or filters."</p>
                    </div>
                }
            >
                <div class="card-grid">
                    <For each=move || visible.get() key=|p| p.id children=professional_card/>
                </div>
            </Show>
        </div>
    }
}

fn professional_card(p: Professional) -> impl IntoView {
    let href = format!("/pay/{}", p.id);
    view! {
        <div class="card">
            <h3 class="card-title">{p.name}</h3>
            <p class="card-subtitle">{p.title}</p>
            <p class="muted">{p.location}" · "{p.category}</p>
            <p>{format_rating(p.rating, p.reviews)}</p>
            <div class="tags">
                {p.tags.into_iter().map(|t| view! { <span class="tag">{t}</span> }).collect_view()}
            </div>
            <div class="card-footer">
                <span class="rate">{format_usd(u64::from(p.hourly_rate))}" / hour"</span>
                {p.accepts_crypto.then(|| view! { <span class="badge">"Accepts crypto"</span> })}
                <A href=href>
                    <span class="btn">"Book a session"</span>
                </A>
            </div>
        </div>
    }
}
