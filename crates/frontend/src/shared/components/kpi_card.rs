use contracts::shared::view_models::{KpiView, Trend};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Dashboard KPI card. Values arrive preformatted from the view model.
#[component]
pub fn KpiCard(kpi: KpiView) -> impl IntoView {
    let (card_class, change_class, arrow) = match kpi.metric.trend {
        Trend::Up => (
            "stat-card stat-card--success",
            "stat-card__change stat-card__change--up",
            Some("trend-up"),
        ),
        Trend::Down => (
            "stat-card stat-card--error",
            "stat-card__change stat-card__change--down",
            Some("trend-down"),
        ),
        Trend::Neutral => ("stat-card", "stat-card__change stat-card__change--flat", None),
    };

    view! {
        <div class=card_class data-kpi=kpi.metric.key.clone()>
            <div class="stat-card__content">
                <div class="stat-card__label">{kpi.metric.label.clone()}</div>
                <div class="stat-card__value">{kpi.value_display.clone()}</div>
                <span class=change_class title=kpi.trend_label>
                    {arrow.map(icon)}
                    {kpi.change_display.clone()}
                </span>
            </div>
        </div>
    }
}
