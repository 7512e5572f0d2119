use contracts::shared::view_models::{kpis_from_response, orders_from_response, KpiView, OrderView};
use contracts::system::access::catalog::VIEW_RECENT_ORDERS;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::kpi_card::KpiCard;
use crate::shared::config::use_config;
use crate::shared::fetch::use_tenant_list;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::system::auth::guard::PermissionGate;

const RECENT_ORDERS: usize = 5;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let currency = use_config().currency;
    let kpis = use_tenant_list("/api/dashboard/kpis", kpis_from_response);

    let cards = {
        let currency = currency.clone();
        move || {
            kpis.get()
                .items
                .into_iter()
                .filter_map(|metric| {
                    // cards the console has no permission key for are never shown
                    let Some(permission) = metric.permission() else {
                        log::debug!("no permission mapped for KPI '{}'", metric.key);
                        return None;
                    };
                    let kpi = KpiView::new(metric, &currency);
                    Some(view! {
                        <PermissionGate permission=permission>
                            <KpiCard kpi=kpi.clone() />
                        </PermissionGate>
                    })
                })
                .collect_view()
        }
    };

    view! {
        <PageFrame page_id="overview--dashboard" category=PAGE_CAT_DASHBOARD title="Dashboard">
            <Show when=move || kpis.with(|s| s.is_loaded) fallback=|| view! { <Spinner /> }>
                <div class="kpi-grid">{cards.clone()}</div>
            </Show>

            <PermissionGate permission=VIEW_RECENT_ORDERS>
                <RecentOrders currency=currency.clone() />
            </PermissionGate>
        </PageFrame>
    }
}

#[component]
fn RecentOrders(currency: contracts::shared::config::CurrencyConfig) -> impl IntoView {
    let orders = use_tenant_list("/api/orders?limit=5", orders_from_response);

    let rows = move || {
        orders
            .get()
            .items
            .into_iter()
            .take(RECENT_ORDERS)
            .map(|order| OrderView::new(order, &currency))
            .map(|row| {
                view! {
                    <TableRow>
                        <TableCell>{row.order.number.clone()}</TableCell>
                        <TableCell>{row.order.customer_name.clone()}</TableCell>
                        <TableCell>{row.date_display.clone()}</TableCell>
                        <TableCell class="text-right">{row.total_display.clone()}</TableCell>
                        <TableCell>{row.status_label.clone()}</TableCell>
                    </TableRow>
                }
            })
            .collect_view()
    };

    view! {
        <section class="dashboard-section">
            <h2>"Recent orders"</h2>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Order"</TableHeaderCell>
                        <TableHeaderCell>"Customer"</TableHeaderCell>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>"Total"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        </section>
    }
}
