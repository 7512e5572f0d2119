use contracts::shared::view_models::{orders_from_response, OrderView};
use leptos::prelude::*;
use thaw::*;

use crate::shared::config::use_config;
use crate::shared::fetch::use_tenant_list;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
pub fn OrdersListPage() -> impl IntoView {
    let currency = StoredValue::new(use_config().currency);
    let state = use_tenant_list("/api/orders", orders_from_response);

    let rows = move || {
        state
            .get()
            .items
            .into_iter()
            .map(|order| currency.with_value(|currency| OrderView::new(order, currency)))
            .map(|row| {
                let status_class = format!("status-badge status-badge--{}", row.order.status);
                view! {
                    <TableRow>
                        <TableCell>{row.order.number.clone()}</TableCell>
                        <TableCell>{row.date_display.clone()}</TableCell>
                        <TableCell>{row.order.customer_name.clone()}</TableCell>
                        <TableCell class="text-right">{row.order.item_count}</TableCell>
                        <TableCell class="text-right">{row.total_display.clone()}</TableCell>
                        <TableCell>
                            <span class=status_class>{row.status_label.clone()}</span>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="orders--list" category=PAGE_CAT_LIST title="Sales">
            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="error-message">{e}</div>
            })}
            <Show when=move || state.with(|s| s.is_loaded) fallback=|| view! { <Spinner /> }>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Order"</TableHeaderCell>
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"Customer"</TableHeaderCell>
                            <TableHeaderCell>"Items"</TableHeaderCell>
                            <TableHeaderCell>"Total"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows.clone()}</TableBody>
                </Table>
            </Show>
        </PageFrame>
    }
}
