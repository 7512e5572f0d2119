use contracts::shared::view_models::{customers_from_response, CustomerView};
use leptos::prelude::*;
use thaw::*;

use crate::shared::config::use_config;
use crate::shared::fetch::use_tenant_list;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
pub fn CustomersListPage() -> impl IntoView {
    let currency = StoredValue::new(use_config().currency);
    let state = use_tenant_list("/api/customers", customers_from_response);

    let rows = move || {
        state
            .get()
            .items
            .into_iter()
            .map(|customer| currency.with_value(|currency| CustomerView::new(customer, currency)))
            .map(|row| {
                view! {
                    <TableRow>
                        <TableCell>
                            <span class="avatar" style:background-color=row.avatar_color>
                                {row.initials.clone()}
                            </span>
                            {row.customer.name.clone()}
                        </TableCell>
                        <TableCell>{row.customer.email.clone()}</TableCell>
                        <TableCell>{row.customer.phone.clone()}</TableCell>
                        <TableCell class="text-right">{row.total_orders_display.clone()}</TableCell>
                        <TableCell class="text-right">{row.total_spent_display.clone()}</TableCell>
                    </TableRow>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="customers--list" category=PAGE_CAT_LIST title="Customers">
            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="error-message">{e}</div>
            })}
            <Show when=move || state.with(|s| s.is_loaded) fallback=|| view! { <Spinner /> }>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Email"</TableHeaderCell>
                            <TableHeaderCell>"Phone"</TableHeaderCell>
                            <TableHeaderCell>"Orders"</TableHeaderCell>
                            <TableHeaderCell>"Total spent"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows.clone()}</TableBody>
                </Table>
            </Show>
        </PageFrame>
    }
}
