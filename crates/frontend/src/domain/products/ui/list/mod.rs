use contracts::shared::view_models::{products_from_response, ProductView, StockStatus};
use leptos::prelude::*;
use thaw::*;

use crate::shared::config::use_config;
use crate::shared::fetch::use_tenant_list;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

fn stock_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::InStock => "stock stock--ok",
        StockStatus::LowStock => "stock stock--low",
        StockStatus::OutOfStock => "stock stock--out",
    }
}

#[component]
pub fn ProductsListPage() -> impl IntoView {
    let currency = StoredValue::new(use_config().currency);
    let state = use_tenant_list("/api/products", products_from_response);

    let rows = move || {
        state
            .get()
            .items
            .into_iter()
            .map(|product| currency.with_value(|currency| ProductView::new(product, currency)))
            .map(|row| {
                view! {
                    <TableRow>
                        <TableCell>{row.product.name.clone()}</TableCell>
                        <TableCell>{row.product.sku.clone()}</TableCell>
                        <TableCell>{row.product.category.clone()}</TableCell>
                        <TableCell class="text-right">{row.price_display.clone()}</TableCell>
                        <TableCell class="text-right">{row.stock_display.clone()}</TableCell>
                        <TableCell>
                            <span class=stock_class(row.stock_status)>{row.stock_label}</span>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="products--list" category=PAGE_CAT_LIST title="Products">
            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="error-message">{e}</div>
            })}
            <Show when=move || state.with(|s| s.is_loaded) fallback=|| view! { <Spinner /> }>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"SKU"</TableHeaderCell>
                            <TableHeaderCell>"Category"</TableHeaderCell>
                            <TableHeaderCell>"Price"</TableHeaderCell>
                            <TableHeaderCell>"Stock"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows.clone()}</TableBody>
                </Table>
            </Show>
        </PageFrame>
    }
}
