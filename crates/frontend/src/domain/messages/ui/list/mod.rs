use contracts::shared::view_models::{messages_from_response, MessageView};
use leptos::prelude::*;
use thaw::*;

use crate::shared::fetch::use_tenant_list;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
pub fn MessagesListPage() -> impl IntoView {
    let state = use_tenant_list("/api/messages", messages_from_response);

    let rows = move || {
        state
            .get()
            .items
            .into_iter()
            .map(MessageView::new)
            .map(|row| {
                let href = format!("/dashboard/messaging/{}", urlencoding::encode(&row.message.id));
                view! {
                    <a href=href class="message-row" class:message-row--unread=!row.message.read>
                        <span class="avatar" style:background-color=row.avatar_color>
                            {row.sender_initials.clone()}
                        </span>
                        <div class="message-row__body">
                            <div class="message-row__header">
                                <strong>{row.message.sender_name.clone()}</strong>
                                <span class="message-row__date">{row.date_display.clone()}</span>
                            </div>
                            <div class="message-row__subject">{row.message.subject.clone()}</div>
                            <div class="message-row__preview">{row.preview.clone()}</div>
                        </div>
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="messages--list" category=PAGE_CAT_LIST title="Messages">
            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="error-message">{e}</div>
            })}
            <Show when=move || state.with(|s| s.is_loaded) fallback=|| view! { <Spinner /> }>
                <div class="message-list">{rows}</div>
            </Show>
        </PageFrame>
    }
}
