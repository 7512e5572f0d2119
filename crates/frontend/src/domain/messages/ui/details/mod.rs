use contracts::shared::view_models::{message_from_response, MessageView};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::shared::fetch::{fetch_json, LatestRequest};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

#[component]
pub fn MessageDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let message: RwSignal<Option<MessageView>> = RwSignal::new(None);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let latest = LatestRequest::new();

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        let ticket = latest.begin();
        message.set(None);
        error.set(None);
        spawn_local(async move {
            let path = format!("/api/messages/{}", urlencoding::encode(&id));
            let result = fetch_json(&path).await;
            match latest.accept(ticket, result) {
                Some(Ok(response)) => {
                    message.set(Some(MessageView::new(message_from_response(&response))))
                }
                Some(Err(e)) => error.set(Some(e)),
                None => {}
            }
        });
    });

    view! {
        <PageFrame page_id="messages--detail" category=PAGE_CAT_DETAIL>
            <a href="/dashboard/messaging" class="btn-secondary">"Back to messages"</a>
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            {move || match message.get() {
                None if error.with(Option::is_none) => view! { <Spinner /> }.into_any(),
                None => ().into_any(),
                Some(view_model) => view! {
                    <article class="message-detail">
                        <header class="message-detail__header">
                            <span class="avatar" style:background-color=view_model.avatar_color>
                                {view_model.sender_initials.clone()}
                            </span>
                            <div>
                                <h1>{view_model.message.subject.clone()}</h1>
                                <div>
                                    {view_model.message.sender_name.clone()}
                                    " "
                                    <span class="message-detail__email">{view_model.message.sender_email.clone()}</span>
                                </div>
                                <div class="message-detail__date">{view_model.date_display.clone()}</div>
                            </div>
                        </header>
                        <p class="message-detail__body">{view_model.message.body.clone()}</p>
                    </article>
                }
                .into_any(),
            }}
        </PageFrame>
    }
}
