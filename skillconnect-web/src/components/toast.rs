//! Notice stack, bottom-right

use leptos::prelude::*;

use crate::state::notice::{use_notice_context, NoticeKind};

#[component]
pub fn Toaster() -> impl IntoView {
    let notices = use_notice_context();

    view! {
        <div class="toaster">
            <For
                each=move || notices.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.kind {
                        NoticeKind::Info => "toast",
                        NoticeKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class on:click=move |_| notices.dismiss(id)>
                            <p class="toast-title">{notice.title}</p>
                            <p class="toast-description">{notice.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
