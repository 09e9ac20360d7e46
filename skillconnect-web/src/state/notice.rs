//! Transient notices (toasts)

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// How long a notice stays on screen
pub const NOTICE_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

#[derive(Clone, Copy)]
pub struct NoticeContext {
    pub notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NoticeContext {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NoticeKind::Info, title.into(), description.into());
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NoticeKind::Error, title.into(), description.into());
    }

    pub fn dismiss(&self, id: u64) {
        // The app may be unmounted before the timer fires
        let _ = self.notices.try_update(|list| list.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, title: String, description: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        match kind {
            NoticeKind::Info => log::info!("{}: {}", title, description),
            NoticeKind::Error => log::warn!("{}: {}", title, description),
        }
        self.notices.update(|list| list.push(Notice { id, title, description, kind }));

        let ctx = *self;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(NOTICE_DURATION_MS).await;
            ctx.dismiss(id);
        });
    }
}

pub fn provide_notice_context() -> NoticeContext {
    let context = NoticeContext::new();
    provide_context(context);
    context
}

pub fn use_notice_context() -> NoticeContext {
    expect_context::<NoticeContext>()
}
