use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;
use gloo_timers::future::TimeoutFuture;

/// How long a notification stays on screen.
const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastLevel {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "alert-success",
            ToastLevel::Error => "alert-error",
            ToastLevel::Info => "alert-info",
            ToastLevel::Warning => "alert-warning",
        }
    }
}

#[derive(Clone, PartialEq)]
struct Toast {
    id: u64,
    level: ToastLevel,
    message: String,
}

/// Context-provided store of transient notifications. Mutation failures,
/// validation warnings and success confirmations all land here; nothing
/// blocks the shell.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Warning, message);
    }

    fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        let id = {
            let mut next_id = self.next_id.write();
            *next_id += 1;
            *next_id
        };
        self.items.write().push(Toast {
            id,
            level,
            message: message.into(),
        });

        let mut items = self.items;
        spawn(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            items.write().retain(|toast| toast.id != id);
        });
    }

    fn dismiss(&mut self, id: u64) {
        self.items.write().retain(|toast| toast.id != id);
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastContainer() -> Element {
    let mut toasts = use_context::<Toasts>();
    let items = toasts.items.read().clone();

    rsx! {
        div { class: "toast toast-end z-50",
            for toast in items {
                div {
                    class: format!("alert {} shadow-lg flex items-center gap-2", toast.level.alert_class()),
                    span { "{toast.message}" }
                    button {
                        class: "btn btn-ghost btn-xs",
                        onclick: move |_| toasts.dismiss(toast.id),
                        Icon { width: 14, height: 14, icon: FaXmark }
                    }
                }
            }
        }
    }
}
