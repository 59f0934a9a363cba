//! Transient notification banners and their timers.

use dioxus::prelude::*;
use dropzone_core::{Notification, NotificationId, WidgetState};
use gloo_timers::future::TimeoutFuture;

/// Props for the [`Notifications`] component.
#[derive(Props, Clone, PartialEq)]
pub struct NotificationsProps {
    /// Live notifications, oldest first.
    notifications: Vec<Notification>,
}

/// Stack of banners. The `shown` class follows each banner's phase;
/// a CSS opacity transition does the fading.
#[component]
pub fn Notifications(props: NotificationsProps) -> Element {
    rsx! {
        div { class: "notifications", role: "status", aria_live: "polite",
            for note in props.notifications {
                div {
                    key: "{note.id}",
                    class: "notify {note.severity.css_class()} {shown_class(&note)}",
                    h3 { class: "notify-text", "{note.message}" }
                }
            }
        }
    }
}

/// `shown` while the banner is faded in.
const fn shown_class(note: &Notification) -> &'static str {
    if note.is_shown() { "shown" } else { "" }
}

/// Drive one notification through reveal, display and removal.
///
/// Each notification gets its own task, and every step targets only
/// `id`, so banners shown at the same time expire independently.
pub fn schedule<F: 'static>(mut state: Signal<WidgetState<F>>, id: NotificationId) {
    let timings = state.peek().config().notify_timings();
    spawn(async move {
        TimeoutFuture::new(timings.reveal_ms).await;
        state.write().notifications_mut().reveal(id);

        TimeoutFuture::new(timings.display_ms).await;
        state.write().notifications_mut().dismiss(id);

        TimeoutFuture::new(timings.fade_ms).await;
        state.write().notifications_mut().remove(id);
    });
}

#[cfg(test)]
mod tests {
    use dropzone_core::{Phase, Severity};

    use super::*;

    fn note(phase: Phase) -> Notification {
        Notification {
            id: NotificationId::new(1),
            message: "hello".into(),
            severity: Severity::Success,
            phase,
        }
    }

    #[test]
    fn only_visible_banners_are_shown() {
        assert_eq!(shown_class(&note(Phase::Entering)), "");
        assert_eq!(shown_class(&note(Phase::Visible)), "shown");
        assert_eq!(shown_class(&note(Phase::Leaving)), "");
    }
}
