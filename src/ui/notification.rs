use crate::roster::{Notification, NotificationKind};
use maud::{Markup, Render, html};

impl Render for Notification {
    fn render(&self) -> Markup {
        let colours = match self.kind {
            NotificationKind::Success => "bg-green-600",
            NotificationKind::Error => "bg-red-600",
        };

        html! {
            div role="status" class={"toast " (colours) " text-white font-semibold py-2 px-4 rounded-lg shadow-lg"} {
                (self.message)
            }
        }
    }
}

/// Toast area for the top of the page, pre-filled with `notifications`.
pub fn toasts(notifications: &[Notification]) -> Markup {
    html! {
        div id="toasts" class="fixed top-4 left-1/2 -translate-x-1/2 z-50 flex flex-col items-center space-y-2" {
            @for notification in notifications {
                (notification)
            }
        }
    }
}

/// Appends `notifications` to the toast area from any htmx response.
pub fn out_of_band(notifications: &[Notification]) -> Markup {
    html! {
        @if !notifications.is_empty() {
            div hx-swap-oob="beforeend:#toasts" {
                @for notification in notifications {
                    (notification)
                }
            }
        }
    }
}
