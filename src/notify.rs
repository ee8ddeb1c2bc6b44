//! Toast notifications shown after form actions.
//!
//! At most one notification is on the page; showing a new one replaces the
//! previous. A notification slides in [`SHOW_DELAY`] after it is shown, starts
//! sliding out when closed or after [`AUTO_DISMISS`], and is removed once
//! [`FADE_OUT`] has elapsed.

use std::time::{Duration, Instant};

use minijinja::{context, AutoEscape, Environment, Error};

use crate::contact::ContactFormError;

/// Delay between inserting a notification and sliding it in.
pub const SHOW_DELAY: Duration = Duration::from_millis(10);
/// How long a notification stays visible without interaction.
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);
/// Slide-out time before the element is removed.
pub const FADE_OUT: Duration = Duration::from_millis(300);

const TEMPLATE_NAME: &str = "notification.html";
const TEMPLATE: &str = r#"<div class="notification notification-{{ kind }}">
    <span class="notification-icon">
        <i class="fas fa-{{ icon }}"></i>
    </span>
    <span class="notification-text">{{ message }}</span>
    <button class="notification-close">
        <i class="fas fa-times"></i>
    </button>
</div>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    /// Confirmation shown once a contact message was accepted.
    pub fn sent(name: &str) -> Self {
        Self::new(
            NotificationKind::Success,
            format!("Thank you, {name}! Your message has been sent successfully."),
        )
    }

    /// Font Awesome icon name, without the `fa-` prefix.
    pub fn icon(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "check-circle",
            NotificationKind::Info | NotificationKind::Error => "exclamation-circle",
        }
    }

    /// Renders the notification element. The message is HTML-escaped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use portfolio_view::Notification;
    ///
    /// let html = Notification::error("<b>oops</b>").render().unwrap();
    /// assert!(html.contains("notification-error"));
    /// assert!(!html.contains("<b>"));
    /// assert!(html.contains("&lt;b&gt;oops"));
    /// ```
    pub fn render(&self) -> Result<String, Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template(TEMPLATE_NAME, TEMPLATE)?;
        let template = env.get_template(TEMPLATE_NAME)?;
        template.render(context! {
            kind => self.kind.as_str(),
            icon => self.icon(),
            message => &self.message,
        })
    }
}

impl From<&ContactFormError> for Notification {
    fn from(err: &ContactFormError) -> Self {
        Notification::error(err.to_string())
    }
}

impl From<ContactFormError> for Notification {
    fn from(err: ContactFormError) -> Self {
        Notification::from(&err)
    }
}

#[derive(Debug)]
struct Shown {
    notification: Notification,
    shown_at: Instant,
    closing_since: Option<Instant>,
}

/// The single notification slot of the page.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    current: Option<Shown>,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, returning the one it replaced. The replaced
    /// one is removed at once, without fading out.
    pub fn show(&mut self, notification: Notification, now: Instant) -> Option<Notification> {
        tracing::debug!(kind = notification.kind.as_str(), "showing notification");
        self.current
            .replace(Shown {
                notification,
                shown_at: now,
                closing_since: None,
            })
            .map(|previous| previous.notification)
    }

    /// Starts sliding the notification out, as the close button does.
    ///
    /// Returns `false` when nothing is shown or it is already closing.
    pub fn close(&mut self, now: Instant) -> bool {
        match &mut self.current {
            Some(shown) if shown.closing_since.is_none() => {
                shown.closing_since = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Advances the slot to `now`: starts the auto-dismiss once
    /// [`AUTO_DISMISS`] has passed, and removes a closing notification after
    /// [`FADE_OUT`]. Returns the notification if it was removed.
    pub fn tick(&mut self, now: Instant) -> Option<Notification> {
        let shown = self.current.as_mut()?;
        if shown.closing_since.is_none() {
            let dismiss_at = shown.shown_at + AUTO_DISMISS;
            if now >= dismiss_at {
                shown.closing_since = Some(dismiss_at);
            }
        }
        let faded = shown
            .closing_since
            .is_some_and(|since| now.saturating_duration_since(since) >= FADE_OUT);
        if faded {
            self.current.take().map(|shown| shown.notification)
        } else {
            None
        }
    }

    /// Whether the notification is slid in: past [`SHOW_DELAY`] and not
    /// closing.
    pub fn is_visible(&self, now: Instant) -> bool {
        self.current.as_ref().is_some_and(|shown| {
            shown.closing_since.is_none()
                && now.saturating_duration_since(shown.shown_at) >= SHOW_DELAY
        })
    }

    /// The notification on the page, including one that is sliding out.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|shown| &shown.notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sent_message() {
        let n = Notification::sent("Ada");
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(
            n.message,
            "Thank you, Ada! Your message has been sent successfully."
        );
        assert_eq!(n.icon(), "check-circle");
    }

    #[test]
    fn test_from_form_error() {
        let n = Notification::from(ContactFormError::InvalidEmail);
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.message, "Please enter a valid email address.");
        assert_eq!(n.icon(), "exclamation-circle");
    }

    #[test]
    fn test_render_markup() {
        let html = Notification::sent("Ada").render().unwrap();
        assert!(html.contains(r#"class="notification notification-success""#));
        assert!(html.contains(r#"<i class="fas fa-check-circle"></i>"#));
        assert!(html.contains("Thank you, Ada!"));
        assert!(html.contains("notification-close"));
    }

    #[test]
    fn test_render_escapes_message() {
        let html = Notification::info(r#"<script>alert("x")</script>"#)
            .render()
            .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_slot_replaces_previous() {
        let mut slot = NotificationSlot::new();
        let now = Instant::now();
        assert_eq!(slot.show(Notification::info("first"), now), None);

        let replaced = slot.show(Notification::info("second"), now);
        assert_eq!(replaced.map(|n| n.message).as_deref(), Some("first"));
        assert_eq!(slot.current().map(|n| n.message.as_str()), Some("second"));
    }

    #[test]
    fn test_slot_slides_in_after_delay() {
        let mut slot = NotificationSlot::new();
        let start = Instant::now();
        slot.show(Notification::info("hi"), start);

        assert!(!slot.is_visible(start));
        assert!(slot.is_visible(start + SHOW_DELAY));
    }

    #[test]
    fn test_slot_auto_dismiss_fades_out() {
        let mut slot = NotificationSlot::new();
        let start = Instant::now();
        slot.show(Notification::info("hi"), start);

        assert_eq!(slot.tick(start + Duration::from_secs(4)), None);
        assert!(slot.is_visible(start + Duration::from_secs(4)));

        assert_eq!(slot.tick(start + AUTO_DISMISS), None);
        assert!(!slot.is_visible(start + AUTO_DISMISS));
        assert!(slot.current().is_some());

        let removed = slot.tick(start + AUTO_DISMISS + FADE_OUT);
        assert_eq!(removed.map(|n| n.message).as_deref(), Some("hi"));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_slot_close_removes_after_fade() {
        let mut slot = NotificationSlot::new();
        let start = Instant::now();
        slot.show(Notification::error("bad"), start);

        let closed_at = start + Duration::from_secs(1);
        assert!(slot.close(closed_at));
        assert!(!slot.close(closed_at));
        assert_eq!(slot.tick(closed_at + Duration::from_millis(299)), None);
        assert!(slot.tick(closed_at + FADE_OUT).is_some());
        assert!(!slot.close(closed_at + FADE_OUT));
    }

    #[test]
    fn test_slot_tick_when_empty() {
        let mut slot = NotificationSlot::new();
        assert_eq!(slot.tick(Instant::now()), None);
    }
}
