//! User-facing notifications.

use crate::action::Action;
use crate::error::EffectError;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Sink for notifications (toast, terminal line, log).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error => tracing::warn!("{}", notification.message),
            _ => tracing::info!(kind = ?notification.kind, "{}", notification.message),
        }
    }
}

/// Announces products added to the cart.
///
/// A product without a title stops the effect for the rest of the store's
/// life; later additions are no longer announced.
pub struct NotificationEffect {
    notifier: Arc<dyn Notifier>,
    halted: bool,
}

impl NotificationEffect {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            halted: false,
        }
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn handle(&mut self, action: &Action) -> Result<(), EffectError> {
        let Action::AddItem(product) = action else {
            return Ok(());
        };
        if self.halted {
            return Ok(());
        }

        let title = product.title.trim();
        if title.is_empty() {
            self.halted = true;
            return Err(EffectError::InvalidProductTitle(product.id));
        }

        self.notifier
            .notify(Notification::success(format!("{title} added to cart")));
        Ok(())
    }
}

impl std::fmt::Debug for NotificationEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationEffect")
            .field("halted", &self.halted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{product, RecordingNotifier};

    #[test]
    fn test_announces_added_product() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut effect = NotificationEffect::new(notifier.clone());

        effect.handle(&Action::AddItem(product(1, "Laptop", 999.0))).unwrap();
        effect.handle(&Action::ClearCart).unwrap();

        assert_eq!(notifier.messages(), vec!["Laptop added to cart"]);
        assert_eq!(notifier.notifications()[0].kind, NotificationKind::Success);
    }

    #[test]
    fn test_blank_title_halts_stream() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut effect = NotificationEffect::new(notifier.clone());

        let err = effect.handle(&Action::AddItem(product(9, "   ", 1.0)));
        assert!(matches!(err, Err(EffectError::InvalidProductTitle(_))));
        assert!(effect.is_halted());

        effect.handle(&Action::AddItem(product(1, "Laptop", 999.0))).unwrap();
        assert!(notifier.messages().is_empty());
    }
}
