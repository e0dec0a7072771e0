//! Notification feed operations on the store.

use super::Store;
use crate::notification::unread_count;
use crate::persist::KeyValueStore;

impl<K: KeyValueStore> Store<K> {
    pub fn unread_notifications(&self) -> usize {
        unread_count(self.notifications.as_slice())
    }

    /// Returns false when the notification does not exist.
    pub fn mark_notification_read(&mut self, id: u32) -> bool {
        let Some(notification) = self.notifications.get_mut(id) else {
            tracing::debug!(id, "Mark read skipped, notification not found");
            return false;
        };

        if !notification.read {
            notification.read = true;
            self.persist_notifications();
        }
        true
    }

    /// Mark the whole feed as read. Returns how many were unread.
    pub fn mark_all_notifications_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }

        if changed > 0 {
            tracing::info!(changed, "Notifications marked as read");
            self.persist_notifications();
        }
        changed
    }

    /// Returns false when the notification does not exist.
    pub fn delete_notification(&mut self, id: u32) -> bool {
        if !self.notifications.delete(id) {
            tracing::debug!(id, "Delete skipped, notification not found");
            return false;
        }

        tracing::info!(id, "Notification deleted");
        self.persist_notifications();
        true
    }
}
