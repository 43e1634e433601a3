//! Enquiry delivery.
//!
//! Handlers hand enquiries to a [`ChannelNotifier`], which only enqueues them
//! so the shopper is acknowledged immediately. A single [`DeliveryWorker`]
//! task drains the queue: every enquiry is logged, and emailed to the shop
//! inbox when SMTP is configured. Email failures are reported to Sentry; they
//! never reach the shopper.

use tokio::sync::mpsc;
use tracing::{error, instrument, warn};

use vino_crackers_core::{Enquiry, EnquiryNotifier, LogNotifier, NotifyError};

use super::email::EmailService;

/// Sending half of the delivery queue.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Enquiry>,
}

impl ChannelNotifier {
    /// Whether the worker has stopped accepting enquiries.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl EnquiryNotifier for ChannelNotifier {
    fn notify(&self, enquiry: &Enquiry) -> Result<(), NotifyError> {
        self.sender
            .send(enquiry.clone())
            .map_err(|_| NotifyError::Closed)
    }
}

/// Receiving half of the delivery queue.
pub struct DeliveryWorker {
    receiver: mpsc::UnboundedReceiver<Enquiry>,
    email: Option<EmailService>,
}

/// Create a delivery queue. Spawn [`DeliveryWorker::run`] to drain it.
#[must_use]
pub fn channel(email: Option<EmailService>) -> (ChannelNotifier, DeliveryWorker) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (
        ChannelNotifier { sender },
        DeliveryWorker { receiver, email },
    )
}

impl DeliveryWorker {
    /// Wait for the next queued enquiry without delivering it.
    ///
    /// Returns `None` once every [`ChannelNotifier`] has been dropped and the
    /// queue is empty.
    pub async fn recv(&mut self) -> Option<Enquiry> {
        self.receiver.recv().await
    }

    /// Deliver enquiries until every sender is dropped.
    pub async fn run(mut self) {
        tracing::info!(email = self.email.is_some(), "Enquiry delivery worker started");
        while let Some(enquiry) = self.receiver.recv().await {
            deliver(&enquiry, self.email.as_ref()).await;
        }
        tracing::info!("Enquiry delivery worker stopped");
    }
}

#[instrument(skip_all, fields(enquiry_id = %enquiry.id))]
async fn deliver(enquiry: &Enquiry, email: Option<&EmailService>) {
    if let Err(e) = LogNotifier.notify(enquiry) {
        warn!(error = %e, "Failed to log enquiry");
    }

    let Some(email) = email else {
        return;
    };
    if let Err(e) = email.send_enquiry(enquiry).await {
        let event_id = sentry::capture_error(&e);
        error!(
            error = %e,
            sentry_event_id = %event_id,
            "Failed to email enquiry"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use vino_crackers_core::{Cart, Catalog, ContactDetails, ProductId};

    fn enquiry() -> Enquiry {
        let catalog = Catalog::fireworks();
        let mut cart = Cart::new();
        cart.adjust(ProductId::new(4), 2);
        let customer = ContactDetails::new("Meena", "98400 12345", "Deliver after 6pm").unwrap();
        Enquiry::snapshot(customer, &cart, &catalog)
    }

    #[tokio::test]
    async fn test_notify_enqueues_enquiry() {
        let (notifier, mut worker) = channel(None);
        let sent = enquiry();

        notifier.notify(&sent).unwrap();
        let received = worker.recv().await.unwrap();
        assert_eq!(received, sent);
    }

    #[tokio::test]
    async fn test_notify_fails_once_worker_is_gone() {
        let (notifier, worker) = channel(None);
        drop(worker);

        assert!(notifier.is_closed());
        assert!(matches!(
            notifier.notify(&enquiry()),
            Err(NotifyError::Closed)
        ));
    }

    #[tokio::test]
    async fn test_run_stops_when_senders_dropped() {
        let (notifier, worker) = channel(None);
        notifier.notify(&enquiry()).unwrap();
        drop(notifier);

        // Drains the queued enquiry, then returns.
        worker.run().await;
    }
}
