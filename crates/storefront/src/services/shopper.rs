//! Session bridge for the shop controller.
//!
//! The core controller works against a synchronous [`CartStore`]. Session
//! reads and writes are async, so each request snapshots the cart record and
//! UI state into a [`MemorySlot`], runs one shop event against it, and writes
//! back only what changed.
//!
//! [`CartStore`]: vino_crackers_core::CartStore

use tower_sessions::Session;
use tracing::warn;

use vino_crackers_core::{MemorySlot, Notice, Shop, ShopUiState};

use crate::error::Result;
use crate::models::session_keys;
use crate::services::delivery::ChannelNotifier;
use crate::state::AppState;

/// Shop controller as seen by a single request.
pub type WebShop<'a> = Shop<'a, &'a mut MemorySlot, &'a ChannelNotifier>;

/// Run one shop event for the shopper behind `session`.
///
/// # Errors
///
/// Returns an error if the updated cart or UI state cannot be saved to the
/// session.
pub async fn with_shop<R>(
    session: &Session,
    state: &AppState,
    event: impl FnOnce(&mut WebShop<'_>) -> R,
) -> Result<R> {
    let mut slot = load_slot(session).await;
    let loaded_ui = load_ui(session).await;

    let (result, ui) = {
        let mut shop = Shop::restore(state.catalog(), &mut slot, state.notifier(), loaded_ui);
        let result = event(&mut shop);
        (result, shop.ui_state())
    };

    if let Some(record) = slot.record().filter(|_| slot.is_dirty()) {
        session.insert(session_keys::CART, record).await?;
    }
    if ui != loaded_ui {
        session.insert(session_keys::SHOP_UI, ui).await?;
    }

    Ok(result)
}

/// Queue a notice for the next page render.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
pub async fn set_notice(session: &Session, notice: &Notice) -> Result<()> {
    session.insert(session_keys::NOTICE, notice).await?;
    Ok(())
}

/// Take the pending notice, if any. A notice is shown once.
pub async fn take_notice(session: &Session) -> Option<Notice> {
    session
        .remove::<Notice>(session_keys::NOTICE)
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read notice from session");
            None
        })
}

async fn load_slot(session: &Session) -> MemorySlot {
    match session.get::<String>(session_keys::CART).await {
        Ok(Some(record)) => MemorySlot::with_record(record),
        Ok(None) => MemorySlot::new(),
        Err(e) => {
            warn!(error = %e, "Failed to read cart from session, starting with an empty cart");
            MemorySlot::new()
        }
    }
}

async fn load_ui(session: &Session) -> ShopUiState {
    session
        .get::<ShopUiState>(session_keys::SHOP_UI)
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read shop state from session");
            None
        })
        .unwrap_or_default()
}
