//! # UI Timers
//!
//! The two timing behaviors of the showroom: the hover-intent delay that
//! closes the profile dropdown, and the deferred scroll that lands on the
//! pricing section after navigation.
//!
//! Both are sleeps on the shared runtime that report back through the event
//! channel. Cancellation is cooperative: the dropdown timer carries the
//! generation it was scheduled under, and the event handler drops it if the
//! generation has moved on since.

use crate::app::events::AppEvent;
use crate::app::state::SectionAnchor;
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use std::time::Duration;

/// Pointer-out grace period before the profile dropdown closes.
pub const DROPDOWN_CLOSE_DELAY: Duration = Duration::from_millis(300);

/// Delay between landing-page navigation and the pricing scroll, giving the
/// page a frame to lay out first.
pub const SCROLL_DEFER_DELAY: Duration = Duration::from_millis(100);

/// Schedule a dropdown close under `generation`.
///
/// Internal task function - use [`crate::app::App::handle_dropdown_hover`] instead.
pub(crate) fn schedule_dropdown_close(event_tx: Sender<AppEvent>, generation: u64) {
    TOKIO_RT.spawn(async move {
        tokio::time::sleep(DROPDOWN_CLOSE_DELAY).await;
        let _ = event_tx
            .send(AppEvent::DropdownCloseElapsed(generation))
            .await;
    });
}

/// Schedule a deferred scroll to `anchor`.
///
/// Internal task function - use [`crate::app::App::handle_navigate_to_pricing`] instead.
pub(crate) fn schedule_scroll(event_tx: Sender<AppEvent>, anchor: SectionAnchor) {
    TOKIO_RT.spawn(async move {
        tokio::time::sleep(SCROLL_DEFER_DELAY).await;
        let _ = event_tx.send(AppEvent::ScrollToSection(anchor)).await;
    });
}
