/// Global Tokio runtime for background tasks
///
/// egui drives the main thread synchronously, but the simulated collaborators
/// and the UI timers (dropdown close, deferred scroll) are async. This static
/// runtime bridges the two by:
/// 1. Providing a tokio context for handlers to spawn into
/// 2. Letting tasks report back through the app's event channel, which the
///    main thread drains in `App::on_tick()`
///
/// Usage:
/// ```rust,ignore
/// use crate::utils::runtime::TOKIO_RT;
///
/// TOKIO_RT.spawn(async move {
///     tokio::time::sleep(delay).await;
///     let _ = event_tx.send(AppEvent::DropdownCloseElapsed(generation)).await;
/// });
/// ```
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for background tasks")
});
