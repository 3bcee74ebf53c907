//! # SAMA Showroom - Library Root
//!
//! A native desktop **product showroom** for the SAMA AI vehicle damage
//! scanning platform. This library crate contains all modules used by the
//! binary crate (`main.rs`).
//!
//! The showroom is a self-contained demo: authentication, damage analysis and
//! checkout are all simulated locally. The only state that survives a restart
//! is the visitor's language/currency preference pair.
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              showroom (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  egui_extras   - Scan ledger tables                    │
//! │  egui-notify   - Toast notifications                   │
//! │  Tokio         - Timers and simulated collaborators    │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!                          │
//!                          │ DTOs
//!                          ▼
//!                 ┌─────────────────┐
//!                 │  shared crate   │
//!                 │  (locale, scan, │
//!                 │   profile DTOs) │
//!                 └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state and screen management
//!   - Core orchestrator of the GUI
//!   - Event-driven architecture with async tasks
//!   - Screen navigation, history stack and auth gating
//!
//! - **services**: Simulated collaborators
//!   - `auth`: demo identity provider (no real credentials)
//!   - `analyzer`: simulated damage analysis with canned findings
//!
//! - **prefs**: The two persisted preference keys (language, currency)
//!
//! - **ui**: Rendering framework
//!   - `shell`: eframe application shell (chrome, routing, toasts)
//!   - `screens`: per-screen rendering (landing, dashboard, capture, ...)
//!   - `widgets`: nav bar, footer, auth modal, pricing cards
//!   - `theme`: SAMA color palette and styling
//!   - `i18n`: navigation strings for the eight supported languages
//!
//! - **utils**: Tokio runtime bridge and input validation
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! The application uses **async channels** for communication:
//! - Main thread: handles input and rendering (single-threaded)
//! - Async tasks: timers and simulated analysis (background runtime)
//!
//! Events flow from async tasks back to the main thread via the `AppEvent`
//! enum and are drained once per frame in `App::on_tick()`. All state
//! mutation happens on the main thread.
//!
//! ### State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`:
//! - **Thread-safe**: multiple readers, exclusive writers
//! - **Shared**: accessible from background tasks
//! - **Locked briefly**: the UI clones a snapshot each frame
//!
//! ### Screen System
//!
//! Nine screens with a history stack and a floating back control:
//! marketing pages (landing, platform, enterprise, API, resources,
//! community), the gated fleet screens (dashboard, capture) and the
//! checkout overlay.
//!
//! ## Usage
//!
//! ### As a Binary
//!
//! ```bash
//! cargo run --bin showroom
//! ```
//!
//! ### As a Library (for testing)
//!
//! ```rust
//! use showroom::app::{App, Screen};
//!
//! let app = App::new();
//! let state = app.state.read();
//! assert_eq!(state.current_screen, Screen::Landing);
//! ```

// Re-export main modules for testing and integration
// All modules are public to enable library usage and testing
pub mod app;
pub mod core;
pub mod debug;
pub mod prefs;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
// These are the most frequently used types that consumers of this library will need
pub use app::{App, AppEvent, AppState, Screen};
pub use core::{AppError, Result};
