/// Platform-specific application data paths.
pub mod data_storage;

/// User-facing message catalog and console macros.
pub mod messages;

/// The authenticated portal session.
pub mod session;

/// Terminal table rendering.
pub mod view;
