pub mod adapter;
pub mod app_ops;
pub mod permissions;
pub mod script;
pub mod window_ops;

pub use adapter::MacOSAdapter;
