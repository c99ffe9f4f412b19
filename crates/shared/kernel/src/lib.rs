//! Kernel logic shared by the application shells.
//! Keep this crate free of DOM and rendering concerns; hosts plug in through the
//! [`bootstrap::ViewResolver`] and [`bootstrap::MountHost`] seams.
//!
//! ## Device classification
//! ```rust
//! # use shelf_kernel::device::classify;
//! # use shelf_kernel::domain::device::DeviceClass;
//! assert_eq!(classify(Some("Mozilla/5.0 (Linux; Android 10)")), DeviceClass::Mobile);
//! assert_eq!(classify(None), DeviceClass::Desktop);
//! ```
//!
//! ## Config loading
//! ```rust
//! use shelf_kernel::config::load_config_str;
//! use shelf_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config_str("[app]\nmount_id = \"root\"", &[]).unwrap();
//! assert_eq!(cfg.app.mount_id, "root");
//! ```
pub mod bootstrap;
pub mod config;
pub mod device;
pub mod error;
pub mod routing;

pub use shelf_domain as domain;
