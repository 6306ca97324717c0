pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, Command, PortalFileConfig};
pub use core::session::Session;
pub use core::store::HttpGraduateStore;
pub use domain::model::{Graduate, GraduateDraft};
pub use domain::ports::{GraduateStore, Notifier};
pub use utils::error::{PortalError, Result, ValidationFailure};
