pub mod filter;
pub mod session;
pub mod store;

pub use crate::domain::model::{Graduate, GraduateDraft};
pub use crate::domain::ports::{ConfigProvider, GraduateStore, Notifier};
pub use crate::utils::error::Result;
