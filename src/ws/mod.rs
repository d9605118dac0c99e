pub mod handler;
pub mod registry;
pub mod service;
pub mod session;

pub use registry::{ConnectionRegistry, RegistryError};
pub use service::{CollabError, CollabService};
pub use session::{ConnId, Session};
