pub mod config_service;
pub mod facade;
pub mod paths;
pub mod remote;
pub mod secret_service;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::facade::PersistenceFacade;
pub use crate::paths::AtelierPaths;
pub use crate::remote::{DataApiClient, OfflineMirror, build_mirror};
pub use crate::secret_service::SecretServiceImpl;
pub use crate::storage::{JsonFileStore, MemoryStore};
