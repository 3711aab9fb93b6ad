//! Scale engine: backend IO and effect execution.
mod backend;
mod config;
mod engine;
mod storage;
mod types;
mod wire;

pub use backend::{Backend, ReqwestBackend};
pub use config::BackendConfig;
pub use engine::{EngineHandle, EventSink};
pub use storage::{Credentials, EnvStorage, FileStorage, ScopedStorage, CLIENT_ID_KEY, TOKEN_KEY};
pub use types::{BackendError, EngineError, EngineEvent, FailureKind};
