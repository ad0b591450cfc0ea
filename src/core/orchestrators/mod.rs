pub mod app_orchestrator;

pub use app_orchestrator::{ActiveTab, AppOrchestrator, OrchestratorMessage};
