pub mod config;
pub mod controller;
pub mod demo;
pub mod error;
pub mod repository;

pub use config::{ApiConfig, Config, ViewConfig, resolve_workspace_path};
pub use controller::{CampaignController, LoadOutcome, fetch_validated};
pub use demo::{demo_repository, sample_campaigns};
pub use error::{Error, Result};
pub use repository::{CampaignRepository, FileRepository, HttpRepository, StaticRepository};
