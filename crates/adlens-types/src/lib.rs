pub mod campaign;
pub mod error;
pub mod ordering;
pub mod status;

pub use campaign::{CampaignId, CampaignRecord, NewCampaign};
pub use error::{Error, Result};
pub use ordering::{SortDirection, SortKey};
pub use status::{CampaignStatus, StatusFilter};
