pub mod message_service;
pub mod portfolio_service;
pub mod settings_service;
pub mod stats_service;
pub mod upload_service;

pub use message_service::{MessageError, MessageService};
pub use portfolio_service::{PortfolioError, PortfolioService};
pub use settings_service::{SettingsError, SettingsService};
pub use stats_service::{StatsError, StatsService};
pub use upload_service::{UploadError, UploadService};
