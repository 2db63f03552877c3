mod kyc_service;
mod push_service;

pub use kyc_service::KycService;
pub use push_service::{DeviceTokenStore, PgDeviceTokenStore, PushService};
