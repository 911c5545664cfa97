//! Configuration module

mod site;

pub use site::DraftPolicy;
pub use site::Mode;
pub use site::SiteConfig;
