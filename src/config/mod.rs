//! Configuration module

mod site;

pub use site::CommentConfig;
pub use site::ShareConfig;
pub use site::SiteConfig;
pub use site::SocialConfig;
pub use site::SponsorConfig;
