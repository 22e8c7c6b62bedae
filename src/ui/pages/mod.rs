pub mod home;
pub mod section;
pub mod settings;
pub mod subscribers;

pub use home::DashboardPage;
pub use section::SectionPage;
pub use settings::SettingsPage;
pub use subscribers::SubscribersPage;
