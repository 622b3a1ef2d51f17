// Services layer
// Services map between API requests, storage rows and domain types

pub mod artwork;
pub mod overview;
pub mod setting;
pub mod size_card;

pub use artwork::ArtworkService;
pub use overview::OverviewService;
pub use setting::SettingService;
pub use size_card::SizeCardService;
