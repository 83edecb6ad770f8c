//! Domain models shared across the workspace

pub mod avatar;
pub mod category;
pub mod clothing;
pub mod measurements;
pub mod recommendation;
pub mod size;

pub use avatar::Avatar;
pub use category::ClothingCategory;
pub use clothing::ClothingItem;
pub use measurements::Measurements;
pub use recommendation::SizeRecommendation;
pub use size::Size;
