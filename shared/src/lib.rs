pub mod error;
pub mod models;
pub mod designs;
pub mod validation;
pub mod vote_state;

pub use error::ErrorResponse;
pub use models::*;
pub use validation::*;
pub use vote_state::{LikedDesigns, VoteBoard, DesignTally, LIKED_STORAGE_KEY};
