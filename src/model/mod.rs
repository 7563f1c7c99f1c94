pub mod record;
pub mod scores;
pub mod weights;
