mod physics;

// Re-export test fixtures
pub use physics::*;
pub use vehicles::*;
