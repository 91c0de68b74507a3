//! Plain data: serial numbers, the goods they are stamped on, and stock levels.

pub mod ids;
pub mod levels;
pub mod material;

pub use ids::*;
pub use levels::*;
pub use material::*;
