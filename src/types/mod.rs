mod bearing;
mod coordinate;
mod distance;
mod speed;
mod time;
mod waypoint;

pub use bearing::*;
pub use coordinate::*;
pub use distance::*;
pub use speed::*;
pub use time::*;
pub use waypoint::*;
