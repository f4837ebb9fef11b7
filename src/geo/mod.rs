pub mod location;
pub mod segment;
pub mod overlay;
pub mod pulse;

pub use location::{LngLat, Location, LOCATIONS};
pub use segment::{connection_segments, line_coords, split_at_antimeridian, ConnectionSegment};
pub use pulse::{Pulse, PulseFrame};
