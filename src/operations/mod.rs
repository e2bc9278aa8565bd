pub mod distance;
pub mod extract;
pub mod locate;

pub use distance::{
    closest_locations, closest_points, distance, is_within_distance, ComponentRef, DistanceOp,
    GeometryLocation,
};
pub use locate::Location;
