#[macro_use] extern crate cfg_if;

extern crate failure;
extern crate ord_subset;

#[cfg(feature = "rayon")]
extern crate rayon;

mod point;
mod poi;

pub mod haversine;
pub mod rank;

pub use crate::point::{NamedPoint, Point};
pub use crate::poi::PointOfInterest;
pub use crate::rank::{nearest, rank, RankedPoint};
