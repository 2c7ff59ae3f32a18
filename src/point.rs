pub trait Point: Sync {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

/// A point that additionally carries a display name, as stored records do.
pub trait NamedPoint: Point {
    fn name(&self) -> &str;
}
