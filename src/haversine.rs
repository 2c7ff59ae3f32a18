use crate::Point;

/// Great-circle distance between two points in kilometers.
///
/// No input validation happens here; non-finite coordinates propagate
/// through the arithmetic per IEEE 754 semantics.
pub fn haversine_distance(p1: &dyn Point, p2: &dyn Point) -> f64 {
    const R: f64 = 6371.; // kilometers

    let phi1 = p1.latitude().to_radians();
    let phi2 = p2.latitude().to_radians();
    let delta_phi = (p2.latitude() - p1.latitude()).to_radians();
    let delta_rho = (p2.longitude() - p1.longitude()).to_radians();

    let a = (delta_phi / 2.).sin() * (delta_phi / 2.).sin() +
        phi1.cos() * phi2.cos() *
            (delta_rho / 2.).sin() * (delta_rho / 2.).sin();

    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    R * c
}
