extern crate georank;

use georank::{NamedPoint, Point, PointOfInterest};

#[test]
fn accepts_valid_records() {
    let poi = PointOfInterest::new("City Library", "12 Main Road", 48.137154, 11.576124).unwrap();

    assert_eq!(poi.name(), "City Library");
    assert_eq!(poi.address(), "12 Main Road");
    assert_eq!(poi.latitude(), 48.137154);
    assert_eq!(poi.longitude(), 11.576124);
}

#[test]
fn accepts_boundary_coordinates() {
    assert!(PointOfInterest::new("north pole", "-", 90., 0.).is_ok());
    assert!(PointOfInterest::new("south pole", "-", -90., 0.).is_ok());
    assert!(PointOfInterest::new("date line east", "-", 0., 180.).is_ok());
    assert!(PointOfInterest::new("date line west", "-", 0., -180.).is_ok());
}

#[test]
fn rejects_empty_names() {
    assert!(PointOfInterest::new("", "12 Main Road", 0., 0.).is_err());
}

#[test]
fn rejects_out_of_range_coordinates() {
    assert!(PointOfInterest::new("too far north", "-", 90.1, 0.).is_err());
    assert!(PointOfInterest::new("too far south", "-", -90.1, 0.).is_err());
    assert!(PointOfInterest::new("too far east", "-", 0., 180.1).is_err());
    assert!(PointOfInterest::new("too far west", "-", 0., -180.1).is_err());
}

#[test]
fn rejects_non_finite_coordinates() {
    assert!(PointOfInterest::new("nan lat", "-", f64::NAN, 0.).is_err());
    assert!(PointOfInterest::new("nan lon", "-", 0., f64::NAN).is_err());
    assert!(PointOfInterest::new("inf lat", "-", f64::INFINITY, 0.).is_err());
    assert!(PointOfInterest::new("inf lon", "-", 0., f64::NEG_INFINITY).is_err());
}
