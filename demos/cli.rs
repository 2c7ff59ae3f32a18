extern crate georank;

use std::env;
use std::process;

use failure::Error;
use georank::{rank, PointOfInterest};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        return help();
    }

    let latitude: f64 = args[1].parse().expect("latitude must be a number");
    let longitude: f64 = args[2].parse().expect("longitude must be a number");

    let points = match read_points(&args[3]) {
        Ok(points) => points,
        Err(error) => {
            eprintln!("failed to read {}: {}", args[3], error);
            process::exit(1);
        }
    };

    println!("num points: {}", points.len());
    println!();

    for ranked in rank(latitude, longitude, &points) {
        println!("{:6} km  {}", ranked.distance_km, ranked.name);
    }
}

/// Reads `name,address,latitude,longitude` rows (with a header line).
fn read_points(path: &str) -> Result<Vec<PointOfInterest>, Error> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut points = Vec::new();
    for record in reader.records() {
        let record = record?;
        points.push(PointOfInterest::new(
            &record[0],
            &record[1],
            record[2].parse::<f64>()?,
            record[3].parse::<f64>()?,
        )?);
    }

    Ok(points)
}

fn help() {
    println!("usage: cli <latitude> <longitude> <csv-file>");
}
