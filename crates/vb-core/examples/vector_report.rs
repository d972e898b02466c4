//! Command-line tour of the vector module: takes two 2D vectors and
//! prints every derived quantity the workbench can show.
//!
//! Usage: `cargo run --example vector_report -- x1 y1 x2 y2`
//! (defaults to v1 = (2.25, 2.25), v2 = (-2, 2) when omitted).

use std::env;
use vb_core::{Vec3, angle_between, triangle_area};

fn main() {
    env_logger::init();

    let args: Vec<f64> = env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    let (v1, v2) = if args.len() >= 4 {
        (
            Vec3::from_xy(args[0], args[1]),
            Vec3::from_xy(args[2], args[3]),
        )
    } else {
        (Vec3::from_xy(2.25, 2.25), Vec3::from_xy(-2.0, 2.0))
    };

    log::info!("v1 = {v1:?}, v2 = {v2:?}");

    println!("|v1| = {}", v1.magnitude());
    println!("|v2| = {}", v2.magnitude());
    println!("v1 + v2 = {:?}", v1 + v2);
    println!("v1 - v2 = {:?}", v1 - v2);
    println!("v1 · v2 = {}", v1.dot(v2));
    println!("v1 × v2 = {:?}", v1.cross(v2));

    match angle_between(v1, v2) {
        Ok(angle) => println!(
            "angle(v1, v2) = {:.4} rad ({:.2}°)",
            angle.radians, angle.degrees
        ),
        Err(e) => println!("angle(v1, v2): {e}"),
    }

    println!("triangle area = {}", triangle_area(v1, v2));

    match v1.normalized() {
        Ok(unit) => println!("v1 normalized = {unit:?}"),
        Err(e) => println!("v1 normalized: {e}"),
    }
}
