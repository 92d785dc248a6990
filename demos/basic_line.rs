//! Basic line plot demo, with a scoped style override.

use catplot::{line, ScopedPolicy};

fn main() {
    env_logger::Builder::from_default_env().init();

    let x: Vec<f64> = (0..=100).map(|i| i as f64 / 10.0).collect();
    let y: Vec<f64> = x.iter().map(|&v| v.sin()).collect();

    let result = line(&x, y.clone())
        .title("Basic Line Plot")
        .xlabel("X-axis")
        .ylabel("Y-axis")
        .finish()
        .expect("plotting failed");
    result.save("basic_line_plot.svg").expect("save failed");

    // A thicker variant, styled only inside this scope
    {
        let _style = ScopedPolicy::new().set("lines.linewidth", 4.0).enter();
        line(&x, y)
            .title("Thick Line")
            .finish()
            .expect("plotting failed")
            .save("thick_line_plot.svg")
            .expect("save failed");
    }

    println!("Saved basic_line_plot.svg and thick_line_plot.svg");
}
