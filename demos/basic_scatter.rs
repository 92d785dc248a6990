//! Basic scatter plot demo.

use catplot::scatter;

fn main() {
    env_logger::Builder::from_default_env().init();

    // Noisy linear trend
    let x: Vec<f64> = (0..100).map(|i| i as f64 / 10.0).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&v| 2.0 * v + ((v * 12.9898).sin() * 43758.5453).fract() - 0.5)
        .collect();

    let result = scatter(x, y)
        .title("Scatter Plot with Linear Trend")
        .xlabel("X values")
        .ylabel("Y values")
        .alpha(0.6)
        .size(80.0)
        .finish()
        .expect("plotting failed");

    result.save("scatter_example.svg").expect("save failed");
    println!(
        "Plot saved! {} points plotted.",
        result.metadata().n_points
    );
    println!("X range: {:?}", result.metadata().x_range);
    println!("Y range: {:?}", result.metadata().y_range);
}
