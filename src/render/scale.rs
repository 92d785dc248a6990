//! Axis tick generation.

/// Compute a "nice" number close to `range` for tick spacing.
pub fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10_f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10_f64.powf(exponent)
}

/// Generate nice tick positions covering `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    if num_ticks < 2 || !(max - min).is_finite() || max <= min {
        return vec![(min + max) / 2.0];
    }

    let range = nice_number(max - min, false);
    let tick_spacing = nice_number(range / (num_ticks - 1) as f64, true);
    let nice_min = (min / tick_spacing).floor() * tick_spacing;
    let nice_max = (max / tick_spacing).ceil() * tick_spacing;

    let mut ticks = Vec::new();
    let mut tick = nice_min;
    while tick <= nice_max + tick_spacing * 0.5 {
        if tick >= min - tick_spacing * 0.001 && tick <= max + tick_spacing * 0.001 {
            ticks.push(tick);
        }
        tick += tick_spacing;
    }

    ticks
}

/// Format a tick value, trimming needless trailing zeros.
pub fn format_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() >= 1000.0 || value.abs() < 0.01 {
        return format!("{:.1e}", value);
    }
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ticks_within_range() {
        let ticks = nice_ticks(0.0, 10.0, 5);
        assert!(!ticks.is_empty());
        for t in &ticks {
            assert!(*t >= -0.01 && *t <= 10.01);
        }
    }

    #[test]
    fn test_nice_ticks_degenerate_range() {
        assert_eq!(nice_ticks(5.0, 5.0, 5), vec![5.0]);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(2.50), "2.5");
        assert_eq!(format_tick(3.0), "3");
    }
}
