//! Scaling for the bar, line and pie painters.
//!
//! Series arrive pre-aggregated from the API; this module only maps values to
//! pixel space.

/// Smallest height given to a bar whose value is positive.
pub const MIN_BAR_HEIGHT: f32 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A named series for multi-series charts. All series share one scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

fn clean(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Largest value of the points, floored at 1 so scaling never divides by zero.
pub fn scale_divisor<'a>(points: impl IntoIterator<Item = &'a SeriesPoint>) -> f64 {
    points
        .into_iter()
        .map(|point| clean(point.value))
        .fold(1.0, f64::max)
}

/// Divisor shared by several series.
pub fn shared_divisor(series: &[Series]) -> f64 {
    scale_divisor(series.iter().flat_map(|s| s.points.iter()))
}

fn bar_height(value: f64, divisor: f64, max_height: f32) -> f32 {
    let value = clean(value);
    if value == 0.0 {
        return 0.0;
    }
    let height = (value / divisor) as f32 * max_height;
    height.max(MIN_BAR_HEIGHT).min(max_height.max(MIN_BAR_HEIGHT))
}

/// Bar heights proportional to the series maximum.
///
/// Zero, negative and non-finite values get no bar; any positive value gets
/// at least [`MIN_BAR_HEIGHT`].
pub fn bar_heights(points: &[SeriesPoint], max_height: f32) -> Vec<f32> {
    let divisor = scale_divisor(points);
    points
        .iter()
        .map(|point| bar_height(point.value, divisor, max_height))
        .collect()
}

/// Bar heights for grouped bars, one `Vec` per series, on a shared scale.
pub fn grouped_bar_heights(series: &[Series], max_height: f32) -> Vec<Vec<f32>> {
    let divisor = shared_divisor(series);
    series
        .iter()
        .map(|s| {
            s.points
                .iter()
                .map(|point| bar_height(point.value, divisor, max_height))
                .collect()
        })
        .collect()
}

/// Line vertices in a `width` x `height` box with the origin at the top-left.
///
/// A single point is centred horizontally.
pub fn line_points(points: &[SeriesPoint], width: f32, height: f32) -> Vec<(f32, f32)> {
    let divisor = scale_divisor(points);
    let steps = points.len().saturating_sub(1);
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = if steps == 0 {
                width / 2.0
            } else {
                i as f32 / steps as f32 * width
            };
            let y = height - (clean(point.value) / divisor) as f32 * height;
            (x, y)
        })
        .collect()
}

/// Share of each point in the total. All zeros when the total is zero.
pub fn pie_fractions(points: &[SeriesPoint]) -> Vec<f32> {
    let total: f64 = points.iter().map(|point| clean(point.value)).sum();
    points
        .iter()
        .map(|point| {
            if total > 0.0 {
                (clean(point.value) / total) as f32
            } else {
                0.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[f64]) -> Vec<SeriesPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| SeriesPoint::new(format!("p{i}"), *v))
            .collect()
    }

    #[test]
    fn test_bars_scale_to_maximum() {
        let heights = bar_heights(&points(&[50.0, 100.0, 25.0]), 200.0);
        assert_eq!(heights, vec![100.0, 200.0, 50.0]);
    }

    #[test]
    fn test_all_zero_series_does_not_divide_by_zero() {
        let heights = bar_heights(&points(&[0.0, 0.0]), 120.0);
        assert_eq!(heights, vec![0.0, 0.0]);
        assert_eq!(scale_divisor(&points(&[])), 1.0);
    }

    #[test]
    fn test_tiny_values_get_minimum_height() {
        let heights = bar_heights(&points(&[1.0, 100_000.0]), 100.0);
        assert_eq!(heights[0], MIN_BAR_HEIGHT);
        assert_eq!(heights[1], 100.0);
    }

    #[test]
    fn test_fractional_series_floor_divisor_at_one() {
        // Max is 0.5 but the divisor floors at 1, so bars stay half-height.
        let heights = bar_heights(&points(&[0.5]), 100.0);
        assert_eq!(heights, vec![50.0]);
    }

    #[test]
    fn test_negative_and_nan_are_clamped() {
        let heights = bar_heights(&points(&[-5.0, f64::NAN, 10.0]), 10.0);
        assert_eq!(heights, vec![0.0, 0.0, 10.0]);
    }

    #[test]
    fn test_grouped_bars_share_scale() {
        let series = vec![
            Series {
                name: "food".to_owned(),
                points: points(&[10.0, 40.0]),
            },
            Series {
                name: "subscriptions".to_owned(),
                points: points(&[20.0]),
            },
        ];
        let heights = grouped_bar_heights(&series, 80.0);
        assert_eq!(heights, vec![vec![20.0, 80.0], vec![40.0]]);
    }

    #[test]
    fn test_line_points_layout() {
        let line = line_points(&points(&[0.0, 10.0, 5.0]), 100.0, 50.0);
        assert_eq!(line, vec![(0.0, 50.0), (50.0, 0.0), (100.0, 25.0)]);

        let single = line_points(&points(&[3.0]), 100.0, 50.0);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].0, 50.0);
    }

    #[test]
    fn test_pie_fractions() {
        let fractions = pie_fractions(&points(&[1.0, 3.0]));
        assert_eq!(fractions, vec![0.25, 0.75]);
        assert_eq!(pie_fractions(&points(&[0.0, 0.0])), vec![0.0, 0.0]);
    }
}
