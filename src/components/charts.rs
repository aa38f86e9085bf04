use yew::prelude::*;

use crate::format::format_currency;
use crate::models::{CategoryTotal, TrendPoint};

pub const CHART_COLORS: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4", "#84cc16", "#f97316",
];

const DONUT_RADIUS: f64 = 40.0;

#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegment {
    pub label: String,
    pub color: &'static str,
    pub percent: f64,
    pub dash: f64,
    pub offset: f64,
}

// one dasharray arc per slice, laid end to end around the ring
pub fn donut_segments(breakdown: &[CategoryTotal]) -> Vec<DonutSegment> {
    let total: f64 = breakdown.iter().map(|entry| entry.total).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
    let mut start = 0.0;
    breakdown
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let fraction = entry.total / total;
            let segment = DonutSegment {
                label: entry.category.clone(),
                color: CHART_COLORS[index % CHART_COLORS.len()],
                percent: fraction * 100.0,
                dash: fraction * circumference,
                offset: start,
            };
            start += fraction * circumference;
            segment
        })
        .collect()
}

pub fn month_label(point: &TrendPoint) -> String {
    format!("{}-{:02}", point.month.year, point.month.month)
}

const TREND_PAD: f64 = 10.0;

pub fn trend_coords(trend: &[TrendPoint], width: f64, height: f64) -> Vec<(f64, f64)> {
    let max = trend.iter().map(|point| point.total).fold(0.0, f64::max);
    let span = width - 2.0 * TREND_PAD;
    trend
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let x = if trend.len() > 1 {
                TREND_PAD + span * index as f64 / (trend.len() - 1) as f64
            } else {
                width / 2.0
            };
            let y = if max > 0.0 {
                height - TREND_PAD - (point.total / max) * (height - 2.0 * TREND_PAD)
            } else {
                height - TREND_PAD
            };
            (x, y)
        })
        .collect()
}

pub fn polyline_path(coords: &[(f64, f64)]) -> String {
    coords
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn utilization_bar_class(utilization: f64) -> &'static str {
    if utilization > 100.0 {
        "bg-danger-500"
    } else if utilization > 80.0 {
        "bg-warning-500"
    } else {
        "bg-success-500"
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryDonutProps {
    pub breakdown: Vec<CategoryTotal>,
}

#[function_component(CategoryDonut)]
pub fn category_donut(props: &CategoryDonutProps) -> Html {
    let segments = donut_segments(&props.breakdown);
    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;

    html! {
        <div class="flex flex-col items-center gap-4">
            <svg class="w-48 h-48 transform -rotate-90" viewBox="0 0 96 96">
                <circle cx="48" cy="48" r={DONUT_RADIUS.to_string()} stroke="#e5e7eb" stroke-width="12" fill="transparent" />
                { for segments.iter().map(|segment| html! {
                    <circle
                        cx="48"
                        cy="48"
                        r={DONUT_RADIUS.to_string()}
                        stroke={segment.color}
                        stroke-width="12"
                        fill="transparent"
                        stroke-dasharray={format!("{:.2} {:.2}", segment.dash, circumference)}
                        stroke-dashoffset={format!("{:.2}", -segment.offset)}
                    />
                }) }
            </svg>
            <div class="flex flex-wrap justify-center gap-x-4 gap-y-1">
                { for segments.iter().map(|segment| html! {
                    <span class="flex items-center text-xs text-gray-600 dark:text-gray-400">
                        <span class="w-3 h-3 rounded-full inline-block mr-1" style={format!("background-color: {}", segment.color)}></span>
                        { format!("{} {:.0}%", segment.label, segment.percent) }
                    </span>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub trend: Vec<TrendPoint>,
}

#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let coords = trend_coords(&props.trend, 300.0, 160.0);

    html! {
        <div class="space-y-1">
            <svg class="w-full h-56" viewBox="0 0 300 160" preserveAspectRatio="none">
                <polyline
                    points={polyline_path(&coords)}
                    fill="none"
                    stroke="#3b82f6"
                    stroke-width="2"
                />
                { for coords.iter().zip(props.trend.iter()).map(|((x, y), point)| html! {
                    <circle cx={format!("{:.1}", x)} cy={format!("{:.1}", y)} r="4" fill="#3b82f6">
                        <title>{ format!("{}: {}", month_label(point), format_currency(point.total, "₹")) }</title>
                    </circle>
                }) }
            </svg>
            if let (Some(first), Some(last)) = (props.trend.first(), props.trend.last()) {
                <div class="flex justify-between text-xs text-gray-500 dark:text-gray-400">
                    <span>{ month_label(first) }</span>
                    if props.trend.len() > 1 {
                        <span>{ month_label(last) }</span>
                    }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrendMonth;

    fn category(name: &str, total: f64) -> CategoryTotal {
        CategoryTotal {
            category: name.to_string(),
            total,
        }
    }

    fn point(year: i32, month: u32, total: f64) -> TrendPoint {
        TrendPoint {
            month: TrendMonth { year, month },
            total,
        }
    }

    #[test]
    fn segments_cover_the_whole_ring() {
        let segments = donut_segments(&[category("Lunch", 300.0), category("Travel", 100.0)]);
        assert_eq!(segments.len(), 2);
        assert!((segments[0].percent - 75.0).abs() < 1e-9);
        assert!((segments[1].percent - 25.0).abs() < 1e-9);
        // the second arc starts where the first one ends
        assert!((segments[1].offset - segments[0].dash).abs() < 1e-9);
        let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
        let covered: f64 = segments.iter().map(|s| s.dash).sum();
        assert!((covered - circumference).abs() < 1e-9);
    }

    #[test]
    fn colors_cycle_past_the_palette() {
        let breakdown: Vec<CategoryTotal> = (0..10)
            .map(|i| category(&format!("c{i}"), 1.0))
            .collect();
        let segments = donut_segments(&breakdown);
        assert_eq!(segments[8].color, CHART_COLORS[0]);
        assert_eq!(segments[9].color, CHART_COLORS[1]);
    }

    #[test]
    fn zero_totals_produce_no_segments() {
        assert!(donut_segments(&[category("Lunch", 0.0)]).is_empty());
        assert!(donut_segments(&[]).is_empty());
    }

    #[test]
    fn trend_coords_span_the_padded_width() {
        let coords = trend_coords(
            &[point(2024, 5, 100.0), point(2024, 6, 50.0)],
            300.0,
            160.0,
        );
        assert_eq!(coords.len(), 2);
        assert!((coords[0].0 - 10.0).abs() < 1e-9);
        assert!((coords[1].0 - 290.0).abs() < 1e-9);
        // the larger value sits higher, meaning a smaller y
        assert!(coords[0].1 < coords[1].1);
    }

    #[test]
    fn a_single_point_is_centered() {
        let coords = trend_coords(&[point(2024, 6, 10.0)], 300.0, 160.0);
        assert_eq!(coords.len(), 1);
        assert!((coords[0].0 - 150.0).abs() < 1e-9);
    }

    #[test]
    fn flat_zero_trends_sit_on_the_baseline() {
        let coords = trend_coords(&[point(2024, 5, 0.0), point(2024, 6, 0.0)], 300.0, 160.0);
        assert!(coords.iter().all(|(_, y)| (*y - 150.0).abs() < 1e-9));
    }

    #[test]
    fn month_labels_are_zero_padded() {
        assert_eq!(month_label(&point(2024, 6, 0.0)), "2024-06");
        assert_eq!(month_label(&point(2024, 11, 0.0)), "2024-11");
    }

    #[test]
    fn polyline_path_joins_rounded_pairs() {
        let path = polyline_path(&[(10.0, 150.0), (290.0, 10.0)]);
        assert_eq!(path, "10.0,150.0 290.0,10.0");
    }

    #[test]
    fn utilization_bar_shifts_color_at_80_and_100_percent() {
        assert_eq!(utilization_bar_class(50.0), "bg-success-500");
        assert_eq!(utilization_bar_class(80.0), "bg-success-500");
        assert_eq!(utilization_bar_class(80.1), "bg-warning-500");
        assert_eq!(utilization_bar_class(100.0), "bg-warning-500");
        assert_eq!(utilization_bar_class(100.1), "bg-danger-500");
    }
}
