//! Horizontal bar chart markup.

use htmldom::Element;

const DEFAULT_COLOR: &str = "#818cf8";

#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub label: String,
    pub value: f64,
    /// Per-bar color, overriding the chart color.
    pub color: Option<String>,
}

impl BarEntry {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct BarChartOptions {
    pub color: Option<String>,
}

/// Render a bar chart into the container: one row per entry with the bar
/// width scaled to the maximum value. Empty data renders an empty-state
/// placeholder; a missing container is a silent no-op.
pub fn render_bar_chart(
    doc: &mut Element,
    container_id: &str,
    entries: &[BarEntry],
    options: &BarChartOptions,
) {
    let Some(container) = doc.find_mut(container_id) else {
        log::debug!("bar_chart: no container '{container_id}', skipping");
        return;
    };

    if entries.is_empty() {
        container.set_children(vec![Element::div()
            .class("empty-state")
            .child(Element::text("No data"))]);
        return;
    }

    let max = entries.iter().map(|e| e.value).fold(f64::MIN, f64::max);
    let chart_color = options.color.as_deref().unwrap_or(DEFAULT_COLOR);

    let mut chart = Element::div().class("bar-chart");
    for entry in entries {
        let pct = if max > 0.0 {
            100.0 * entry.value / max
        } else {
            0.0
        };
        let bar_color = entry.color.as_deref().unwrap_or(chart_color);
        chart = chart.child(
            Element::div()
                .class("bar-row")
                .child(
                    Element::span()
                        .class("bar-label")
                        .attr("title", &entry.label)
                        .child(Element::text(&entry.label)),
                )
                .child(Element::div().class("bar-track").child(
                    Element::div().class("bar-fill").attr(
                        "style",
                        format!("width:{}%;background:{bar_color}", format_number(pct)),
                    ),
                ))
                .child(
                    Element::span()
                        .class("bar-value")
                        .child(Element::text(format_number(entry.value))),
                ),
        );
    }

    container.set_children(vec![chart]);
}

/// Integer-valued floats print without a trailing `.0`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_values_drop_the_fraction() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(33.333), "33.3");
    }
}
