//! Attribute strings for the SVG elements.

use crate::graph::{LabelStyle, LineStyle};

/// The ten-colour categorical palette (d3 `schemeCategory10`).
const CATEGORY10: [&str; 10] = [
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

const HALO: &str = "-2px -2px 0 #fff, 2px -2px 0 #fff, -2px 2px 0 #fff, 2px 2px 0 #fff";

/// Label text colour, stable per node for the life of a scene.
pub fn label_fill(node: usize) -> &'static str {
	CATEGORY10[node % CATEGORY10.len()]
}

pub fn coord(v: f64) -> String {
	format!("{v:.2}")
}

pub fn label_css(style: LabelStyle) -> String {
	format!(
		"opacity: {}; font-size: {}px; font-weight: {}; text-shadow: {}; cursor: pointer;",
		style.opacity,
		style.font_size_px,
		if style.bold { "bold" } else { "normal" },
		if style.halo { HALO } else { "none" },
	)
}

pub fn line_css(style: LineStyle) -> String {
	format!("stroke: {}; stroke-width: {}px;", style.stroke, style.width_px)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn connected_labels_are_bold_with_halo() {
		let css = label_css(LabelStyle::CONNECTED);
		assert!(css.starts_with("opacity: 1; font-size: 18px; font-weight: bold;"));
		assert!(css.contains(HALO));
	}

	#[test]
	fn faded_labels_are_plain() {
		assert_eq!(
			label_css(LabelStyle::FADED),
			"opacity: 0.5; font-size: 16px; font-weight: normal; text-shadow: none; cursor: pointer;"
		);
	}

	#[test]
	fn line_styles() {
		assert_eq!(line_css(LineStyle::NEUTRAL), "stroke: #ccc; stroke-width: 1px;");
		assert_eq!(line_css(LineStyle::HIGHLIGHTED), "stroke: #333; stroke-width: 2px;");
	}

	#[test]
	fn palette_wraps() {
		assert_eq!(label_fill(0), label_fill(CATEGORY10.len()));
		assert_eq!(label_fill(3), "#d62728");
		assert_ne!(label_fill(0), label_fill(1));
	}

	#[test]
	fn coordinates_use_two_decimals() {
		assert_eq!(coord(12.3456), "12.35");
		assert_eq!(coord(-0.5), "-0.50");
	}
}
