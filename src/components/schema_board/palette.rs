//! Swatch colors for subgraphs.
//!
//! Each subgraph gets a vivid color at creation time. Colors come from a
//! golden-angle walk around the hue wheel so successive swatches land far
//! apart and stay distinguishable even with many subgraphs.

/// RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Construct from raw channel values.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Construct from hue (degrees, any value), saturation and lightness
	/// (both 0.0 to 1.0).
	pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
		let h = h.rem_euclid(360.0);
		let s = s.clamp(0.0, 1.0);
		let l = l.clamp(0.0, 1.0);

		let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
		let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
		let m = l - c / 2.0;

		let (r1, g1, b1) = match (h / 60.0) as u32 {
			0 => (c, x, 0.0),
			1 => (x, c, 0.0),
			2 => (0.0, c, x),
			3 => (0.0, x, c),
			4 => (x, 0.0, c),
			_ => (c, 0.0, x),
		};

		Self {
			r: ((r1 + m) * 255.0).round() as u8,
			g: ((g1 + m) * 255.0).round() as u8,
			b: ((b1 + m) * 255.0).round() as u8,
		}
	}

	/// CSS hex form, e.g. `#5e81ac`.
	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Angle between successive hues, in degrees. The golden angle never revisits
/// a hue, so every generated swatch is distinct.
const GOLDEN_ANGLE: f64 = 137.50776405003785;

/// Produces a stream of vivid, well-separated swatch colors.
///
/// Deterministic for a given seed hue; the component seeds it randomly once
/// per session so different sessions get different swatches.
#[derive(Clone, Debug)]
pub struct SwatchGenerator {
	hue: f64,
	count: usize,
}

impl SwatchGenerator {
	/// Start the hue walk at `seed_hue` degrees (any value, wrapped mod 360).
	pub fn new(seed_hue: f64) -> Self {
		Self {
			hue: seed_hue.rem_euclid(360.0),
			count: 0,
		}
	}

	/// Next swatch color. Saturation and lightness cycle through a short
	/// sequence so neighbouring swatches differ even at similar hues.
	pub fn next_swatch(&mut self) -> Color {
		const SATURATION: [f64; 3] = [0.72, 0.62, 0.80];
		const LIGHTNESS: [f64; 3] = [0.55, 0.65, 0.48];

		let color = Color::from_hsl(
			self.hue,
			SATURATION[self.count % SATURATION.len()],
			LIGHTNESS[self.count % LIGHTNESS.len()],
		);
		self.hue = (self.hue + GOLDEN_ANGLE).rem_euclid(360.0);
		self.count += 1;
		color
	}
}
