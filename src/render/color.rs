use crate::error::{SvgViewError, SvgViewResult};

/// Default toggle fill while the widget is paused (soft translucent green).
pub const DEFAULT_PLAY_COLOR: Color = Color::rgba(52.0 / 255.0, 199.0 / 255.0, 89.0 / 255.0, 0.8);
/// Default toggle fill while the widget is playing (warm translucent amber).
pub const DEFAULT_PAUSE_COLOR: Color = Color::rgba(1.0, 149.0 / 255.0, 0.0, 0.8);
/// Default restart button fill (translucent violet).
pub const DEFAULT_RESTART_COLOR: Color =
    Color::rgba(88.0 / 255.0, 86.0 / 255.0, 214.0 / 255.0, 0.8);

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    pub fn validate(self) -> SvgViewResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SvgViewError::InvalidData(format!(
                    "channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Parses the CSS color forms accepted in host payloads.
    ///
    /// Supported: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
    /// `rgba(r, g, b, a)` with integer 0..=255 channels and a 0..=1 alpha.
    pub fn parse_css(input: &str) -> SvgViewResult<Self> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::parse_hex(hex, input);
        }
        if let Some(body) = trimmed
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_rgb_body(body, true, input);
        }
        if let Some(body) = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_rgb_body(body, false, input);
        }
        Err(SvgViewError::InvalidData(format!(
            "unrecognized color form `{input}`"
        )))
    }

    fn parse_hex(hex: &str, original: &str) -> SvgViewResult<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SvgViewError::InvalidData(format!(
                "non-hex digit in `{original}`"
            )));
        }
        let pair = |index: usize| -> u8 {
            u8::from_str_radix(&hex[index..index + 2], 16).unwrap_or(0)
        };
        match hex.len() {
            3 => {
                let nibble = |index: usize| -> u8 {
                    let value = u8::from_str_radix(&hex[index..index + 1], 16).unwrap_or(0);
                    value * 17
                };
                Ok(Self::from_rgba8(nibble(0), nibble(1), nibble(2), 1.0))
            }
            6 => Ok(Self::from_rgba8(pair(0), pair(2), pair(4), 1.0)),
            8 => Ok(Self::from_rgba8(
                pair(0),
                pair(2),
                pair(4),
                f64::from(pair(6)) / 255.0,
            )),
            _ => Err(SvgViewError::InvalidData(format!(
                "hex color `{original}` must have 3, 6 or 8 digits"
            ))),
        }
    }

    fn parse_rgb_body(body: &str, with_alpha: bool, original: &str) -> SvgViewResult<Self> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(SvgViewError::InvalidData(format!(
                "`{original}` must have exactly {expected} components"
            )));
        }

        let channel = |part: &str| -> SvgViewResult<u8> {
            part.parse::<u8>().map_err(|_| {
                SvgViewError::InvalidData(format!(
                    "channel `{part}` in `{original}` must be an integer in 0..=255"
                ))
            })
        };
        let red = channel(parts[0])?;
        let green = channel(parts[1])?;
        let blue = channel(parts[2])?;

        let alpha = if with_alpha {
            let value: f64 = parts[3].parse().map_err(|_| {
                SvgViewError::InvalidData(format!(
                    "alpha `{}` in `{original}` must be a number",
                    parts[3]
                ))
            })?;
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SvgViewError::InvalidData(format!(
                    "alpha `{value}` in `{original}` must be in [0, 1]"
                )));
            }
            value
        } else {
            1.0
        };

        Ok(Self::from_rgba8(red, green, blue, alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, DEFAULT_PLAY_COLOR};

    #[test]
    fn parses_rgba_function_form() {
        let color = Color::parse_css("rgba(52, 199, 89, 0.8)").expect("valid rgba");
        assert_eq!(color, DEFAULT_PLAY_COLOR);
    }

    #[test]
    fn parses_hex_forms() {
        let long = Color::parse_css("#ff6b6b").expect("six digits");
        assert!((long.red - 1.0).abs() < 1e-12);
        assert_eq!(long.alpha, 1.0);

        let short = Color::parse_css("#f00").expect("three digits");
        assert_eq!(short, Color::rgb(1.0, 0.0, 0.0));

        let with_alpha = Color::parse_css("#ff6b6b80").expect("eight digits");
        assert!((with_alpha.alpha - f64::from(0x80u8) / 255.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_junk() {
        for input in ["", "red-ish", "#12345", "rgb(1,2)", "rgba(1,2,3,4,5)", "rgba(300,0,0,0.5)", "rgba(0,0,0,1.5)"] {
            assert!(Color::parse_css(input).is_err(), "`{input}` should be rejected");
        }
    }

    #[test]
    fn validate_rejects_out_of_range_channels() {
        assert!(Color::rgba(1.2, 0.0, 0.0, 1.0).validate().is_err());
        assert!(Color::rgba(0.2, 0.0, 0.0, f64::NAN).validate().is_err());
        assert!(Color::rgb(0.1, 0.5, 0.9).validate().is_ok());
    }
}
