//! Continuous colormaps and value normalization

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use colorous::Gradient;

use crate::{defaults, ColoringError, Result, Rgba};

/// Named gradients, keyed by their lowercase matplotlib-style name
const GRADIENTS: &[(&str, Gradient)] = &[
    ("viridis", colorous::VIRIDIS),
    ("plasma", colorous::PLASMA),
    ("inferno", colorous::INFERNO),
    ("magma", colorous::MAGMA),
    ("cividis", colorous::CIVIDIS),
    ("turbo", colorous::TURBO),
    ("cubehelix", colorous::CUBEHELIX),
    ("warm", colorous::WARM),
    ("cool", colorous::COOL),
    ("rainbow", colorous::RAINBOW),
    ("sinebow", colorous::SINEBOW),
    ("greys", colorous::GREYS),
    ("blues", colorous::BLUES),
    ("greens", colorous::GREENS),
    ("oranges", colorous::ORANGES),
    ("purples", colorous::PURPLES),
    ("reds", colorous::REDS),
    ("rdbu", colorous::RED_BLUE),
    ("rdylbu", colorous::RED_YELLOW_BLUE),
    ("rdylgn", colorous::RED_YELLOW_GREEN),
    ("rdgy", colorous::RED_GREY),
    ("spectral", colorous::SPECTRAL),
    ("piyg", colorous::PINK_GREEN),
    ("prgn", colorous::PURPLE_GREEN),
    ("brbg", colorous::BROWN_GREEN),
    ("puor", colorous::PURPLE_ORANGE),
];

/// Maps a normalized value in [0, 1] to a color
#[derive(Clone)]
pub enum Colormap {
    /// One of the built-in gradients, optionally reversed
    Gradient {
        name: &'static str,
        gradient: Gradient,
        reversed: bool,
    },

    /// A fixed list of colors, each covering an equal slice of [0, 1]
    Listed(ListedColormap),

    /// Caller-supplied mapping
    Custom(Arc<dyn Fn(f64) -> Rgba + Send + Sync>),
}

impl Colormap {
    pub fn viridis() -> Self {
        Colormap::Gradient {
            name: "viridis",
            gradient: colorous::VIRIDIS,
            reversed: false,
        }
    }

    /// Wrap a closure as a colormap. It receives values already clamped to [0, 1].
    pub fn custom(f: impl Fn(f64) -> Rgba + Send + Sync + 'static) -> Self {
        Colormap::Custom(Arc::new(f))
    }

    /// Names accepted by [`Colormap::from_str`], without the `_r` variants
    pub fn names() -> impl Iterator<Item = &'static str> {
        GRADIENTS
            .iter()
            .map(|(name, _)| *name)
            .chain(["phase", "phase_light"])
    }

    pub fn name(&self) -> &str {
        match self {
            Colormap::Gradient { name, .. } => *name,
            Colormap::Listed(listed) => listed.name.as_str(),
            Colormap::Custom(_) => "custom",
        }
    }

    /// Color at `t`. Values outside [0, 1] take the end colors; NaN is
    /// transparent.
    pub fn rgba(&self, t: f64) -> Rgba {
        if t.is_nan() {
            return Rgba::TRANSPARENT;
        }
        let t = t.clamp(0.0, 1.0);

        match self {
            Colormap::Gradient { gradient, reversed, .. } => {
                let t = if *reversed { 1.0 - t } else { t };
                gradient.eval_continuous(t).into()
            }
            Colormap::Listed(listed) => listed.rgba(t),
            Colormap::Custom(f) => f(t),
        }
    }

    /// Normalize `value` and look up its color
    pub fn map(&self, value: f64, norm: &Normalize) -> Rgba {
        self.rgba(norm.apply(value))
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Colormap::viridis()
    }
}

impl fmt::Debug for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colormap::Gradient { name, reversed, .. } => f
                .debug_struct("Gradient")
                .field("name", name)
                .field("reversed", reversed)
                .finish(),
            Colormap::Listed(listed) => f.debug_tuple("Listed").field(listed).finish(),
            Colormap::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl FromStr for Colormap {
    type Err = ColoringError;

    /// Case-insensitive lookup. A `_r` suffix reverses a gradient.
    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        let lower = name.to_ascii_lowercase();
        let (base, reversed) = match lower.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (lower.as_str(), false),
        };

        if let Some((known, gradient)) = GRADIENTS.iter().find(|(n, _)| *n == base) {
            return Ok(Colormap::Gradient {
                name: *known,
                gradient: *gradient,
                reversed,
            });
        }

        let listed = match base {
            "phase" => defaults::phase(),
            "phase_light" => defaults::phase_light(),
            _ => return Err(ColoringError::UnknownColormap(name.to_string())),
        };
        Ok(Colormap::Listed(if reversed { listed.reversed() } else { listed }))
    }
}

/// Colormap built from a discrete list of colors
#[derive(Debug, Clone, PartialEq)]
pub struct ListedColormap {
    pub name: String,
    pub colors: Vec<Rgba>,
}

impl ListedColormap {
    pub fn new(name: impl Into<String>, colors: Vec<Rgba>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Build from hex strings such as `"#1b9e77"`
    pub fn from_hex(name: impl Into<String>, hex: &[&str]) -> Result<Self> {
        let colors = hex
            .iter()
            .map(|h| Rgba::from_hex(h))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(name, colors))
    }

    /// Same colors in reverse order, with an `_r` name
    pub fn reversed(&self) -> Self {
        Self {
            name: format!("{}_r", self.name),
            colors: self.colors.iter().rev().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of the bin containing `t` (clamped to [0, 1])
    pub fn rgba(&self, t: f64) -> Rgba {
        let n = self.colors.len();
        if n == 0 || t.is_nan() {
            return Rgba::TRANSPARENT;
        }
        let index = ((t.clamp(0.0, 1.0) * n as f64) as usize).min(n - 1);
        self.colors[index]
    }
}

impl From<ListedColormap> for Colormap {
    fn from(listed: ListedColormap) -> Self {
        Colormap::Listed(listed)
    }
}

/// Linear map from `[vmin, vmax]` to `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub vmin: f64,
    pub vmax: f64,
}

impl Normalize {
    /// Limits must be finite with `vmin <= vmax`
    pub fn new(vmin: f64, vmax: f64) -> Result<Self> {
        if !vmin.is_finite() || !vmax.is_finite() || vmin > vmax {
            return Err(ColoringError::InvalidLimits { vmin, vmax });
        }
        Ok(Self { vmin, vmax })
    }

    /// Limits spanning the finite entries of `values`, if there are any
    pub fn from_values(values: &[f64]) -> Option<Self> {
        values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })
            .map(|(vmin, vmax)| Self { vmin, vmax })
    }

    /// Normalized value. Not clipped; a degenerate range maps everything to 0.
    pub fn apply(&self, value: f64) -> f64 {
        if self.vmin == self.vmax {
            return 0.0;
        }
        (value - self.vmin) / (self.vmax - self.vmin)
    }
}
