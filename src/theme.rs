//! Explicit theme color resolution
//!
//! No ambient theme state: the compositor receives a dark/light boolean each
//! frame and resolves gradient stop colors through [`resolve`].

/// A color with 8-bit channels and a unit-interval alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with the alpha multiplied by `a`
    pub fn faded(self, a: f32) -> Self {
        Self {
            a: (self.a * a).clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(...)` string for canvas gradient stops
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

/// Named palette slots used by the layer gradient stop tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    /// Bright inner-core tint
    Core,
    /// Main body tint
    Body,
    /// Outer ambient glow
    Halo,
    /// Drifting mid-tone accent
    Flow,
    /// First satellite accent
    Accent,
    /// Second satellite accent
    Mist,
}

/// Resolve a palette slot for the current theme.
///
/// Dark theme leans into saturated violets and blues over a near-black page;
/// light theme uses softer pastels that survive a white background.
pub fn resolve(key: ColorKey, dark: bool) -> Rgba {
    if dark {
        match key {
            ColorKey::Core => Rgba::opaque(196, 181, 253),
            ColorKey::Body => Rgba::opaque(139, 92, 246),
            ColorKey::Halo => Rgba::opaque(76, 29, 149),
            ColorKey::Flow => Rgba::opaque(59, 130, 246),
            ColorKey::Accent => Rgba::opaque(45, 212, 191),
            ColorKey::Mist => Rgba::opaque(244, 114, 182),
        }
    } else {
        match key {
            ColorKey::Core => Rgba::opaque(167, 139, 250),
            ColorKey::Body => Rgba::opaque(124, 58, 237),
            ColorKey::Halo => Rgba::opaque(196, 181, 253),
            ColorKey::Flow => Rgba::opaque(96, 165, 250),
            ColorKey::Accent => Rgba::opaque(94, 234, 212),
            ColorKey::Mist => Rgba::opaque(249, 168, 212),
        }
    }
}
