#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Raises lightness by `amount` (0.0-1.0 in Oklch space).
    pub fn lighten(self, amount: f32) -> Self {
        let (l, c, h) = self.to_oklch();
        Self::oklch((l + amount).clamp(0.0, 1.0), c, h)
    }

    pub fn darken(self, amount: f32) -> Self {
        self.lighten(-amount)
    }

    /// Blends toward `other`; `amount` 0.0 keeps `self`, 1.0 gives `other`.
    pub fn mix(self, other: Color, amount: f32) -> Self {
        use palette::{Mix, Oklab};

        let a: Oklab = oklab(self);
        let b: Oklab = oklab(other);
        let mixed = a.mix(b, amount.clamp(0.0, 1.0));
        let rgb = srgb_from(mixed);
        Self::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Rgb { r, g, b } => Rgb::new(r, g, b),
            Self::Oklch { l, c, h } => oklch_to_rgb(l, c, h),
        }
    }

    fn to_oklch(self) -> (f32, f32, f32) {
        use palette::{IntoColor, Oklch, Srgb};

        match self {
            Self::Oklch { l, c, h } => (l, c, h),
            Self::Rgb { r, g, b } => {
                let oklch: Oklch = Srgb::new(r, g, b).into_format::<f32>().into_color();
                (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
            }
        }
    }
}

fn oklab(color: Color) -> palette::Oklab {
    use palette::{IntoColor, Oklch};

    let (l, c, h) = color.to_oklch();
    Oklch::new(l, c, h).into_color()
}

fn srgb_from(oklab: palette::Oklab) -> Rgb {
    use palette::{IntoColor, Srgb};

    let srgb: Srgb = oklab.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
