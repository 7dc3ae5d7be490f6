//! Dark color theme.

use jsontree::descriptor::Accent;
use jsontree::render::SpanKind;
use jsontree_term::{Color, Rgb};

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Rgb,
    pub surface: Rgb,
    pub selection: Rgb,
    pub foreground: Rgb,
    pub muted: Rgb,
    pub primary: Rgb,
    key: Rgb,
    string: Rgb,
    number: Rgb,
    boolean: Rgb,
    null: Rgb,
    punctuation: Rgb,
    affordance: Rgb,
    accents: [Rgb; 8],
}

impl Default for Theme {
    fn default() -> Self {
        let background = Color::oklch(0.18, 0.01, 270.0);
        let primary = Color::oklch(0.72, 0.14, 250.0);

        Self {
            background: background.to_rgb(),
            surface: background.lighten(0.05).to_rgb(),
            selection: background.mix(primary, 0.25).to_rgb(),
            foreground: Color::oklch(0.92, 0.01, 270.0).to_rgb(),
            muted: Color::oklch(0.6, 0.02, 270.0).to_rgb(),
            primary: primary.to_rgb(),
            key: Color::oklch(0.78, 0.11, 230.0).to_rgb(),
            string: Color::oklch(0.78, 0.14, 145.0).to_rgb(),
            number: Color::oklch(0.8, 0.13, 60.0).to_rgb(),
            boolean: Color::oklch(0.72, 0.15, 300.0).to_rgb(),
            null: Color::oklch(0.6, 0.02, 270.0).to_rgb(),
            punctuation: Color::oklch(0.68, 0.02, 270.0).to_rgb(),
            affordance: Color::oklch(0.82, 0.12, 90.0).to_rgb(),
            accents: [
                Color::oklch(0.75, 0.16, 145.0).to_rgb(),
                Color::oklch(0.7, 0.16, 300.0).to_rgb(),
                Color::oklch(0.7, 0.14, 250.0).to_rgb(),
                Color::oklch(0.85, 0.15, 95.0).to_rgb(),
                Color::oklch(0.75, 0.15, 350.0).to_rgb(),
                Color::oklch(0.75, 0.15, 55.0).to_rgb(),
                Color::oklch(0.65, 0.2, 25.0).to_rgb(),
                Color::oklch(0.6, 0.02, 270.0).to_rgb(),
            ],
        }
    }
}

impl Theme {
    pub fn span(&self, kind: SpanKind) -> Rgb {
        match kind {
            SpanKind::Key => self.key,
            SpanKind::Punctuation => self.punctuation,
            SpanKind::Null => self.null,
            SpanKind::Bool => self.boolean,
            SpanKind::Number => self.number,
            SpanKind::Text => self.string,
            SpanKind::Summary => self.muted,
            SpanKind::Affordance => self.affordance,
        }
    }

    pub fn accent(&self, accent: Accent) -> Rgb {
        let slot = match accent {
            Accent::Green => 0,
            Accent::Purple => 1,
            Accent::Blue => 2,
            Accent::Yellow => 3,
            Accent::Pink => 4,
            Accent::Orange => 5,
            Accent::Red => 6,
            Accent::Gray => 7,
        };
        self.accents[slot]
    }
}
