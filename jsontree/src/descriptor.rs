//! Display descriptors for workflow step types, finding statuses and report
//! categories.
//!
//! Every lookup is lenient: an unknown tag maps to a designated default
//! instead of failing.

/// Named palette slot. Front-ends decide the concrete color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Green,
    Purple,
    Blue,
    Yellow,
    Pink,
    Orange,
    Red,
    Gray,
}

/// How a tag is shown: a one-cell glyph, a label and an accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub glyph: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

/// Kind of node in the illustrated capture workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Trigger,
    Code,
    Http,
    Merge,
    Ai,
    Respond,
}

impl StepKind {
    pub const ALL: [StepKind; 6] = [
        StepKind::Trigger,
        StepKind::Code,
        StepKind::Http,
        StepKind::Merge,
        StepKind::Ai,
        StepKind::Respond,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "trigger" => Some(Self::Trigger),
            "code" => Some(Self::Code),
            "http" => Some(Self::Http),
            "merge" => Some(Self::Merge),
            "ai" => Some(Self::Ai),
            "respond" => Some(Self::Respond),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Trigger => "trigger",
            Self::Code => "code",
            Self::Http => "http",
            Self::Merge => "merge",
            Self::Ai => "ai",
            Self::Respond => "respond",
        }
    }

    pub fn descriptor(self) -> &'static Descriptor {
        match self {
            Self::Trigger => &TRIGGER,
            Self::Code => &CODE,
            Self::Http => &HTTP,
            Self::Merge => &MERGE,
            Self::Ai => &AI,
            Self::Respond => &RESPOND,
        }
    }
}

const TRIGGER: Descriptor = Descriptor {
    glyph: "⚡",
    label: "Trigger",
    accent: Accent::Green,
};
const CODE: Descriptor = Descriptor {
    glyph: "λ",
    label: "Code",
    accent: Accent::Purple,
};
const HTTP: Descriptor = Descriptor {
    glyph: "⇄",
    label: "HTTP",
    accent: Accent::Blue,
};
const MERGE: Descriptor = Descriptor {
    glyph: "⑂",
    label: "Merge",
    accent: Accent::Yellow,
};
const AI: Descriptor = Descriptor {
    glyph: "✦",
    label: "AI",
    accent: Accent::Pink,
};
const RESPOND: Descriptor = Descriptor {
    glyph: "➤",
    label: "Respond",
    accent: Accent::Orange,
};

/// Descriptor for a step type tag; unknown tags get the `code` descriptor.
pub fn step_descriptor(tag: &str) -> &'static Descriptor {
    StepKind::from_tag(tag).unwrap_or(StepKind::Code).descriptor()
}

/// Outcome of a single check in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Warning,
    Fail,
}

impl Status {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "pass" => Some(Self::Pass),
            "warning" => Some(Self::Warning),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }

    pub fn descriptor(self) -> &'static Descriptor {
        match self {
            Self::Pass => &PASS,
            Self::Warning => &WARNING,
            Self::Fail => &FAIL,
        }
    }
}

const PASS: Descriptor = Descriptor {
    glyph: "✔",
    label: "pass",
    accent: Accent::Green,
};
const WARNING: Descriptor = Descriptor {
    glyph: "⚠",
    label: "warning",
    accent: Accent::Yellow,
};
const FAIL: Descriptor = Descriptor {
    glyph: "✖",
    label: "fail",
    accent: Accent::Red,
};
const UNKNOWN_STATUS: Descriptor = Descriptor {
    glyph: "·",
    label: "unknown",
    accent: Accent::Gray,
};

/// Descriptor for a status tag; unknown tags get a neutral descriptor.
pub fn status_descriptor(tag: &str) -> &'static Descriptor {
    Status::from_tag(tag).map_or(&UNKNOWN_STATUS, Status::descriptor)
}

/// Glyph for a report category name, `•` for anything unlisted.
pub fn category_glyph(name: &str) -> &'static str {
    match name {
        "Layout & Grid" => "▦",
        "Spacing & Consistency" => "↔",
        "Typography" => "T",
        "Color System" => "◐",
        "UI Components" => "◫",
        "Navigation" => "☰",
        "Accessibility" => "♿",
        "Responsiveness" => "▯",
        "Performance" => "⚡",
        "Content Quality" => "¶",
        "Motion & Interactions" => "✧",
        _ => "•",
    }
}

/// Accent for a 0–100 score.
pub fn score_accent(score: f64) -> Accent {
    if score >= 80.0 {
        Accent::Green
    } else if score >= 60.0 {
        Accent::Yellow
    } else {
        Accent::Red
    }
}
