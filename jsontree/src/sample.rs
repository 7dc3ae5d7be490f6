//! Static demo data: a sample website-quality report, the description of its
//! schema and the illustrated workflow steps.
//!
//! Nothing here is computed; the report is hand-written and only its URL and
//! timestamp vary.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::descriptor::Status;
use crate::error::ValueError;
use crate::model::{Map, Value};

/// Quick-pick URLs offered by the demo.
pub const EXAMPLE_URLS: [&str; 3] = [
    "https://stripe.com",
    "https://linear.app",
    "https://vercel.com",
];

/// URL used when the demo is started without one.
pub const DEFAULT_URL: &str = "https://example-website.com";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub url: String,
    pub timestamp: String,
    pub overall_score: u32,
    pub capture_data: CaptureData,
    pub categories: Vec<Category>,
}

impl AnalysisReport {
    pub fn to_value(&self) -> Result<Value, ValueError> {
        Value::from_serialize(self)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureData {
    pub screenshots: Screenshots,
    pub lighthouse: Lighthouse,
    pub metadata: PageMetadata,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screenshots {
    pub desktop: String,
    pub mobile: String,
    pub full_page: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lighthouse {
    pub performance: u32,
    pub accessibility: u32,
    pub best_practices: u32,
    pub seo: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub load_time: f64,
    pub dom_elements: u32,
    pub css_files: u32,
    pub js_files: u32,
    pub images: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub name: String,
    pub score: u32,
    pub status: Status,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub criterion: String,
    pub status: Status,
    pub reasoning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// One node of the illustrated capture workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowStep {
    pub id: &'static str,
    pub name: &'static str,
    /// Step type tag, see [`crate::descriptor::StepKind`].
    pub kind: &'static str,
    pub description: &'static str,
}

/// Builds the sample report for `url`, stamped with `timestamp`.
pub fn sample_report(url: &str, timestamp: DateTime<Utc>) -> AnalysisReport {
    AnalysisReport {
        url: url.to_string(),
        timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        overall_score: 78,
        capture_data: CaptureData {
            screenshots: Screenshots {
                desktop: "captured".into(),
                mobile: "captured".into(),
                full_page: "captured".into(),
            },
            lighthouse: Lighthouse {
                performance: 85,
                accessibility: 72,
                best_practices: 90,
                seo: 88,
            },
            metadata: PageMetadata {
                title: "Example Website - Modern Solutions".into(),
                description: "A modern website showcasing quality design".into(),
                load_time: 2.4,
                dom_elements: 1247,
                css_files: 4,
                js_files: 12,
                images: 23,
            },
        },
        categories: categories(),
    }
}

fn finding(
    criterion: &str,
    status: Status,
    reasoning: &str,
    recommendation: Option<&str>,
) -> Finding {
    Finding {
        criterion: criterion.into(),
        status,
        reasoning: reasoning.into(),
        recommendation: recommendation.map(Into::into),
    }
}

fn category(name: &str, score: u32, status: Status, findings: Vec<Finding>) -> Category {
    Category {
        name: name.into(),
        score,
        status,
        findings,
    }
}

fn categories() -> Vec<Category> {
    use Status::{Fail, Pass, Warning};

    vec![
        category(
            "Layout & Grid",
            85,
            Pass,
            vec![
                finding(
                    "Consistent grid system",
                    Pass,
                    "12-column grid detected with consistent gutters throughout",
                    None,
                ),
                finding(
                    "Visual hierarchy",
                    Pass,
                    "Clear content hierarchy with proper section separation",
                    None,
                ),
                finding(
                    "Content alignment",
                    Warning,
                    "Minor alignment inconsistencies in footer section",
                    Some("Align footer columns to match main grid"),
                ),
            ],
        ),
        category(
            "Spacing & Consistency",
            72,
            Warning,
            vec![
                finding(
                    "Consistent margins",
                    Warning,
                    "Detected 5 different margin values where 3 would suffice",
                    Some("Establish a spacing scale (8, 16, 24, 32, 48px)"),
                ),
                finding(
                    "Padding consistency",
                    Pass,
                    "Card padding is consistent across all components",
                    None,
                ),
                finding(
                    "Vertical rhythm",
                    Warning,
                    "Line heights vary inconsistently between sections",
                    None,
                ),
            ],
        ),
        category(
            "Typography",
            90,
            Pass,
            vec![
                finding(
                    "Font hierarchy",
                    Pass,
                    "Clear hierarchy with H1-H6 properly sized and weighted",
                    None,
                ),
                finding(
                    "Readability",
                    Pass,
                    "Body text at 16px with 1.6 line-height ensures readability",
                    None,
                ),
                finding(
                    "Font pairing",
                    Pass,
                    "Sans-serif heading + body combination is harmonious",
                    None,
                ),
            ],
        ),
        category(
            "Color System",
            82,
            Pass,
            vec![
                finding(
                    "Color consistency",
                    Pass,
                    "Limited palette of 5 colors used consistently",
                    None,
                ),
                finding(
                    "Contrast ratios",
                    Warning,
                    "Some gray text on white fails WCAG AA",
                    Some("Darken secondary text to #666 minimum"),
                ),
                finding(
                    "Brand alignment",
                    Pass,
                    "Primary colors align with logo and brand guidelines",
                    None,
                ),
            ],
        ),
        category(
            "UI Components",
            88,
            Pass,
            vec![
                finding(
                    "Button consistency",
                    Pass,
                    "All buttons follow same style with proper hover states",
                    None,
                ),
                finding(
                    "Form elements",
                    Pass,
                    "Inputs have consistent styling and focus states",
                    None,
                ),
                finding(
                    "Card design",
                    Pass,
                    "Cards use consistent shadows, borders, and padding",
                    None,
                ),
            ],
        ),
        category(
            "Navigation",
            75,
            Warning,
            vec![
                finding(
                    "Menu clarity",
                    Pass,
                    "Primary navigation is clear with 5 main items",
                    None,
                ),
                finding(
                    "Mobile menu",
                    Warning,
                    "Hamburger menu lacks animation, feels abrupt",
                    Some("Add slide-in animation for mobile menu"),
                ),
                finding(
                    "Active states",
                    Warning,
                    "Current page indicator is subtle, may be missed",
                    None,
                ),
            ],
        ),
        category(
            "Accessibility",
            68,
            Warning,
            vec![
                finding(
                    "Alt text",
                    Fail,
                    "7 of 23 images missing alt text",
                    Some("Add descriptive alt text to all meaningful images"),
                ),
                finding(
                    "Keyboard navigation",
                    Warning,
                    "Focus order mostly logical but modal traps focus",
                    None,
                ),
                finding(
                    "ARIA labels",
                    Pass,
                    "Interactive elements have appropriate ARIA labels",
                    None,
                ),
            ],
        ),
        category(
            "Responsiveness",
            80,
            Pass,
            vec![
                finding(
                    "Breakpoints",
                    Pass,
                    "Responsive at 768px, 1024px, and 1280px breakpoints",
                    None,
                ),
                finding(
                    "Touch targets",
                    Warning,
                    "Some buttons under 44px tap target on mobile",
                    Some("Increase mobile button padding"),
                ),
                finding(
                    "Content reflow",
                    Pass,
                    "Content stacks properly without horizontal scroll",
                    None,
                ),
            ],
        ),
        category(
            "Performance",
            70,
            Warning,
            vec![
                finding(
                    "Load time",
                    Warning,
                    "2.4s load time exceeds 2s target",
                    Some("Optimize images and defer non-critical JS"),
                ),
                finding(
                    "Core Web Vitals",
                    Warning,
                    "LCP at 2.8s, CLS at 0.15 need improvement",
                    None,
                ),
                finding(
                    "Asset optimization",
                    Pass,
                    "Images are WebP format with proper sizing",
                    None,
                ),
            ],
        ),
        category(
            "Content Quality",
            85,
            Pass,
            vec![
                finding("Copy clarity", Pass, "Headlines are clear and action-oriented", None),
                finding("CTA effectiveness", Pass, "CTAs are prominent with compelling copy", None),
                finding(
                    "Content structure",
                    Pass,
                    "Logical flow from problem to solution to action",
                    None,
                ),
            ],
        ),
        category(
            "Motion & Interactions",
            65,
            Warning,
            vec![
                finding("Hover states", Pass, "All interactive elements have hover feedback", None),
                finding(
                    "Transitions",
                    Warning,
                    "Some transitions are too fast (under 150ms)",
                    Some("Use 200-300ms for smoother feel"),
                ),
                finding(
                    "Reduced motion",
                    Fail,
                    "No prefers-reduced-motion media query detected",
                    Some("Add reduced motion support for accessibility"),
                ),
            ],
        ),
    ]
}

/// The ten illustrated workflow steps, in execution order.
pub fn workflow_steps() -> &'static [WorkflowStep] {
    const STEPS: [WorkflowStep; 10] = [
        WorkflowStep {
            id: "input",
            name: "URL Input",
            kind: "trigger",
            description: "Webhook receives URL from user",
        },
        WorkflowStep {
            id: "validate",
            name: "Validate URL",
            kind: "code",
            description: "Sanitize and validate URL format",
        },
        WorkflowStep {
            id: "screenshot-desktop",
            name: "Desktop Screenshot",
            kind: "http",
            description: "Screenshot API @ 1920x1080",
        },
        WorkflowStep {
            id: "screenshot-mobile",
            name: "Mobile Screenshot",
            kind: "http",
            description: "Screenshot API @ 375x812",
        },
        WorkflowStep {
            id: "lighthouse",
            name: "Lighthouse Audit",
            kind: "http",
            description: "PageSpeed Insights API",
        },
        WorkflowStep {
            id: "html-capture",
            name: "HTML Capture",
            kind: "http",
            description: "Fetch rendered DOM structure",
        },
        WorkflowStep {
            id: "merge",
            name: "Merge Data",
            kind: "merge",
            description: "Combine all capture results",
        },
        WorkflowStep {
            id: "ai-analysis",
            name: "Vision Model Analysis",
            kind: "ai",
            description: "Analyze against quality checklist",
        },
        WorkflowStep {
            id: "format",
            name: "Format JSON",
            kind: "code",
            description: "Structure final report schema",
        },
        WorkflowStep {
            id: "output",
            name: "Return Report",
            kind: "respond",
            description: "Send JSON response to webhook",
        },
    ];
    &STEPS
}

/// Field-by-field description of the report format.
pub fn output_schema() -> Value {
    let finding = object([
        ("criterion", text("string - What was checked")),
        ("status", text("enum: pass | warning | fail")),
        ("reasoning", text("string - AI explanation")),
        ("recommendation", text("string? - How to fix (if not pass)")),
    ]);
    let category = object([
        ("name", text("string - Category name from checklist")),
        ("score", text("number (0-100) - Category score")),
        ("status", text("enum: pass | warning | fail")),
        ("findings", Value::Sequence(vec![finding])),
    ]);

    object([
        ("url", text("string - The analyzed URL")),
        ("timestamp", text("ISO 8601 - When analysis was performed")),
        ("overallScore", text("number (0-100) - Weighted average of all categories")),
        (
            "captureData",
            object([
                (
                    "screenshots",
                    object([
                        ("desktop", text("string - Base64 or URL of desktop screenshot")),
                        ("mobile", text("string - Base64 or URL of mobile screenshot")),
                        ("fullPage", text("string - Base64 or URL of full page capture")),
                        ],
                    ),
                ),
                (
                    "lighthouse",
                    object([
                        ("performance", text("number (0-100)")),
                        ("accessibility", text("number (0-100)")),
                        ("bestPractices", text("number (0-100)")),
                        ("seo", text("number (0-100)")),
                        ],
                    ),
                ),
                (
                    "metadata",
                    object([
                        ("title", text("string - Page title")),
                        ("description", text("string - Meta description")),
                        ("loadTime", text("number - Seconds to load")),
                        ("domElements", text("number - Total DOM nodes")),
                        ("cssFiles", text("number - External stylesheets")),
                        ("jsFiles", text("number - External scripts")),
                        ("images", text("number - Total images")),
                        ],
                    ),
                ),
                ],
            ),
        ),
        ("categories", Value::Sequence(vec![category])),
    ])
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn object<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Mapping(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<Map>(),
    )
}
