//! Presentation rules for rendered guides
//!
//! Heading styles are a lookup table keyed by level. Icons are chosen by
//! ordered substring rules over free-form titles: the first matching rule
//! wins and a default covers everything else. None of this feeds back into
//! the document model.

use regex::Regex;
use std::sync::LazyLock;

static EXAMPLE_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*.*?\*\*:").unwrap());

/// How a content heading of a given level is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingStyle {
    /// HTML element name
    pub element: &'static str,
    /// CSS class
    pub class: &'static str,
    /// Whether a heading icon is shown before the text
    pub with_icon: bool,
}

const HEADING_STYLES: &[(usize, HeadingStyle)] = &[
    (
        1,
        HeadingStyle {
            element: "h1",
            class: "heading-title",
            with_icon: false,
        },
    ),
    (
        2,
        HeadingStyle {
            element: "h2",
            class: "heading-major",
            with_icon: false,
        },
    ),
    (
        3,
        HeadingStyle {
            element: "h3",
            class: "heading-topic",
            with_icon: true,
        },
    ),
    (
        4,
        HeadingStyle {
            element: "h4",
            class: "heading-detail",
            with_icon: false,
        },
    ),
];

const DEFAULT_HEADING_CLASS: &str = "heading-minor";

/// Look up the style for a heading level
pub fn heading_style(level: usize) -> HeadingStyle {
    HEADING_STYLES
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, style)| *style)
        .unwrap_or(HeadingStyle {
            element: heading_element(level),
            class: DEFAULT_HEADING_CLASS,
            with_icon: false,
        })
}

fn heading_element(level: usize) -> &'static str {
    match level {
        0 | 1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    }
}

/// A substring rule over a title
#[derive(Debug, Clone, Copy)]
pub struct TitleRule<T: 'static> {
    /// Substring to look for
    pub needle: &'static str,
    /// Compare lowercased title against a lowercase needle
    pub case_insensitive: bool,
    /// Value selected when the rule matches
    pub value: T,
}

impl<T: Copy> TitleRule<T> {
    const fn exact(needle: &'static str, value: T) -> Self {
        Self {
            needle,
            case_insensitive: false,
            value,
        }
    }

    const fn folded(needle: &'static str, value: T) -> Self {
        Self {
            needle,
            case_insensitive: true,
            value,
        }
    }

    /// Whether this rule matches `title`
    pub fn matches(&self, title: &str) -> bool {
        if self.case_insensitive {
            title.to_lowercase().contains(self.needle)
        } else {
            title.contains(self.needle)
        }
    }
}

/// Evaluate rules top to bottom; first match wins
pub fn select<T: Copy>(rules: &[TitleRule<T>], title: &str, default: T) -> T {
    rules
        .iter()
        .find(|rule| rule.matches(title))
        .map_or(default, |rule| rule.value)
}

/// Icon shown beside a hook title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookIcon {
    Zap,
    Settings,
    Database,
    FileText,
    Code,
    GitBranch,
    Navigation,
    MapPin,
    Search,
}

impl HookIcon {
    /// Stable kebab-case icon name
    pub fn name(self) -> &'static str {
        match self {
            HookIcon::Zap => "zap",
            HookIcon::Settings => "settings",
            HookIcon::Database => "database",
            HookIcon::FileText => "file-text",
            HookIcon::Code => "code",
            HookIcon::GitBranch => "git-branch",
            HookIcon::Navigation => "navigation",
            HookIcon::MapPin => "map-pin",
            HookIcon::Search => "search",
        }
    }
}

const HOOK_ICON_RULES: &[TitleRule<HookIcon>] = &[
    TitleRule::folded("usestate", HookIcon::Zap),
    TitleRule::folded("useeffect", HookIcon::Settings),
    TitleRule::folded("usecontext", HookIcon::Database),
    TitleRule::folded("useref", HookIcon::FileText),
    TitleRule::folded("usememo", HookIcon::Code),
    TitleRule::folded("usecallback", HookIcon::GitBranch),
    TitleRule::folded("usereducer", HookIcon::Settings),
    TitleRule::folded("userouter", HookIcon::Navigation),
    TitleRule::folded("useparams", HookIcon::MapPin),
    TitleRule::folded("usesearchparams", HookIcon::Search),
    TitleRule::folded("usepathname", HookIcon::MapPin),
];

/// Pick the icon for a hook title
pub fn hook_icon(title: &str) -> HookIcon {
    select(HOOK_ICON_RULES, title, HookIcon::Code)
}

// Description, syntax, example, caution, summary
const HEADING_ICON_RULES: &[TitleRule<&str>] = &[
    TitleRule::exact("คำอธิบาย", "📝"),
    TitleRule::exact("Syntax", "🔧"),
    TitleRule::exact("ตัวอย่าง", "💡"),
    TitleRule::exact("ข้อควรระวัง", "⚠️"),
    TitleRule::exact("สรุป", "📊"),
];

/// Pick the icon for a content heading, empty when none applies
pub fn heading_icon(text: &str) -> &'static str {
    select(HEADING_ICON_RULES, text, "")
}

/// Accent applied to a part and its hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartAccent {
    Primary,
    Secondary,
}

impl PartAccent {
    pub fn class(self) -> &'static str {
        match self {
            PartAccent::Primary => "accent-primary",
            PartAccent::Secondary => "accent-secondary",
        }
    }

    /// Icon shown on the part's tab
    pub fn icon(self) -> HookIcon {
        match self {
            PartAccent::Primary => HookIcon::Zap,
            PartAccent::Secondary => HookIcon::Navigation,
        }
    }
}

/// The first part is the primary one
pub fn part_accent(index: usize) -> PartAccent {
    if index == 0 {
        PartAccent::Primary
    } else {
        PartAccent::Secondary
    }
}

/// Whether a paragraph opens with a bold label such as `**Example 1**:`
pub fn is_example_header(text: &str) -> bool {
    EXAMPLE_HEADER.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_style_table() {
        assert_eq!(heading_style(3).element, "h3");
        assert!(heading_style(3).with_icon);
        assert!(!heading_style(4).with_icon);
    }

    #[test]
    fn test_heading_style_default_clamps_element() {
        let style = heading_style(9);

        assert_eq!(style.element, "h6");
        assert_eq!(style.class, DEFAULT_HEADING_CLASS);
        assert_eq!(heading_style(5).element, "h5");
    }

    #[test]
    fn test_hook_icon_is_case_insensitive() {
        assert_eq!(hook_icon("1. useState"), HookIcon::Zap);
        assert_eq!(hook_icon("3. USEROUTER"), HookIcon::Navigation);
    }

    #[test]
    fn test_hook_icon_first_match_wins() {
        assert_eq!(hook_icon("8. useEffect vs useState"), HookIcon::Zap);
        assert_eq!(hook_icon("4. useSearchParams"), HookIcon::Search);
    }

    #[test]
    fn test_hook_icon_default() {
        assert_eq!(hook_icon("5. useTransition"), HookIcon::Code);
        assert_eq!(hook_icon("5. useTransition").name(), "code");
    }

    #[test]
    fn test_heading_icon_rules() {
        assert_eq!(heading_icon("Syntax พื้นฐาน"), "🔧");
        assert_eq!(heading_icon("ตัวอย่างการใช้งาน"), "💡");
        assert_eq!(heading_icon("Something else"), "");
    }

    #[test]
    fn test_part_accent() {
        assert_eq!(part_accent(0), PartAccent::Primary);
        assert_eq!(part_accent(1).icon(), HookIcon::Navigation);
    }

    #[test]
    fn test_example_header_detection() {
        assert!(is_example_header("**ตัวอย่างที่ 1**: counter"));
        assert!(!is_example_header("plain **bold**: text"));
    }
}
