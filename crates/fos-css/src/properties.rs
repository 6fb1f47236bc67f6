//! CSS Property Definitions
//!
//! Known longhand and shorthand properties with their inheritance flag and
//! initial value. Values stay opaque strings; this table only answers
//! "what does an element get when nothing in the cascade sets it".

/// Property identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum PropertyId {
    // Display & Layout
    Display,
    Position,
    Float,
    Clear,

    // Flexbox
    FlexDirection,
    FlexWrap,
    JustifyContent,
    AlignItems,
    FlexGrow,
    FlexShrink,
    FlexBasis,

    // Box Model
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,

    // Border
    BorderStyle,
    BorderWidth,
    BorderColor,
    BorderRadius,

    // Colors & Background
    Color,
    BackgroundColor,
    Opacity,

    // Text
    FontFamily,
    FontSize,
    FontWeight,
    FontStyle,
    TextAlign,
    TextDecoration,
    LineHeight,
    LetterSpacing,
    WhiteSpace,
    Cursor,

    // Visual
    Overflow,
    Visibility,
    ZIndex,

    // Positioning
    Top,
    Right,
    Bottom,
    Left,

    // Transform
    Transform,
}

impl PropertyId {
    /// Look up a hyphenated property name
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "display" => Self::Display,
            "position" => Self::Position,
            "float" => Self::Float,
            "clear" => Self::Clear,

            "flex-direction" => Self::FlexDirection,
            "flex-wrap" => Self::FlexWrap,
            "justify-content" => Self::JustifyContent,
            "align-items" => Self::AlignItems,
            "flex-grow" => Self::FlexGrow,
            "flex-shrink" => Self::FlexShrink,
            "flex-basis" => Self::FlexBasis,

            "width" => Self::Width,
            "height" => Self::Height,
            "min-width" => Self::MinWidth,
            "min-height" => Self::MinHeight,
            "max-width" => Self::MaxWidth,
            "max-height" => Self::MaxHeight,

            "margin-top" => Self::MarginTop,
            "margin-right" => Self::MarginRight,
            "margin-bottom" => Self::MarginBottom,
            "margin-left" => Self::MarginLeft,

            "padding-top" => Self::PaddingTop,
            "padding-right" => Self::PaddingRight,
            "padding-bottom" => Self::PaddingBottom,
            "padding-left" => Self::PaddingLeft,

            "border-style" => Self::BorderStyle,
            "border-width" => Self::BorderWidth,
            "border-color" => Self::BorderColor,
            "border-radius" => Self::BorderRadius,

            "color" => Self::Color,
            "background-color" => Self::BackgroundColor,
            "opacity" => Self::Opacity,

            "font-family" => Self::FontFamily,
            "font-size" => Self::FontSize,
            "font-weight" => Self::FontWeight,
            "font-style" => Self::FontStyle,
            "text-align" => Self::TextAlign,
            "text-decoration" => Self::TextDecoration,
            "line-height" => Self::LineHeight,
            "letter-spacing" => Self::LetterSpacing,
            "white-space" => Self::WhiteSpace,
            "cursor" => Self::Cursor,

            "overflow" => Self::Overflow,
            "visibility" => Self::Visibility,
            "z-index" => Self::ZIndex,

            "top" => Self::Top,
            "right" => Self::Right,
            "bottom" => Self::Bottom,
            "left" => Self::Left,

            "transform" => Self::Transform,

            _ => return None,
        })
    }

    /// Whether the property inherits from the parent element by default
    pub fn inherited(self) -> bool {
        matches!(
            self,
            Self::Color
                | Self::FontFamily
                | Self::FontSize
                | Self::FontWeight
                | Self::FontStyle
                | Self::TextAlign
                | Self::LineHeight
                | Self::LetterSpacing
                | Self::WhiteSpace
                | Self::Cursor
                | Self::Visibility
        )
    }

    /// Value used when the cascade and inheritance produce nothing
    pub fn initial_value(self) -> &'static str {
        match self {
            Self::Display => "inline",
            Self::Position => "static",
            Self::Float | Self::Clear => "none",

            Self::FlexDirection => "row",
            Self::FlexWrap => "nowrap",
            Self::JustifyContent | Self::AlignItems => "normal",
            Self::FlexGrow => "0",
            Self::FlexShrink => "1",
            Self::FlexBasis => "auto",

            Self::Width | Self::Height | Self::MinWidth | Self::MinHeight => "auto",
            Self::MaxWidth | Self::MaxHeight => "none",

            Self::MarginTop
            | Self::MarginRight
            | Self::MarginBottom
            | Self::MarginLeft
            | Self::PaddingTop
            | Self::PaddingRight
            | Self::PaddingBottom
            | Self::PaddingLeft
            | Self::BorderRadius => "0px",

            Self::BorderStyle => "none",
            Self::BorderWidth => "medium",
            Self::BorderColor => "currentcolor",

            Self::Color => "rgb(0, 0, 0)",
            Self::BackgroundColor => "rgba(0, 0, 0, 0)",
            Self::Opacity => "1",

            Self::FontFamily => "serif",
            Self::FontSize => "16px",
            Self::FontWeight => "400",
            Self::FontStyle => "normal",
            Self::TextAlign => "start",
            Self::TextDecoration => "none",
            Self::LineHeight | Self::LetterSpacing | Self::WhiteSpace => "normal",
            Self::Cursor => "auto",

            Self::Overflow => "visible",
            Self::Visibility => "visible",
            Self::ZIndex => "auto",

            Self::Top | Self::Right | Self::Bottom | Self::Left => "auto",

            Self::Transform => "none",
        }
    }
}

/// CSS-wide keywords handled by the cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Inherit,
    Initial,
    Unset,
}

impl Keyword {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inherit" => Some(Self::Inherit),
            "initial" => Some(Self::Initial),
            "unset" => Some(Self::Unset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(PropertyId::from_name("color"), Some(PropertyId::Color));
        assert_eq!(PropertyId::from_name("margin-left"), Some(PropertyId::MarginLeft));
        assert_eq!(PropertyId::from_name("marginLeft"), None);
        assert_eq!(PropertyId::from_name("made-up"), None);
    }

    #[test]
    fn test_inheritance_flags() {
        assert!(PropertyId::Color.inherited());
        assert!(PropertyId::FontSize.inherited());
        assert!(!PropertyId::Display.inherited());
        assert!(!PropertyId::BackgroundColor.inherited());
    }

    #[test]
    fn test_keywords() {
        assert_eq!(Keyword::parse(" INHERIT "), Some(Keyword::Inherit));
        assert_eq!(Keyword::parse("unset"), Some(Keyword::Unset));
        assert_eq!(Keyword::parse("red"), None);
    }
}
