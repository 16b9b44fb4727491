use cssparser::match_ignore_ascii_case;

/// The closed set of properties this engine understands.
///
/// Longhands come first, shorthands last; [`PropertyId::is_shorthand`] relies
/// on that grouping only through the explicit match below, not on ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyId {
    // Color longhands
    Color,
    BackgroundColor,
    BorderTopColor,
    BorderRightColor,
    BorderBottomColor,
    BorderLeftColor,
    OutlineColor,

    // Length longhands
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
    Top,
    Right,
    Bottom,
    Left,
    FontSize,
    LineHeight,
    LetterSpacing,
    WordSpacing,
    TextIndent,
    BorderTopWidth,
    BorderRightWidth,
    BorderBottomWidth,
    BorderLeftWidth,
    OutlineWidth,
    BorderTopLeftRadius,
    BorderTopRightRadius,
    BorderBottomRightRadius,
    BorderBottomLeftRadius,

    // Keyword longhands
    Display,
    Position,
    Float,
    Clear,
    Visibility,
    Overflow,
    WhiteSpace,
    TextAlign,
    Direction,
    BorderTopStyle,
    BorderRightStyle,
    BorderBottomStyle,
    BorderLeftStyle,
    OutlineStyle,
    FontStyle,
    FontWeight,

    // Misc longhands
    Opacity,
    ZIndex,
    Clip,
    ClipPath,
    Filter,
    Transform,
    FontFamily,
    BoxShadow,
    TextShadow,

    // Fill-layer longhands
    BackgroundImage,
    BackgroundAttachment,
    BackgroundClip,
    BackgroundOrigin,
    BackgroundRepeat,
    BackgroundPosition,
    BackgroundSize,
    BackgroundBlendMode,
    MaskImage,
    MaskRepeat,
    MaskPosition,
    MaskSize,
    MaskClip,
    MaskOrigin,
    MaskComposite,
    MaskSourceType,

    // Nine-piece image longhands
    BorderImageSource,
    BorderImageSlice,
    BorderImageWidth,
    BorderImageOutset,
    BorderImageRepeat,

    // Animation / transition longhands
    AnimationName,
    AnimationDuration,
    AnimationDelay,
    AnimationIterationCount,
    AnimationDirection,
    AnimationFillMode,
    AnimationPlayState,
    AnimationTimingFunction,
    TransitionProperty,
    TransitionDuration,
    TransitionDelay,
    TransitionTimingFunction,

    // Shorthands
    Margin,
    Padding,
    BorderWidth,
    BorderColor,
    BorderStyle,
    BorderRadius,
    BorderImage,
    WebkitBorderImage,
    MaskBoxImage,
    Background,
    Font,
}

impl PropertyId {
    pub fn from_name(name: &str) -> Option<PropertyId> {
        use PropertyId::*;
        Some(match_ignore_ascii_case! { name,
            "color" => Color,
            "background-color" => BackgroundColor,
            "border-top-color" => BorderTopColor,
            "border-right-color" => BorderRightColor,
            "border-bottom-color" => BorderBottomColor,
            "border-left-color" => BorderLeftColor,
            "outline-color" => OutlineColor,
            "width" => Width,
            "height" => Height,
            "min-width" => MinWidth,
            "min-height" => MinHeight,
            "max-width" => MaxWidth,
            "max-height" => MaxHeight,
            "margin-top" => MarginTop,
            "margin-right" => MarginRight,
            "margin-bottom" => MarginBottom,
            "margin-left" => MarginLeft,
            "padding-top" => PaddingTop,
            "padding-right" => PaddingRight,
            "padding-bottom" => PaddingBottom,
            "padding-left" => PaddingLeft,
            "top" => Top,
            "right" => Right,
            "bottom" => Bottom,
            "left" => Left,
            "font-size" => FontSize,
            "line-height" => LineHeight,
            "letter-spacing" => LetterSpacing,
            "word-spacing" => WordSpacing,
            "text-indent" => TextIndent,
            "border-top-width" => BorderTopWidth,
            "border-right-width" => BorderRightWidth,
            "border-bottom-width" => BorderBottomWidth,
            "border-left-width" => BorderLeftWidth,
            "outline-width" => OutlineWidth,
            "border-top-left-radius" => BorderTopLeftRadius,
            "border-top-right-radius" => BorderTopRightRadius,
            "border-bottom-right-radius" => BorderBottomRightRadius,
            "border-bottom-left-radius" => BorderBottomLeftRadius,
            "display" => Display,
            "position" => Position,
            "float" => Float,
            "clear" => Clear,
            "visibility" => Visibility,
            "overflow" => Overflow,
            "white-space" => WhiteSpace,
            "text-align" => TextAlign,
            "direction" => Direction,
            "border-top-style" => BorderTopStyle,
            "border-right-style" => BorderRightStyle,
            "border-bottom-style" => BorderBottomStyle,
            "border-left-style" => BorderLeftStyle,
            "outline-style" => OutlineStyle,
            "font-style" => FontStyle,
            "font-weight" => FontWeight,
            "opacity" => Opacity,
            "z-index" => ZIndex,
            "clip" => Clip,
            "clip-path" => ClipPath,
            "filter" => Filter,
            "transform" => Transform,
            "font-family" => FontFamily,
            "box-shadow" => BoxShadow,
            "text-shadow" => TextShadow,
            "background-image" => BackgroundImage,
            "background-attachment" => BackgroundAttachment,
            "background-clip" => BackgroundClip,
            "background-origin" => BackgroundOrigin,
            "background-repeat" => BackgroundRepeat,
            "background-position" => BackgroundPosition,
            "background-size" => BackgroundSize,
            "background-blend-mode" => BackgroundBlendMode,
            "mask-image" => MaskImage,
            "mask-repeat" => MaskRepeat,
            "mask-position" => MaskPosition,
            "mask-size" => MaskSize,
            "mask-clip" => MaskClip,
            "mask-origin" => MaskOrigin,
            "mask-composite" => MaskComposite,
            "mask-source-type" => MaskSourceType,
            "border-image-source" => BorderImageSource,
            "border-image-slice" => BorderImageSlice,
            "border-image-width" => BorderImageWidth,
            "border-image-outset" => BorderImageOutset,
            "border-image-repeat" => BorderImageRepeat,
            "animation-name" => AnimationName,
            "animation-duration" => AnimationDuration,
            "animation-delay" => AnimationDelay,
            "animation-iteration-count" => AnimationIterationCount,
            "animation-direction" => AnimationDirection,
            "animation-fill-mode" => AnimationFillMode,
            "animation-play-state" => AnimationPlayState,
            "animation-timing-function" => AnimationTimingFunction,
            "transition-property" => TransitionProperty,
            "transition-duration" => TransitionDuration,
            "transition-delay" => TransitionDelay,
            "transition-timing-function" => TransitionTimingFunction,
            "margin" => Margin,
            "padding" => Padding,
            "border-width" => BorderWidth,
            "border-color" => BorderColor,
            "border-style" => BorderStyle,
            "border-radius" => BorderRadius,
            "border-image" => BorderImage,
            "-webkit-border-image" => WebkitBorderImage,
            "mask-box-image" => MaskBoxImage,
            "background" => Background,
            "font" => Font,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        use PropertyId::*;
        match self {
            Color => "color",
            BackgroundColor => "background-color",
            BorderTopColor => "border-top-color",
            BorderRightColor => "border-right-color",
            BorderBottomColor => "border-bottom-color",
            BorderLeftColor => "border-left-color",
            OutlineColor => "outline-color",
            Width => "width",
            Height => "height",
            MinWidth => "min-width",
            MinHeight => "min-height",
            MaxWidth => "max-width",
            MaxHeight => "max-height",
            MarginTop => "margin-top",
            MarginRight => "margin-right",
            MarginBottom => "margin-bottom",
            MarginLeft => "margin-left",
            PaddingTop => "padding-top",
            PaddingRight => "padding-right",
            PaddingBottom => "padding-bottom",
            PaddingLeft => "padding-left",
            Top => "top",
            Right => "right",
            Bottom => "bottom",
            Left => "left",
            FontSize => "font-size",
            LineHeight => "line-height",
            LetterSpacing => "letter-spacing",
            WordSpacing => "word-spacing",
            TextIndent => "text-indent",
            BorderTopWidth => "border-top-width",
            BorderRightWidth => "border-right-width",
            BorderBottomWidth => "border-bottom-width",
            BorderLeftWidth => "border-left-width",
            OutlineWidth => "outline-width",
            BorderTopLeftRadius => "border-top-left-radius",
            BorderTopRightRadius => "border-top-right-radius",
            BorderBottomRightRadius => "border-bottom-right-radius",
            BorderBottomLeftRadius => "border-bottom-left-radius",
            Display => "display",
            Position => "position",
            Float => "float",
            Clear => "clear",
            Visibility => "visibility",
            Overflow => "overflow",
            WhiteSpace => "white-space",
            TextAlign => "text-align",
            Direction => "direction",
            BorderTopStyle => "border-top-style",
            BorderRightStyle => "border-right-style",
            BorderBottomStyle => "border-bottom-style",
            BorderLeftStyle => "border-left-style",
            OutlineStyle => "outline-style",
            FontStyle => "font-style",
            FontWeight => "font-weight",
            Opacity => "opacity",
            ZIndex => "z-index",
            Clip => "clip",
            ClipPath => "clip-path",
            Filter => "filter",
            Transform => "transform",
            FontFamily => "font-family",
            BoxShadow => "box-shadow",
            TextShadow => "text-shadow",
            BackgroundImage => "background-image",
            BackgroundAttachment => "background-attachment",
            BackgroundClip => "background-clip",
            BackgroundOrigin => "background-origin",
            BackgroundRepeat => "background-repeat",
            BackgroundPosition => "background-position",
            BackgroundSize => "background-size",
            BackgroundBlendMode => "background-blend-mode",
            MaskImage => "mask-image",
            MaskRepeat => "mask-repeat",
            MaskPosition => "mask-position",
            MaskSize => "mask-size",
            MaskClip => "mask-clip",
            MaskOrigin => "mask-origin",
            MaskComposite => "mask-composite",
            MaskSourceType => "mask-source-type",
            BorderImageSource => "border-image-source",
            BorderImageSlice => "border-image-slice",
            BorderImageWidth => "border-image-width",
            BorderImageOutset => "border-image-outset",
            BorderImageRepeat => "border-image-repeat",
            AnimationName => "animation-name",
            AnimationDuration => "animation-duration",
            AnimationDelay => "animation-delay",
            AnimationIterationCount => "animation-iteration-count",
            AnimationDirection => "animation-direction",
            AnimationFillMode => "animation-fill-mode",
            AnimationPlayState => "animation-play-state",
            AnimationTimingFunction => "animation-timing-function",
            TransitionProperty => "transition-property",
            TransitionDuration => "transition-duration",
            TransitionDelay => "transition-delay",
            TransitionTimingFunction => "transition-timing-function",
            Margin => "margin",
            Padding => "padding",
            BorderWidth => "border-width",
            BorderColor => "border-color",
            BorderStyle => "border-style",
            BorderRadius => "border-radius",
            BorderImage => "border-image",
            WebkitBorderImage => "-webkit-border-image",
            MaskBoxImage => "mask-box-image",
            Background => "background",
            Font => "font",
        }
    }

    pub fn is_shorthand(self) -> bool {
        use PropertyId::*;
        matches!(
            self,
            Margin
                | Padding
                | BorderWidth
                | BorderColor
                | BorderStyle
                | BorderRadius
                | BorderImage
                | WebkitBorderImage
                | MaskBoxImage
                | Background
                | Font
        )
    }

    /// Properties eligible for the simple-length fast path. Returns
    /// `Some(accepts_negative)` for eligible properties.
    pub(crate) fn simple_length_policy(self) -> Option<bool> {
        use PropertyId::*;
        match self {
            FontSize | Height | Width | MinWidth | MinHeight | PaddingTop | PaddingRight | PaddingBottom | PaddingLeft => Some(false),
            MarginTop | MarginRight | MarginBottom | MarginLeft | Top | Right | Bottom | Left => Some(true),
            _ => None,
        }
    }

    /// Properties whose value is a single `<color>`, eligible for the color
    /// fast path.
    pub fn is_color_property(self) -> bool {
        use PropertyId::*;
        matches!(
            self,
            Color | BackgroundColor | BorderTopColor | BorderRightColor | BorderBottomColor | BorderLeftColor | OutlineColor
        )
    }

    /// The legacy color properties for which quirks mode admits `#`-less hex.
    pub(crate) fn allows_quirky_color(self) -> bool {
        use PropertyId::*;
        matches!(
            self,
            Color | BackgroundColor | BorderTopColor | BorderRightColor | BorderBottomColor | BorderLeftColor
        )
    }

    /// True when the property's whole value domain is a closed keyword set.
    pub fn is_keyword_property(self) -> bool {
        use PropertyId::*;
        matches!(
            self,
            Display
                | Position
                | Float
                | Clear
                | Visibility
                | Overflow
                | WhiteSpace
                | TextAlign
                | Direction
                | BorderTopStyle
                | BorderRightStyle
                | BorderBottomStyle
                | BorderLeftStyle
                | OutlineStyle
                | FontStyle
                | BackgroundAttachment
                | BackgroundClip
                | BackgroundOrigin
                | BackgroundBlendMode
                | MaskClip
                | MaskOrigin
                | MaskComposite
                | MaskSourceType
                | AnimationDirection
                | AnimationFillMode
                | AnimationPlayState
        )
    }
}

/// The closed set of keyword identifiers.
///
/// The display family is kept contiguous; `is_valid_keyword_value` checks it
/// as a range, so new display values belong inside the `Inline..=InlineGrid`
/// run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueId {
    Inline,
    Block,
    ListItem,
    InlineBlock,
    Table,
    InlineTable,
    TableRowGroup,
    TableHeaderGroup,
    TableFooterGroup,
    TableRow,
    TableColumnGroup,
    TableColumn,
    TableCell,
    TableCaption,
    Flex,
    InlineFlex,
    Grid,
    InlineGrid,

    Absolute,
    Add,
    All,
    Alpha,
    Alternate,
    AlternateReverse,
    Auto,
    Backwards,
    Bold,
    Bolder,
    BorderBox,
    Both,
    Bottom,
    Center,
    Collapse,
    Contain,
    ContentBox,
    Cover,
    CurrentColor,
    Darken,
    Dashed,
    Dotted,
    Double,
    Ease,
    EaseIn,
    EaseInOut,
    EaseOut,
    End,
    Exclude,
    Fill,
    Fixed,
    Forwards,
    Groove,
    Hidden,
    Infinite,
    Inherit,
    Initial,
    Inset,
    Intersect,
    Italic,
    Justify,
    Left,
    Lighten,
    Lighter,
    Linear,
    Local,
    Ltr,
    Luminance,
    Medium,
    Middle,
    Multiply,
    NoRepeat,
    None,
    Normal,
    Nowrap,
    Oblique,
    Outset,
    Overlay,
    PaddingBox,
    Paused,
    Pre,
    PreLine,
    PreWrap,
    Relative,
    Repeat,
    RepeatX,
    RepeatY,
    Reverse,
    Ridge,
    Right,
    Round,
    Rtl,
    Running,
    Screen,
    Scroll,
    Solid,
    Space,
    Start,
    Static,
    StepEnd,
    StepMiddle,
    StepStart,
    Sticky,
    Stretch,
    Sub,
    Subtract,
    Super,
    Thick,
    Thin,
    Top,
    Transparent,
    Visible,
}

impl ValueId {
    pub fn from_name(name: &str) -> Option<ValueId> {
        use ValueId::*;
        Some(match_ignore_ascii_case! { name,
            "inline" => Inline,
            "block" => Block,
            "list-item" => ListItem,
            "inline-block" => InlineBlock,
            "table" => Table,
            "inline-table" => InlineTable,
            "table-row-group" => TableRowGroup,
            "table-header-group" => TableHeaderGroup,
            "table-footer-group" => TableFooterGroup,
            "table-row" => TableRow,
            "table-column-group" => TableColumnGroup,
            "table-column" => TableColumn,
            "table-cell" => TableCell,
            "table-caption" => TableCaption,
            "flex" => Flex,
            "inline-flex" => InlineFlex,
            "grid" => Grid,
            "inline-grid" => InlineGrid,
            "absolute" => Absolute,
            "add" => Add,
            "all" => All,
            "alpha" => Alpha,
            "alternate" => Alternate,
            "alternate-reverse" => AlternateReverse,
            "auto" => Auto,
            "backwards" => Backwards,
            "bold" => Bold,
            "bolder" => Bolder,
            "border-box" => BorderBox,
            "both" => Both,
            "bottom" => Bottom,
            "center" => Center,
            "collapse" => Collapse,
            "contain" => Contain,
            "content-box" => ContentBox,
            "cover" => Cover,
            "currentcolor" => CurrentColor,
            "darken" => Darken,
            "dashed" => Dashed,
            "dotted" => Dotted,
            "double" => Double,
            "ease" => Ease,
            "ease-in" => EaseIn,
            "ease-in-out" => EaseInOut,
            "ease-out" => EaseOut,
            "end" => End,
            "exclude" => Exclude,
            "fill" => Fill,
            "fixed" => Fixed,
            "forwards" => Forwards,
            "groove" => Groove,
            "hidden" => Hidden,
            "infinite" => Infinite,
            "inherit" => Inherit,
            "initial" => Initial,
            "inset" => Inset,
            "intersect" => Intersect,
            "italic" => Italic,
            "justify" => Justify,
            "left" => Left,
            "lighten" => Lighten,
            "lighter" => Lighter,
            "linear" => Linear,
            "local" => Local,
            "ltr" => Ltr,
            "luminance" => Luminance,
            "medium" => Medium,
            "middle" => Middle,
            "multiply" => Multiply,
            "no-repeat" => NoRepeat,
            "none" => None,
            "normal" => Normal,
            "nowrap" => Nowrap,
            "oblique" => Oblique,
            "outset" => Outset,
            "overlay" => Overlay,
            "padding-box" => PaddingBox,
            "paused" => Paused,
            "pre" => Pre,
            "pre-line" => PreLine,
            "pre-wrap" => PreWrap,
            "relative" => Relative,
            "repeat" => Repeat,
            "repeat-x" => RepeatX,
            "repeat-y" => RepeatY,
            "reverse" => Reverse,
            "ridge" => Ridge,
            "right" => Right,
            "round" => Round,
            "rtl" => Rtl,
            "running" => Running,
            "screen" => Screen,
            "scroll" => Scroll,
            "solid" => Solid,
            "space" => Space,
            "start" => Start,
            "static" => Static,
            "step-end" => StepEnd,
            "step-middle" => StepMiddle,
            "step-start" => StepStart,
            "sticky" => Sticky,
            "stretch" => Stretch,
            "sub" => Sub,
            "subtract" => Subtract,
            "super" => Super,
            "thick" => Thick,
            "thin" => Thin,
            "top" => Top,
            "transparent" => Transparent,
            "visible" => Visible,
            _ => return Option::None,
        })
    }

    pub fn name(self) -> &'static str {
        use ValueId::*;
        match self {
            Inline => "inline",
            Block => "block",
            ListItem => "list-item",
            InlineBlock => "inline-block",
            Table => "table",
            InlineTable => "inline-table",
            TableRowGroup => "table-row-group",
            TableHeaderGroup => "table-header-group",
            TableFooterGroup => "table-footer-group",
            TableRow => "table-row",
            TableColumnGroup => "table-column-group",
            TableColumn => "table-column",
            TableCell => "table-cell",
            TableCaption => "table-caption",
            Flex => "flex",
            InlineFlex => "inline-flex",
            Grid => "grid",
            InlineGrid => "inline-grid",
            Absolute => "absolute",
            Add => "add",
            All => "all",
            Alpha => "alpha",
            Alternate => "alternate",
            AlternateReverse => "alternate-reverse",
            Auto => "auto",
            Backwards => "backwards",
            Bold => "bold",
            Bolder => "bolder",
            BorderBox => "border-box",
            Both => "both",
            Bottom => "bottom",
            Center => "center",
            Collapse => "collapse",
            Contain => "contain",
            ContentBox => "content-box",
            Cover => "cover",
            CurrentColor => "currentcolor",
            Darken => "darken",
            Dashed => "dashed",
            Dotted => "dotted",
            Double => "double",
            Ease => "ease",
            EaseIn => "ease-in",
            EaseInOut => "ease-in-out",
            EaseOut => "ease-out",
            End => "end",
            Exclude => "exclude",
            Fill => "fill",
            Fixed => "fixed",
            Forwards => "forwards",
            Groove => "groove",
            Hidden => "hidden",
            Infinite => "infinite",
            Inherit => "inherit",
            Initial => "initial",
            Inset => "inset",
            Intersect => "intersect",
            Italic => "italic",
            Justify => "justify",
            Left => "left",
            Lighten => "lighten",
            Lighter => "lighter",
            Linear => "linear",
            Local => "local",
            Ltr => "ltr",
            Luminance => "luminance",
            Medium => "medium",
            Middle => "middle",
            Multiply => "multiply",
            NoRepeat => "no-repeat",
            None => "none",
            Normal => "normal",
            Nowrap => "nowrap",
            Oblique => "oblique",
            Outset => "outset",
            Overlay => "overlay",
            PaddingBox => "padding-box",
            Paused => "paused",
            Pre => "pre",
            PreLine => "pre-line",
            PreWrap => "pre-wrap",
            Relative => "relative",
            Repeat => "repeat",
            RepeatX => "repeat-x",
            RepeatY => "repeat-y",
            Reverse => "reverse",
            Ridge => "ridge",
            Right => "right",
            Round => "round",
            Rtl => "rtl",
            Running => "running",
            Screen => "screen",
            Scroll => "scroll",
            Solid => "solid",
            Space => "space",
            Start => "start",
            Static => "static",
            StepEnd => "step-end",
            StepMiddle => "step-middle",
            StepStart => "step-start",
            Sticky => "sticky",
            Stretch => "stretch",
            Sub => "sub",
            Subtract => "subtract",
            Super => "super",
            Thick => "thick",
            Thin => "thin",
            Top => "top",
            Transparent => "transparent",
            Visible => "visible",
        }
    }
}

/// Per-property keyword domains for closed keyword properties.
///
/// `initial` and `inherit` are handled by the caller; this checks the
/// property-specific set only.
pub fn is_valid_keyword_value(property: PropertyId, id: ValueId) -> bool {
    use PropertyId as P;
    use ValueId as V;
    match property {
        P::Display => (V::Inline..=V::InlineGrid).contains(&id) || id == V::None,
        P::Position => matches!(id, V::Static | V::Relative | V::Absolute | V::Fixed | V::Sticky),
        P::Float => matches!(id, V::Left | V::Right | V::None),
        P::Clear => matches!(id, V::None | V::Left | V::Right | V::Both),
        P::Visibility => matches!(id, V::Visible | V::Hidden | V::Collapse),
        P::Overflow => matches!(id, V::Visible | V::Hidden | V::Scroll | V::Auto),
        P::WhiteSpace => matches!(id, V::Normal | V::Pre | V::PreWrap | V::PreLine | V::Nowrap),
        P::TextAlign => matches!(id, V::Left | V::Right | V::Center | V::Justify | V::Start | V::End),
        P::Direction => matches!(id, V::Ltr | V::Rtl),
        P::BorderTopStyle | P::BorderRightStyle | P::BorderBottomStyle | P::BorderLeftStyle | P::OutlineStyle => matches!(
            id,
            V::None | V::Hidden | V::Dotted | V::Dashed | V::Solid | V::Double | V::Groove | V::Ridge | V::Inset | V::Outset
        ),
        P::FontStyle => matches!(id, V::Normal | V::Italic | V::Oblique),
        P::BackgroundAttachment => matches!(id, V::Scroll | V::Fixed | V::Local),
        P::BackgroundClip | P::BackgroundOrigin | P::MaskClip | P::MaskOrigin => {
            matches!(id, V::BorderBox | V::PaddingBox | V::ContentBox)
        }
        P::BackgroundBlendMode => matches!(id, V::Normal | V::Multiply | V::Screen | V::Overlay | V::Darken | V::Lighten),
        P::MaskComposite => matches!(id, V::Add | V::Subtract | V::Intersect | V::Exclude),
        P::MaskSourceType => matches!(id, V::Alpha | V::Luminance),
        P::AnimationDirection => matches!(id, V::Normal | V::Alternate | V::Reverse | V::AlternateReverse),
        P::AnimationFillMode => matches!(id, V::None | V::Forwards | V::Backwards | V::Both),
        P::AnimationPlayState => matches!(id, V::Running | V::Paused),
        _ => false,
    }
}
