use std::fmt::{self, Display};

use crate::css::primitive::{ConversionContext, LengthArray, LengthUnitType, UnitCategory, UnitKind};

/// The resolved type of a calc() expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcCategory {
    Number,
    Length,
    Percent,
    /// A mix of lengths and percentages; only resolvable against a basis.
    PercentLength,
    Angle,
    Time,
    Frequency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl CalcOp {
    fn symbol(self) -> &'static str {
        match self {
            CalcOp::Add => " + ",
            CalcOp::Subtract => " - ",
            CalcOp::Multiply => " * ",
            CalcOp::Divide => " / ",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalcNode {
    Leaf { value: f32, unit: UnitKind },
    Binary { op: CalcOp, left: Box<CalcNode>, right: Box<CalcNode> },
}

impl CalcNode {
    pub fn leaf(value: f32, unit: UnitKind) -> CalcNode {
        CalcNode::Leaf { value, unit }
    }

    pub fn binary(op: CalcOp, left: CalcNode, right: CalcNode) -> CalcNode {
        CalcNode::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn category(&self) -> Option<CalcCategory> {
        match self {
            CalcNode::Leaf { unit, .. } => match unit.category() {
                UnitCategory::Number => Some(CalcCategory::Number),
                UnitCategory::Length => Some(CalcCategory::Length),
                UnitCategory::Percent => Some(CalcCategory::Percent),
                UnitCategory::Angle => Some(CalcCategory::Angle),
                UnitCategory::Time => Some(CalcCategory::Time),
                UnitCategory::Frequency => Some(CalcCategory::Frequency),
                _ => None,
            },
            CalcNode::Binary { op, left, right } => {
                let lhs = left.category()?;
                let rhs = right.category()?;
                match op {
                    CalcOp::Add | CalcOp::Subtract => {
                        if lhs == rhs {
                            return Some(lhs);
                        }
                        // <length> and <percentage> may mix freely.
                        let length_like = |c: CalcCategory| {
                            matches!(c, CalcCategory::Length | CalcCategory::Percent | CalcCategory::PercentLength)
                        };
                        if length_like(lhs) && length_like(rhs) {
                            Some(CalcCategory::PercentLength)
                        } else {
                            None
                        }
                    }
                    CalcOp::Multiply => match (lhs, rhs) {
                        (CalcCategory::Number, other) | (other, CalcCategory::Number) => Some(other),
                        _ => None,
                    },
                    CalcOp::Divide => {
                        if rhs == CalcCategory::Number { Some(lhs) } else { None }
                    }
                }
            }
        }
    }

    fn evaluate(&self, ctx: &ConversionContext) -> Option<f64> {
        match self {
            CalcNode::Leaf { value, unit } => {
                let v = f64::from(*value);
                match unit.category() {
                    UnitCategory::Number => Some(v),
                    UnitCategory::Length => unit.px_per_unit(ctx).map(|f| v * f),
                    // Percentages need a basis the conversion context does not carry.
                    _ => None,
                }
            }
            CalcNode::Binary { op, left, right } => {
                let lhs = left.evaluate(ctx)?;
                let rhs = right.evaluate(ctx)?;
                match op {
                    CalcOp::Add => Some(lhs + rhs),
                    CalcOp::Subtract => Some(lhs - rhs),
                    CalcOp::Multiply => Some(lhs * rhs),
                    CalcOp::Divide => {
                        if rhs == 0.0 { None } else { Some(lhs / rhs) }
                    }
                }
            }
        }
    }

    /// The constant numeric factor of a subtree, if it is a pure number.
    fn number_value(&self) -> Option<f64> {
        match self {
            CalcNode::Leaf { value, unit } if unit.category() == UnitCategory::Number => Some(f64::from(*value)),
            _ => None,
        }
    }

    fn accumulate(&self, out: &mut LengthArray, multiplier: f64) {
        match self {
            CalcNode::Leaf { value, unit } => {
                let v = f64::from(*value) * multiplier;
                match unit {
                    UnitKind::Px | UnitKind::Cm | UnitKind::Mm | UnitKind::In | UnitKind::Pt | UnitKind::Pc => {
                        out[LengthUnitType::Fixed as usize] += v * unit.fixed_px_factor();
                    }
                    UnitKind::Percentage => out[LengthUnitType::Percent as usize] += v,
                    UnitKind::Ems | UnitKind::Exs => out[LengthUnitType::FontSize as usize] += v,
                    UnitKind::Rems => out[LengthUnitType::RootFontSize as usize] += v,
                    UnitKind::Chs => out[LengthUnitType::ZeroCharacterWidth as usize] += v,
                    UnitKind::Vw => out[LengthUnitType::ViewportWidth as usize] += v,
                    UnitKind::Vh => out[LengthUnitType::ViewportHeight as usize] += v,
                    UnitKind::Vmin => out[LengthUnitType::ViewportMin as usize] += v,
                    UnitKind::Vmax => out[LengthUnitType::ViewportMax as usize] += v,
                    _ => {}
                }
            }
            CalcNode::Binary { op, left, right } => match op {
                CalcOp::Add => {
                    left.accumulate(out, multiplier);
                    right.accumulate(out, multiplier);
                }
                CalcOp::Subtract => {
                    left.accumulate(out, multiplier);
                    right.accumulate(out, -multiplier);
                }
                CalcOp::Multiply => {
                    if let Some(n) = right.number_value() {
                        left.accumulate(out, multiplier * n);
                    } else if let Some(n) = left.number_value() {
                        right.accumulate(out, multiplier * n);
                    }
                }
                CalcOp::Divide => {
                    if let Some(n) = right.number_value()
                        && n != 0.0
                    {
                        left.accumulate(out, multiplier / n);
                    }
                }
            },
        }
    }

    fn write(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcNode::Leaf { value, unit } => {
                write!(f, "{value}")?;
                f.write_str(unit.suffix())
            }
            CalcNode::Binary { op, left, right } => {
                let paren = |node: &CalcNode, f: &mut fmt::Formatter<'_>| -> fmt::Result {
                    if matches!(node, CalcNode::Binary { .. }) {
                        f.write_str("(")?;
                        node.write(f)?;
                        f.write_str(")")
                    } else {
                        node.write(f)
                    }
                };
                paren(left, f)?;
                f.write_str(op.symbol())?;
                paren(right, f)
            }
        }
    }
}

/// An owned calc() expression with its resolved category.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcExpression {
    root: CalcNode,
    category: CalcCategory,
}

impl CalcExpression {
    /// Builds an expression, rejecting trees whose unit categories do not
    /// combine (e.g. `1px + 2s`).
    pub fn new(root: CalcNode) -> Option<CalcExpression> {
        let category = root.category()?;
        Some(CalcExpression { root, category })
    }

    pub fn category(&self) -> CalcCategory {
        self.category
    }

    /// Resolves the expression to pixels. `None` when the expression depends
    /// on a percentage basis or is not a length.
    pub fn evaluate_px(&self, ctx: &ConversionContext) -> Option<f64> {
        match self.category {
            CalcCategory::Length | CalcCategory::Number => self.root.evaluate(ctx),
            _ => None,
        }
    }

    pub fn accumulate_length_array(&self, out: &mut LengthArray, multiplier: f64) {
        self.root.accumulate(out, multiplier);
    }
}

impl Display for CalcExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("calc(")?;
        self.root.write(f)?;
        f.write_str(")")
    }
}
