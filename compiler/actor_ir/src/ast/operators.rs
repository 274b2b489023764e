//! Binary operators.

/// Binary operators of the language.
///
/// Every binary operator evaluates both operands, left first. There is no
/// short-circuiting, including for `&&` and `||`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Comparison
    Eq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    /// Inclusive numeric range, written `to`.
    Range,
}

impl BinaryOp {
    /// Every operator, in declaration order.
    pub const ALL: [BinaryOp; 14] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Pow,
        Self::Eq,
        Self::Lt,
        Self::LtEq,
        Self::Gt,
        Self::GtEq,
        Self::And,
        Self::Or,
        Self::Range,
    ];

    /// Source-level spelling, used in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Eq => "=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Range => "to",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BinaryOp;

    #[test]
    fn symbols_are_distinct() {
        for (i, a) in BinaryOp::ALL.iter().enumerate() {
            for b in &BinaryOp::ALL[i + 1..] {
                assert_ne!(a.as_symbol(), b.as_symbol());
            }
        }
        assert_eq!(BinaryOp::Eq.as_symbol(), "=");
        assert_eq!(BinaryOp::Range.as_symbol(), "to");
    }
}
