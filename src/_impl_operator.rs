use super::{EngineError, Operator, OperatorTable};
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

impl Operator {
    /// The glyph this operator is written as in a formula.
    pub fn glyph(self) -> char {
        match self {
            Operator::Not => '~',
            Operator::And => '∧',
            Operator::Or => '∨',
            Operator::Implies => '→',
            Operator::Iff => '↔',
        }
    }

    /// Binding strength used during conversion to postfix form. Higher binds tighter.
    ///
    /// `→` and `↔` share the lowest precedence and are resolved left to right.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Not => 4,
            Operator::And => 3,
            Operator::Or => 2,
            Operator::Implies => 1,
            Operator::Iff => 1,
        }
    }

    /// True for the one unary operator, `~`.
    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Not)
    }

    /// Apply the unary operator to its operand.
    ///
    /// *Panics:* `self` must be unary.
    pub fn apply_unary(self, value: bool) -> bool {
        match self {
            Operator::Not => !value,
            _ => panic!("Operator {} is not unary.", self),
        }
    }

    /// Apply the binary operator; `left` is the first-pushed operand. The order
    /// matters for `→`.
    ///
    /// *Panics:* `self` must be binary.
    pub fn apply_binary(self, left: bool, right: bool) -> bool {
        match self {
            Operator::And => left && right,
            Operator::Or => left || right,
            Operator::Implies => !left || right,
            Operator::Iff => left == right,
            Operator::Not => panic!("Operator ~ is not binary."),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EngineError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '~' => Ok(Operator::Not),
            '∧' => Ok(Operator::And),
            '∨' => Ok(Operator::Or),
            '→' => Ok(Operator::Implies),
            '↔' => Ok(Operator::Iff),
            _ => Err(EngineError::UnsupportedOperator(value)),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.glyph())
    }
}

impl OperatorTable {
    /// The standard five-operator table: `~`, `∧`, `∨`, `→` and `↔`.
    pub fn standard() -> OperatorTable {
        let operators = [
            Operator::Not,
            Operator::And,
            Operator::Or,
            Operator::Implies,
            Operator::Iff,
        ];
        OperatorTable {
            glyphs: operators.iter().map(|op| (op.glyph(), *op)).collect(),
        }
    }

    /// Look up the operator written as `glyph`, if any.
    pub fn get(&self, glyph: char) -> Option<Operator> {
        self.glyphs.get(&glyph).copied()
    }

    /// True iff `glyph` is claimed by an operator of this table.
    pub fn contains(&self, glyph: char) -> bool {
        self.glyphs.contains_key(&glyph)
    }

    /// True iff `ch` can stand for a variable: a single ASCII letter that is not
    /// claimed as an operator glyph.
    pub fn is_variable(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() && !self.contains(ch)
    }
}

impl Default for OperatorTable {
    fn default() -> OperatorTable {
        OperatorTable::standard()
    }
}
