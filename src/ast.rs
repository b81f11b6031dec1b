/// The root of every parsed source text.
///
/// A `Program` owns the ordered list of top-level statements produced by the
/// parser. Evaluating a program yields the value of its last statement, or
/// null when the body is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements in source order.
    pub body: Vec<Statement>,
}

/// Represents a top-level statement.
///
/// Statements are the units the parser emits while walking a program body.
/// Every expression is also valid in statement position.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `val` or `cval`.
    VarDeclaration {
        /// The name being declared.
        identifier: String,
        /// Whether the binding was declared with `cval` and rejects
        /// reassignment.
        constant: bool,
        /// The initializer, absent for a bare `val name;`.
        value: Option<Expr>,
        /// Line number in the source code.
        line: usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every expression form the grammar recognizes, from literals
/// and identifiers up to assignments, object literals, and member/call
/// chains. Nodes are built bottom-up by the parser and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant such as `42`.
    NumericLiteral {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        symbol: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    Binary {
        /// Left operand.
        left: Box<Self>,
        /// The operator.
        op: BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// An assignment such as `x = 5`.
    ///
    /// The target is kept as a full expression; the evaluator rejects any
    /// target that is not an identifier.
    Assignment {
        /// The expression being assigned to.
        target: Box<Self>,
        /// The value to assign.
        value: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// An object literal such as `{ a: 1, b }`.
    ObjectLiteral {
        /// Properties in declaration order.
        properties: Vec<Property>,
        /// Line number in the source code.
        line: usize,
    },
    /// A member access such as `point.x` or `point[key]`.
    Member {
        /// The expression being accessed.
        object: Box<Self>,
        /// The property expression; an identifier for dot access, any
        /// expression for bracket access.
        property: Box<Self>,
        /// `true` for bracket access, `false` for dot access.
        computed: bool,
        /// Line number in the source code.
        line: usize,
    },
    /// A call expression such as `f(1, 2)`.
    Call {
        /// The expression being called.
        caller: Box<Self>,
        /// Argument expressions in source order.
        args: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use ryx::ast::Expr;
    ///
    /// let expr = Expr::Identifier { symbol: "x".to_string(),
    ///                               line:   5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::NumericLiteral { line, .. }
            | Self::Identifier { line, .. }
            | Self::Binary { line, .. }
            | Self::Assignment { line, .. }
            | Self::ObjectLiteral { line, .. }
            | Self::Member { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// A single entry of an object literal.
///
/// A property with no value expression is shorthand: `{ a }` binds the key
/// `a` to whatever the variable `a` holds when the literal is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The property key.
    pub key: String,
    /// The value expression, or `None` for shorthand entries.
    pub value: Option<Expr>,
    /// Line number in the source code.
    pub line: usize,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}
