/// A node of the expression tree.
///
/// The parser folds operator precedence into the shape of the tree, so the
/// evaluator never has to think about it: `2 * 3 + 4` arrives as
/// `Add(Mul(2, 3), 4)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal(f64),
    /// Reference to a variable or a constant by name.
    Variable(String),
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `log(8, 2)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Argument expressions, in call order.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Builds a binary node from two operands.
    ///
    /// ## Example
    /// ```
    /// use numscript::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(Expr::Literal(1.0), BinaryOperator::Add, Expr::Literal(2.0));
    /// assert!(matches!(sum, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

/// A user function declaration such as `circleArea(r) = PI * r * r`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names in declaration order.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Expr,
    /// Line number in the source code.
    pub line:   usize,
}

impl FunctionDef {
    /// The human readable signature of the declaration, e.g. `f(a,b)`.
    #[must_use]
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, self.params.join(","))
    }
}

/// An introspection or output command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `variables`: list the bindings of the current scope.
    Variables,
    /// `functions`: list every registered function signature.
    Functions,
    /// `constants`: list every constant.
    Constants,
    /// `print(a, b, ...)`: evaluate and emit each argument in order.
    Print(Vec<Expr>),
}

impl Command {
    /// Names that are parsed as commands and therefore cannot be declared.
    pub const NAMES: &'static [&'static str] = &["variables", "functions", "constants", "print"];

    /// Resolves an argument-less command by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "variables" => Some(Self::Variables),
            "functions" => Some(Self::Functions),
            "constants" => Some(Self::Constants),
            _ => None,
        }
    }
}

/// Represents a top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An introspection or output command.
    Command(Command),
    /// A user-defined function declaration.
    Function(FunctionDef),
    /// A variable declaration using `let`.
    VariableDeclaration {
        /// The name of the variable.
        name:  String,
        /// The value expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A constant declaration using `const`.
    ConstantDeclaration {
        /// The name of the constant.
        name:  String,
        /// The value expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
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
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
