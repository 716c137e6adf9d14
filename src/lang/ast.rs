use super::{LineNumber, Token};

const TREE_INDENT: usize = 4;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Rem(String),
    Let(String, Expression),
    Print(Expression),
    Input(String),
    Goto(LineNumber),
    If(Expression, Comparator, Expression, LineNumber),
    End,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Constant(i32),
    Identifier(String),
    Compound(Operator, Box<Expression>, Box<Expression>),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Comparator {
    Less,
    Greater,
    Equal,
}

impl Operator {
    pub fn from_token(token: &Token) -> Option<Operator> {
        use Operator::*;
        match token.as_str() {
            "+" => Some(Add),
            "-" => Some(Subtract),
            "*" => Some(Multiply),
            "/" => Some(Divide),
            "**" => Some(Power),
            _ => None,
        }
    }
}

impl Comparator {
    pub fn from_token(token: &Token) -> Option<Comparator> {
        use Comparator::*;
        match token.as_str() {
            "<" => Some(Less),
            ">" => Some(Greater),
            "=" => Some(Equal),
            _ => None,
        }
    }

    pub fn holds(self, lhs: i32, rhs: i32) -> bool {
        use Comparator::*;
        match self {
            Less => lhs < rhs,
            Greater => lhs > rhs,
            Equal => lhs == rhs,
        }
    }
}

impl Expression {
    pub fn compound(op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        Expression::Compound(op, Box::new(lhs), Box::new(rhs))
    }

    /// One line per node, children indented one level deeper than their parent.
    pub fn tree(&self, level: usize) -> String {
        let prefix = " ".repeat(level * TREE_INDENT);
        match self {
            Expression::Constant(_) | Expression::Identifier(_) => format!("{}{}\n", prefix, self),
            Expression::Compound(op, lhs, rhs) => format!(
                "{}{}\n{}{}",
                prefix,
                op,
                lhs.tree(level + 1),
                rhs.tree(level + 1)
            ),
        }
    }
}

impl Statement {
    pub fn tree(&self) -> String {
        let indent = " ".repeat(TREE_INDENT);
        use Statement::*;
        match self {
            Rem(content) => format!("REM\n{}{}\n", indent, content),
            Let(name, expr) => format!("LET =\n{}{}\n{}", indent, name, expr.tree(1)),
            Print(expr) => format!("PRINT\n{}", expr.tree(1)),
            Input(name) => format!("INPUT\n{}{}\n", indent, name),
            Goto(line) => format!("GOTO\n{}{}\n", indent, line),
            If(lhs, cmp, rhs, line) => format!(
                "IF THEN\n{}{}{}\n{}{}{}\n",
                lhs.tree(1),
                indent,
                cmp,
                rhs.tree(1),
                indent,
                line
            ),
            End => "END\n".to_string(),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Add => write!(f, "+"),
            Subtract => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Power => write!(f, "**"),
        }
    }
}

impl std::fmt::Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Comparator::*;
        match self {
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
            Equal => write!(f, "="),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Constant(n) => write!(f, "{}", n),
            Identifier(name) => write!(f, "{}", name),
            Compound(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Rem(content) => write!(f, "REM {}", content),
            Let(name, expr) => write!(f, "LET {} = {}", name, expr),
            Print(expr) => write!(f, "PRINT {}", expr),
            Input(name) => write!(f, "INPUT {}", name),
            Goto(line) => write!(f, "GOTO {}", line),
            If(lhs, cmp, rhs, line) => write!(f, "IF {} {} {} THEN {}", lhs, cmp, rhs, line),
            End => write!(f, "END"),
        }
    }
}
