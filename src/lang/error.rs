use super::LineNumber;

pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    /// Tags the error with the line it came from. An error that already
    /// knows its line keeps it.
    pub fn in_line_number<T: Into<Option<LineNumber>>>(self, line: T) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: line.into(),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Runtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    IllegalExpression,
    UnmatchedParenthesis,
    IncompleteExpression,
    IllegalNumber,
    IllegalStatement,
    IncompleteStatement,
    IllegalVariable,
    IllegalLineNumber,
    IllegalCommand,
    NotDeclared,
    DivisionByZero,
    Overflow,
    UndefinedLine,
    UnknownStatement,
    Break,
    InternalError,
}

impl ErrorCode {
    pub fn kind(self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            IllegalExpression | UnmatchedParenthesis | IncompleteExpression | IllegalNumber
            | IllegalStatement | IncompleteStatement | IllegalVariable | IllegalLineNumber
            | IllegalCommand => ErrorKind::Parse,
            NotDeclared | DivisionByZero | Overflow | UndefinedLine | UnknownStatement
            | Break | InternalError => ErrorKind::Runtime,
        }
    }

    fn description(self) -> &'static str {
        use ErrorCode::*;
        match self {
            IllegalExpression => "illegal expression",
            UnmatchedParenthesis => "unmatched parenthesis",
            IncompleteExpression => "incomplete expression",
            IllegalNumber => "illegal number",
            IllegalStatement => "illegal statement",
            IncompleteStatement => "incomplete statement",
            IllegalVariable => "illegal variable name",
            IllegalLineNumber => "illegal line number",
            IllegalCommand => "illegal command",
            NotDeclared => "not declared",
            DivisionByZero => "divide by zero",
            Overflow => "overflow",
            UndefinedLine => "no matching line number",
            UnknownStatement => "unknown statement",
            Break => "break",
            InternalError => "internal error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ErrorKind::Parse => write!(f, "parse error"),
            ErrorKind::Runtime => write!(f, "runtime error"),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.code.description())?;
        if let Some(line_number) = self.line_number {
            write!(f, " in {}", line_number)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
