use super::{Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// Precedence of `+` and `-`.
pub const LEVEL_1: usize = 10;
/// Precedence of `*` and `/`.
pub const LEVEL_2: usize = 20;
/// Precedence of `**`.
pub const LEVEL_3: usize = 30;

/// A token is the text of one lexical unit. What kind of token it is
/// gets decided on demand by the classification methods.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token(String);

fn is_basic_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '&'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_number(&self) -> bool {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(c) if is_basic_digit(c) => chars.all(is_basic_digit),
            _ => false,
        }
    }

    pub fn is_name(&self) -> bool {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(c) if is_basic_letter(c) => chars.all(|c| is_basic_letter(c) || is_basic_digit(c)),
            _ => false,
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self.as_str(), "+" | "-" | "*" | "/" | "**" | "(" | ")")
    }

    pub fn is_comparator(&self) -> bool {
        matches!(self.as_str(), "=" | "<" | ">")
    }

    pub fn precedence(&self) -> Option<usize> {
        match self.as_str() {
            "+" | "-" => Some(LEVEL_1),
            "*" | "/" => Some(LEVEL_2),
            "**" => Some(LEVEL_3),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Result<i32> {
        if !self.is_number() {
            return Err(error!(IllegalNumber; format!("`{}` is not a number", self)));
        }
        self.0
            .parse::<i32>()
            .map_err(|_| error!(IllegalNumber; format!("`{}` is out of range", self)))
    }

    pub fn to_line_number(&self) -> Result<LineNumber> {
        if self.is_number() {
            if let Ok(line) = self.0.parse::<LineNumber>() {
                if line > 0 {
                    return Ok(line);
                }
            }
        }
        Err(error!(IllegalLineNumber; format!("`{}`", self)))
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Token {
        Token(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Token {
        Token(s)
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reserved words that begin a statement, plus `THEN`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    End,
    Goto,
    If,
    Input,
    Let,
    Print,
    Rem,
    Then,
}

impl Word {
    pub fn from_token(token: &Token) -> Option<Word> {
        use Word::*;
        match token.as_str() {
            "END" => Some(End),
            "GOTO" => Some(Goto),
            "IF" => Some(If),
            "INPUT" => Some(Input),
            "LET" => Some(Let),
            "PRINT" => Some(Print),
            "REM" => Some(Rem),
            "THEN" => Some(Then),
            _ => None,
        }
    }

    pub fn usage(self) -> &'static str {
        use Word::*;
        match self {
            End => "usage: END",
            Goto => "usage: GOTO <linenumber>",
            If | Then => "usage: IF <expression> <operator> <expression> THEN <linenumber>",
            Input => "usage: INPUT <varname>",
            Let => "usage: LET <varname> = <expression>",
            Print => "usage: PRINT <expression>",
            Rem => "usage: REM [content]",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            End => write!(f, "END"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            Print => write!(f, "PRINT"),
            Rem => write!(f, "REM"),
            Then => write!(f, "THEN"),
        }
    }
}
