use super::{ast::Statement, lex::tokenize, parse::parse_statement, Error, LineNumber};

/// One numbered line of program source. A line number with nothing after
/// it carries no statement and deletes that line when entered.
#[derive(Debug, PartialEq)]
pub struct Line {
    number: LineNumber,
    statement: Option<Statement>,
}

impl Line {
    /// Returns `None` for a blank line.
    pub fn parse(s: &str) -> Result<Option<Line>, Error> {
        let tokens = tokenize(s.trim_end_matches(|c| c == '\r' || c == '\n'));
        let number = match tokens.first() {
            None => return Ok(None),
            Some(token) => token.to_line_number()?,
        };
        let statement = if tokens.len() > 1 {
            match parse_statement(&tokens[1..]) {
                Ok(statement) => Some(statement),
                Err(e) => return Err(e.in_line_number(number)),
            }
        } else {
            None
        };
        Ok(Some(Line { number, statement }))
    }

    pub fn into_parts(self) -> (LineNumber, Option<Statement>) {
        (self.number, self.statement)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.statement {
            Some(statement) => write!(f, "{} {}", self.number, statement),
            None => write!(f, "{}", self.number),
        }
    }
}
