use super::token::Token;

pub fn tokenize(s: &str) -> Vec<Token> {
    BasicLexer::lex(s)
}

fn is_basic_delimiter(c: char) -> bool {
    matches!(c, ' ' | '+' | '-' | '*' | '/' | '<' | '>' | '=' | '(' | ')')
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        BasicLexer {
            chars: s.chars().peekable(),
        }
        .collect()
    }

    fn operator(&mut self) -> Option<Token> {
        let ch = self.chars.next()?;
        if ch == '*' && self.chars.peek() == Some(&'*') {
            self.chars.next();
            return Some(Token::from("**"));
        }
        Some(Token::from(ch.to_string()))
    }

    fn word(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if is_basic_delimiter(*pk) {
                break;
            }
            s.push(*pk);
            self.chars.next();
        }
        Some(Token::from(s))
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pk = *self.chars.peek()?;
            if pk == ' ' {
                self.chars.next();
                continue;
            }
            if is_basic_delimiter(pk) {
                return self.operator();
            }
            return self.word();
        }
    }
}
