use super::{ast::*, token::*, Error};

type Result<T> = std::result::Result<T, Error>;

pub fn parse_expression(tokens: &[Token]) -> Result<Expression> {
    ExpressionParser::parse(tokens)
}

pub fn parse_statement(tokens: &[Token]) -> Result<Statement> {
    let word = match tokens.first() {
        Some(token) => Word::from_token(token),
        None => None,
    };
    match word {
        Some(word) => Statement::for_word(word, tokens),
        None => Err(error!(IllegalStatement)),
    }
}

/// Rewrites a leading sign as a subtraction from zero. Applies at the start
/// of the expression and right after `(` when a number or name follows.
fn unary_prefix(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut handled = Vec::with_capacity(tokens.len() + 1);
    for (index, token) in tokens.iter().enumerate() {
        let next = tokens.get(index + 1);
        if token == "(" && next.map_or(false, |t| t == ")") {
            return Err(error!(IllegalExpression; "empty parentheses"));
        }
        if (token == "+" || token == "-")
            && (index == 0 || tokens[index - 1] == "(")
            && next.map_or(false, |t| t.is_number() || t.is_name())
        {
            handled.push(Token::from("0"));
        }
        handled.push(token.clone());
    }
    Ok(handled)
}

/// Deepest tree the parser will build. Evaluation and printing recurse once
/// per level.
const MAX_EXPRESSION_DEPTH: usize = 256;

struct ExpressionParser {
    operators: Vec<Token>,
    // Each operand carries the depth of its tree.
    operands: Vec<(Expression, usize)>,
}

impl ExpressionParser {
    fn parse(tokens: &[Token]) -> Result<Expression> {
        let tokens = unary_prefix(tokens)?;
        let mut parse = ExpressionParser {
            operators: vec![],
            operands: vec![],
        };
        for token in tokens {
            parse.push(token)?;
        }
        while !parse.operators.is_empty() {
            parse.merge()?;
        }
        // A count other than one comes from juxtaposed groups such as (1)(2).
        if parse.operands.len() != 1 {
            return Err(error!(IllegalExpression));
        }
        match parse.operands.pop() {
            Some((expr, _)) => Ok(expr),
            None => Err(error!(IllegalExpression)),
        }
    }

    fn top(&self) -> Option<&Token> {
        self.operators.last()
    }

    fn top_is_open(&self) -> bool {
        self.top().map_or(false, |t| t == "(")
    }

    fn push(&mut self, token: Token) -> Result<()> {
        if token.is_number() {
            self.operands.push((Expression::Constant(token.to_value()?), 1));
        } else if token.is_name() {
            self.operands.push((Expression::Identifier(token.to_string()), 1));
        } else if token == "(" || token.precedence() == Some(LEVEL_3) {
            self.operators.push(token);
        } else if token.precedence() == Some(LEVEL_1) {
            while self.top().is_some() && !self.top_is_open() {
                self.merge()?;
            }
            self.operators.push(token);
        } else if token.precedence() == Some(LEVEL_2) {
            while let Some(top) = self.top() {
                if top == "(" || top.precedence() == Some(LEVEL_1) {
                    break;
                }
                self.merge()?;
            }
            self.operators.push(token);
        } else if token == ")" {
            while self.top().is_some() && !self.top_is_open() {
                self.merge()?;
            }
            if self.operators.pop().is_none() {
                return Err(error!(UnmatchedParenthesis; "expected \"(\" to match \")\""));
            }
        } else {
            return Err(error!(IllegalExpression; format!("unexpected `{}`", token)));
        }
        Ok(())
    }

    fn merge(&mut self) -> Result<()> {
        let token = match self.operators.pop() {
            Some(token) => token,
            None => return Err(error!(InternalError; "operator stack underflow")),
        };
        if token == "(" {
            return Err(error!(UnmatchedParenthesis; "expected \")\" to match \"(\""));
        }
        let op = match Operator::from_token(&token) {
            Some(op) => op,
            None => return Err(error!(IllegalExpression; format!("unexpected `{}`", token))),
        };
        let (rhs, rhs_depth) = self.operands.pop().ok_or_else(|| error!(IncompleteExpression))?;
        let (lhs, lhs_depth) = self.operands.pop().ok_or_else(|| error!(IncompleteExpression))?;
        let depth = 1 + lhs_depth.max(rhs_depth);
        if depth > MAX_EXPRESSION_DEPTH {
            return Err(error!(IllegalExpression; "expression too complex"));
        }
        self.operands.push((Expression::compound(op, lhs, rhs), depth));
        Ok(())
    }
}

impl Statement {
    fn for_word(word: Word, tokens: &[Token]) -> Result<Statement> {
        use Word::*;
        match word {
            Rem => Self::r#rem(tokens),
            Let => Self::r#let(tokens),
            Print => Self::r#print(tokens),
            Input => Self::r#input(tokens),
            Goto => Self::r#goto(tokens),
            If => Self::r#if(tokens),
            End => Self::r#end(tokens),
            Then => Err(error!(IllegalStatement; "THEN without IF")),
        }
    }

    fn r#rem(tokens: &[Token]) -> Result<Statement> {
        let content: Vec<&str> = tokens[1..].iter().map(|t| t.as_str()).collect();
        Ok(Statement::Rem(content.join(" ")))
    }

    fn r#let(tokens: &[Token]) -> Result<Statement> {
        if tokens.len() < 4 || tokens[2] != "=" {
            return Err(error!(IncompleteStatement; Word::Let.usage()));
        }
        let name = variable(&tokens[1])?;
        let expr = parse_expression(&tokens[3..])?;
        Ok(Statement::Let(name, expr))
    }

    fn r#print(tokens: &[Token]) -> Result<Statement> {
        if tokens.len() < 2 {
            return Err(error!(IncompleteStatement; Word::Print.usage()));
        }
        Ok(Statement::Print(parse_expression(&tokens[1..])?))
    }

    fn r#input(tokens: &[Token]) -> Result<Statement> {
        if tokens.len() != 2 {
            return Err(error!(IncompleteStatement; Word::Input.usage()));
        }
        Ok(Statement::Input(variable(&tokens[1])?))
    }

    fn r#goto(tokens: &[Token]) -> Result<Statement> {
        if tokens.len() != 2 {
            return Err(error!(IncompleteStatement; Word::Goto.usage()));
        }
        Ok(Statement::Goto(tokens[1].to_line_number()?))
    }

    fn r#if(tokens: &[Token]) -> Result<Statement> {
        let incomplete = || error!(IncompleteStatement; Word::If.usage());
        if tokens.len() < 6 {
            return Err(incomplete());
        }
        let cmp_index = match tokens.iter().skip(1).position(|t| t.is_comparator()) {
            Some(index) => index + 1,
            None => return Err(incomplete()),
        };
        let then_index = match tokens[cmp_index + 1..].iter().position(|t| t == "THEN") {
            Some(index) => index + cmp_index + 1,
            None => return Err(incomplete()),
        };
        if then_index + 2 != tokens.len() {
            return Err(incomplete());
        }
        let cmp = Comparator::from_token(&tokens[cmp_index]).ok_or_else(incomplete)?;
        let lhs = parse_expression(&tokens[1..cmp_index])?;
        let rhs = parse_expression(&tokens[cmp_index + 1..then_index])?;
        let line = tokens[then_index + 1].to_line_number()?;
        Ok(Statement::If(lhs, cmp, rhs, line))
    }

    fn r#end(tokens: &[Token]) -> Result<Statement> {
        if tokens.len() != 1 {
            return Err(error!(IncompleteStatement; Word::End.usage()));
        }
        Ok(Statement::End)
    }
}

fn variable(token: &Token) -> Result<String> {
    if token.is_name() {
        Ok(token.to_string())
    } else {
        Err(error!(IllegalVariable; format!("`{}`", token)))
    }
}
