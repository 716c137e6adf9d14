use crate::error;
use crate::lang::{ast::Statement, Error, Line, LineNumber};
use std::collections::{btree_map::Iter, BTreeMap};
use std::ops::Bound::{Excluded, Unbounded};

type Result<T> = std::result::Result<T, Error>;

/// Program source ordered by line number.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: BTreeMap<LineNumber, Statement>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn insert(
        &mut self,
        line_number: LineNumber,
        statement: Statement,
    ) -> Result<Option<Statement>> {
        if line_number == 0 {
            return Err(error!(IllegalLineNumber; "`0`"));
        }
        Ok(self.source.insert(line_number, statement))
    }

    pub fn remove(&mut self, line_number: LineNumber) -> Option<Statement> {
        self.source.remove(&line_number)
    }

    pub fn get(&self, line_number: LineNumber) -> Option<&Statement> {
        self.source.get(&line_number)
    }

    pub fn first(&self) -> Option<LineNumber> {
        self.source.keys().next().copied()
    }

    pub fn last(&self) -> Option<LineNumber> {
        self.source.keys().next_back().copied()
    }

    pub fn after(&self, line_number: LineNumber) -> Option<LineNumber> {
        self.source
            .range((Excluded(line_number), Unbounded))
            .next()
            .map(|(k, _)| *k)
    }

    /// Finds the target of a jump.
    pub fn resolve(&self, line_number: LineNumber) -> Result<LineNumber> {
        if self.source.contains_key(&line_number) {
            Ok(line_number)
        } else {
            Err(error!(UndefinedLine; format!("line {}", line_number)))
        }
    }

    pub fn lines(&self) -> Iter<'_, LineNumber, Statement> {
        self.source.iter()
    }

    /// Used for loading a new Listing from a file.
    pub fn load_str(&mut self, line: &str) -> Result<()> {
        if let Some(line) = Line::parse(line)? {
            let (number, statement) = line.into_parts();
            match statement {
                Some(statement) => {
                    self.insert(number, statement)?;
                }
                None => {
                    self.remove(number);
                }
            }
        }
        Ok(())
    }

    pub fn list(&self, marker: Option<LineNumber>) -> String {
        let mut s = String::new();
        for (line_number, statement) in self.lines() {
            s.push_str(&format!(
                "{}{} {}\n",
                mark(marker, *line_number),
                line_number,
                statement
            ));
        }
        s
    }

    pub fn tree(&self, marker: Option<LineNumber>) -> String {
        let mut s = String::new();
        for (line_number, statement) in self.lines() {
            s.push_str(&format!(
                "{}{} {}",
                mark(marker, *line_number),
                line_number,
                statement.tree()
            ));
        }
        s
    }
}

fn mark(marker: Option<LineNumber>, line_number: LineNumber) -> char {
    if marker == Some(line_number) {
        '*'
    } else {
        ' '
    }
}
