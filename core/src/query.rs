use crate::error::{IndexError, MalformedQuery};
use crate::persist::load_index;
use crate::tokenizer::normalize_term;
use crate::{DocumentId, InvertedIndex};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Term(String),
    /// `NOT term`, resolved to the complement when the query is evaluated.
    Not(String),
}

/// A parsed query: `operands[0] (operators[i] operands[i + 1])*`, evaluated
/// strictly left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    operands: Vec<Operand>,
    operators: Vec<Operator>,
}

fn keyword(token: &str) -> Option<&'static str> {
    match token.to_ascii_uppercase().as_str() {
        "AND" => Some("AND"),
        "OR" => Some("OR"),
        "NOT" => Some("NOT"),
        _ => None,
    }
}

impl Query {
    pub fn parse(input: &str) -> Result<Self, MalformedQuery> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let mut operands = Vec::new();
        let mut operators = Vec::new();
        let mut expect_operand = true;
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i];
            match keyword(token) {
                Some(op @ ("AND" | "OR")) => {
                    if expect_operand {
                        return Err(MalformedQuery::MissingLeftOperand { op: op.to_string(), pos: i });
                    }
                    operators.push(if op == "AND" { Operator::And } else { Operator::Or });
                    expect_operand = true;
                }
                Some(_) => {
                    if !expect_operand {
                        return Err(MalformedQuery::MissingOperator { token: token.to_string(), pos: i });
                    }
                    // the next token is always a term here, even if it spells a keyword
                    let term = tokens.get(i + 1).ok_or(MalformedQuery::DanglingNot { pos: i })?;
                    operands.push(Operand::Not(normalize_term(term)));
                    expect_operand = false;
                    i += 1;
                }
                None => {
                    if !expect_operand {
                        return Err(MalformedQuery::MissingOperator { token: token.to_string(), pos: i });
                    }
                    operands.push(Operand::Term(normalize_term(token)));
                    expect_operand = false;
                }
            }
            i += 1;
        }
        if operands.is_empty() {
            return Err(MalformedQuery::Empty);
        }
        if expect_operand {
            let op = match operators.last() {
                Some(Operator::And) => "AND",
                _ => "OR",
            };
            return Err(MalformedQuery::TrailingOperator { op: op.to_string() });
        }
        Ok(Self { operands, operators })
    }

    pub fn operands(&self) -> &[Operand] { &self.operands }

    pub fn operators(&self) -> &[Operator] { &self.operators }
}

/// Boolean evaluator over a loaded, read-only index.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    index: InvertedIndex,
    all_docs: BTreeSet<DocumentId>,
}

impl QueryEngine {
    pub fn new(index: InvertedIndex) -> Self {
        let all_docs = index.all_docs();
        Self { index, all_docs }
    }

    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let engine = Self::new(load_index(path)?);
        tracing::info!(docs = engine.all_docs.len(), "query engine ready");
        Ok(engine)
    }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn all_docs(&self) -> &BTreeSet<DocumentId> { &self.all_docs }

    pub fn evaluate(&self, input: &str) -> Result<BTreeSet<DocumentId>, MalformedQuery> {
        Ok(self.evaluate_query(&Query::parse(input)?))
    }

    pub fn evaluate_query(&self, query: &Query) -> BTreeSet<DocumentId> {
        let mut operands = query.operands.iter().map(|o| self.resolve(o));
        let mut result = operands.next().unwrap_or_default();
        for (op, right) in query.operators.iter().zip(operands) {
            result = match op {
                Operator::And => result.intersection(&right).cloned().collect(),
                Operator::Or => result.union(&right).cloned().collect(),
            };
        }
        result
    }

    fn postings(&self, term: &str) -> BTreeSet<DocumentId> {
        self.index.postings(term).cloned().unwrap_or_default()
    }

    fn resolve(&self, operand: &Operand) -> BTreeSet<DocumentId> {
        match operand {
            Operand::Term(t) => self.postings(t),
            Operand::Not(t) => self.all_docs.difference(&self.postings(t)).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::parse_index;

    fn engine() -> QueryEngine {
        QueryEngine::new(parse_index("canada: doc1, doc2\nontario: doc2, doc3\nquebec: doc4\n").unwrap())
    }

    fn ids(xs: &[&str]) -> BTreeSet<DocumentId> { xs.iter().map(|x| DocumentId::from(*x)).collect() }

    #[test]
    fn scenario() {
        let e = engine();
        assert_eq!(e.evaluate("canada AND NOT ontario").unwrap(), ids(&["doc1"]));
        assert_eq!(e.evaluate("canada OR ontario").unwrap(), ids(&["doc1", "doc2", "doc3"]));
        assert!(e.evaluate("missingterm").unwrap().is_empty());
    }

    #[test]
    fn not_is_complement() {
        let e = engine();
        assert_eq!(e.evaluate("NOT canada").unwrap(), ids(&["doc3", "doc4"]));
        assert_eq!(e.evaluate("NOT missingterm").unwrap(), *e.all_docs());
        for t in ["canada", "ontario", "quebec", "nothing"] {
            assert_eq!(e.evaluate(&format!("{t} OR NOT {t}")).unwrap(), *e.all_docs());
        }
    }

    #[test]
    fn left_to_right_without_precedence() {
        let e = engine();
        // (canada AND ontario) OR quebec
        assert_eq!(e.evaluate("canada AND ontario OR quebec").unwrap(), ids(&["doc2", "doc4"]));
        // (quebec OR canada) AND ontario, not quebec OR (canada AND ontario)
        assert_eq!(e.evaluate("quebec OR canada AND ontario").unwrap(), ids(&["doc2"]));
    }

    #[test]
    fn keywords_and_terms_are_case_insensitive() {
        let e = engine();
        assert_eq!(e.evaluate("Canada and not ONTARIO").unwrap(), ids(&["doc1"]));
    }

    #[test]
    fn not_takes_the_next_token_as_a_term() {
        let e = QueryEngine::new(parse_index("canada: doc1, doc2\nor: doc2\nquebec: doc4\n").unwrap());
        assert_eq!(e.evaluate("canada AND NOT or").unwrap(), ids(&["doc1"]));
        assert_eq!(e.evaluate("NOT AND").unwrap(), *e.all_docs());
        assert_eq!(
            Query::parse("NOT NOT canada"),
            Err(MalformedQuery::MissingOperator { token: "canada".into(), pos: 2 })
        );
    }

    #[test]
    fn parse_builds_operand_and_operator_queues() {
        let q = Query::parse("a AND NOT b OR c").unwrap();
        assert_eq!(
            q.operands(),
            &[Operand::Term("a".into()), Operand::Not("b".into()), Operand::Term("c".into())]
        );
        assert_eq!(q.operators(), &[Operator::And, Operator::Or]);
    }

    #[test]
    fn malformed_queries_are_rejected() {
        assert_eq!(Query::parse("   "), Err(MalformedQuery::Empty));
        assert!(matches!(Query::parse("AND canada"), Err(MalformedQuery::MissingLeftOperand { pos: 0, .. })));
        assert!(matches!(Query::parse("canada ontario"), Err(MalformedQuery::MissingOperator { pos: 1, .. })));
        assert!(matches!(Query::parse("canada AND OR ontario"), Err(MalformedQuery::MissingLeftOperand { pos: 2, .. })));
        assert!(matches!(Query::parse("canada AND"), Err(MalformedQuery::TrailingOperator { .. })));
        assert_eq!(Query::parse("canada AND NOT"), Err(MalformedQuery::DanglingNot { pos: 2 }));
        assert!(matches!(Query::parse("canada NOT ontario"), Err(MalformedQuery::MissingOperator { pos: 1, .. })));
    }
}
