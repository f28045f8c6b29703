use oxrdf::{BlankNodeRef, LiteralRef, NamedNodeRef, SubjectRef, TermRef, TripleRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// a claim-graph node; blank labels are opaque and local to their graph,
/// never to be read as IRIs
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    Iri(String),
    Blank(String),
    Literal {
        value: String,
        datatype: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    pub fn blank(label: impl Into<String>) -> Self {
        Self::Blank(label.into())
    }

    pub fn literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            datatype: datatype.into(),
            language: None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::Blank(label) => write!(f, "_:{label}"),
            Self::Literal {
                value,
                language: Some(language),
                ..
            } => write!(f, "\"{value}\"@{language}"),
            Self::Literal {
                value, datatype, ..
            } => write!(f, "\"{value}\"^^<{datatype}>"),
        }
    }
}

impl From<NamedNodeRef<'_>> for Term {
    fn from(node: NamedNodeRef<'_>) -> Self {
        Self::Iri(node.as_str().to_string())
    }
}

impl From<BlankNodeRef<'_>> for Term {
    fn from(node: BlankNodeRef<'_>) -> Self {
        Self::Blank(node.as_str().to_string())
    }
}

impl From<LiteralRef<'_>> for Term {
    fn from(literal: LiteralRef<'_>) -> Self {
        Self::Literal {
            value: literal.value().to_string(),
            datatype: literal.datatype().as_str().to_string(),
            language: literal.language().map(ToString::to_string),
        }
    }
}

impl From<SubjectRef<'_>> for Term {
    fn from(subject: SubjectRef<'_>) -> Self {
        match subject {
            SubjectRef::NamedNode(n) => n.into(),
            SubjectRef::BlankNode(b) => b.into(),
        }
    }
}

impl From<TermRef<'_>> for Term {
    fn from(term: TermRef<'_>) -> Self {
        match term {
            TermRef::NamedNode(n) => n.into(),
            TermRef::BlankNode(b) => b.into(),
            TermRef::Literal(l) => l.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[Term; 3]", into = "[Term; 3]")]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl From<[Term; 3]> for Triple {
    fn from([subject, predicate, object]: [Term; 3]) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl From<Triple> for [Term; 3] {
    fn from(triple: Triple) -> Self {
        [triple.subject, triple.predicate, triple.object]
    }
}

impl From<TripleRef<'_>> for Triple {
    fn from(triple: TripleRef<'_>) -> Self {
        Self {
            subject: triple.subject.into(),
            predicate: triple.predicate.into(),
            object: triple.object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}
