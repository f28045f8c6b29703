use crate::{
    context::VERIFIABLE_CREDENTIAL,
    error::RDFEthosError,
};
use oxrdf::{dataset::GraphView, Dataset, GraphName, GraphNameRef, TermRef};
use std::{cmp::Ordering, collections::BTreeMap};

// graph names ordered so credential graphs are visited identically on the
// holder and verifier sides
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct OrderedGraphName(GraphName);

impl Ord for OrderedGraphName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.to_string().cmp(&other.0.to_string())
    }
}

impl PartialOrd for OrderedGraphName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub(crate) struct VpGraphs<'a> {
    pub metadata: GraphView<'a>,
    pub credentials: BTreeMap<OrderedGraphName, GraphView<'a>>,
}

/// decompose a VP dataset into its wrapper graph and per-credential graphs
pub(crate) fn decompose_vp(vp: &Dataset) -> Result<VpGraphs<'_>, RDFEthosError> {
    let metadata = vp.graph(GraphNameRef::DefaultGraph);
    let mut credentials = BTreeMap::new();
    for triple in metadata.iter() {
        if triple.predicate != VERIFIABLE_CREDENTIAL {
            continue;
        }
        let name: GraphNameRef = match triple.object {
            TermRef::NamedNode(n) => n.into(),
            TermRef::BlankNode(b) => b.into(),
            TermRef::Literal(_) => {
                return Err(RDFEthosError::MalformedPresentation(
                    "a presented credential must be a named graph, not a literal".to_string(),
                ))
            }
        };
        credentials.insert(OrderedGraphName(name.into_owned()), vp.graph(name));
    }
    Ok(VpGraphs {
        metadata,
        credentials,
    })
}
