use crate::{
    claim_graph::ClaimGraph,
    context::{CLAIMS_V1, ISSUER, PROOF, RDF_OBJECT, RDF_PREDICATE, RDF_SUBJECT},
    error::RDFEthosError,
    term::{Term, Triple},
    vc::decompose_vp,
};
use log::debug;
use oxrdf::{dataset::GraphView, Dataset, TermRef, TripleRef};

/// translate an expanded presentation into its explicit-ethos claim graph
pub fn translate(presentation: &Dataset) -> Result<ClaimGraph, RDFEthosError> {
    let vp = decompose_vp(presentation)?;
    let mut claims = ClaimGraph::new();
    for credential in vp.credentials.values() {
        let attributed = translate_credential(credential)?;
        claims.merge(&attributed);
    }
    debug!(
        "translated {} credential(s) into {} attributed claim(s)",
        vp.credentials.len(),
        claims.len()
    );
    Ok(claims)
}

// each content triple (s, p, o) of a credential issued by I becomes
// (I, claimsV1, b) (b, rdf:subject, s) (b, rdf:predicate, p) (b, rdf:object, o)
// around a fresh blank b, so rules can quantify over the attesting issuer
fn translate_credential(credential: &GraphView<'_>) -> Result<ClaimGraph, RDFEthosError> {
    // the credential's proof lives in a linked graph; the link itself is not
    // asserted content either
    let mut content: Vec<TripleRef> = credential
        .iter()
        .filter(|t| t.predicate != PROOF)
        .collect();
    content.sort_by_cached_key(|t| t.to_string());

    let issuer = content
        .iter()
        .find(|t| t.predicate == ISSUER)
        .map(|t| match t.object {
            TermRef::NamedNode(n) => Ok(Term::from(n)),
            _ => Err(RDFEthosError::InvalidIssuer),
        })
        .transpose()?
        .ok_or(RDFEthosError::MissingIssuer)?;

    // reification anchors must be fresh, so content labels are reserved first
    let mut claims = ClaimGraph::new();
    for triple in &content {
        for term in [Term::from(triple.subject), Term::from(triple.object)] {
            if let Term::Blank(label) = term {
                claims.reserve_label(&label);
            }
        }
    }

    for triple in content {
        let Triple {
            subject,
            predicate,
            object,
        } = triple.into();
        let anchor = claims.fresh_blank();
        claims.insert(Triple::new(
            issuer.clone(),
            CLAIMS_V1.into(),
            anchor.clone(),
        ));
        claims.insert(Triple::new(anchor.clone(), RDF_SUBJECT.into(), subject));
        claims.insert(Triple::new(anchor.clone(), RDF_PREDICATE.into(), predicate));
        claims.insert(Triple::new(anchor, RDF_OBJECT.into(), object));
    }
    Ok(claims)
}
