use crate::{
    claim_graph::ClaimGraph,
    common::{get_claims_from_json, get_dataset_from_nquads, get_rules_from_json},
    context::LOGIC_V1,
    error::RDFEthosError,
    prove::prove,
    rule::Rule,
    term::Triple,
    translate::translate,
    validate::{validate, RuleApplication, ValidatedClaims},
    vc::decompose_vp,
};
use log::debug;
use oxrdf::{Dataset, TermRef};

/// external signature-suite oracle
pub trait PresentationVerifier {
    fn verify(
        &self,
        presentation: &Dataset,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// verify a presentation and return every claim it soundly conveys
pub fn check_soundness(
    verifier: &impl PresentationVerifier,
    presentation: &Dataset,
    rules: &[Rule],
) -> Result<ClaimGraph, RDFEthosError> {
    verifier
        .verify(presentation)
        .map_err(|e| RDFEthosError::VerificationFailed(e.to_string()))?;
    let facts = translate(presentation)?;
    let proof = extract_logic_proof(presentation)?;
    debug!("replaying attached proof with {} step(s)", proof.len());
    let ValidatedClaims { assumed, implied } = validate(rules, &proof)?;
    for claim in assumed {
        if !facts.contains(&claim) {
            return Err(RDFEthosError::UnverifiedAssumption(claim));
        }
    }
    // implied claims only mention terms from the proof's instantiations, so
    // they live in the translation's blank scope already
    let mut claims = facts;
    claims.extend(implied);
    Ok(claims)
}

/// derive a proof of `goals` from the claims the presentation translates to
pub fn prove_composite(
    presentation: &Dataset,
    goals: &[Triple],
    rules: &[Rule],
) -> Result<Vec<RuleApplication>, RDFEthosError> {
    let premises = translate(presentation)?;
    prove(&premises, goals, rules)
}

fn extract_logic_proof(presentation: &Dataset) -> Result<Vec<RuleApplication>, RDFEthosError> {
    let metadata = decompose_vp(presentation)?.metadata;
    match metadata.iter().find(|t| t.predicate == LOGIC_V1) {
        None => Ok(vec![]),
        Some(triple) => match triple.object {
            TermRef::Literal(literal) => Ok(serde_json::from_str(literal.value())?),
            _ => Err(RDFEthosError::MalformedProof),
        },
    }
}

pub fn check_soundness_string(
    verifier: &impl PresentationVerifier,
    presentation: &str,
    rules: &str,
) -> Result<String, RDFEthosError> {
    let presentation = get_dataset_from_nquads(presentation)?;
    let rules = get_rules_from_json(rules)?;
    let claims: Vec<Triple> = check_soundness(verifier, &presentation, &rules)?
        .into_iter()
        .collect();
    Ok(serde_json::to_string(&claims)?)
}

pub fn prove_composite_string(
    presentation: &str,
    goals: &str,
    rules: &str,
) -> Result<String, RDFEthosError> {
    let presentation = get_dataset_from_nquads(presentation)?;
    let goals = get_claims_from_json(goals)?;
    let rules = get_rules_from_json(rules)?;
    let proof = prove_composite(&presentation, &goals, &rules)?;
    Ok(serde_json::to_string(&proof)?)
}
