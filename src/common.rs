use crate::{
    error::RDFEthosError,
    rule::Rule,
    term::Triple,
    validate::RuleApplication,
};
use oxrdf::Dataset;
use oxttl::NQuadsParser;

pub fn get_dataset_from_nquads(nquads: &str) -> Result<Dataset, RDFEthosError> {
    let quads = NQuadsParser::new()
        .for_reader(nquads.as_bytes())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Dataset::from_iter(quads))
}

pub fn get_rules_from_json(json: &str) -> Result<Vec<Rule>, RDFEthosError> {
    Ok(serde_json::from_str(json)?)
}

pub fn get_proof_from_json(json: &str) -> Result<Vec<RuleApplication>, RDFEthosError> {
    Ok(serde_json::from_str(json)?)
}

pub fn get_claims_from_json(json: &str) -> Result<Vec<Triple>, RDFEthosError> {
    Ok(serde_json::from_str(json)?)
}
