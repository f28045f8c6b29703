use crate::term::Triple;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RDFEthosError {
    #[error("presentation verification failed: {0}")]
    VerificationFailed(String),
    #[error("invalid proof: step references a rule that does not exist")]
    BadRuleIndex,
    #[error("invalid proof: instantiations do not match the rule's variables")]
    BadRuleApplication,
    #[error("unverified assumption: {0}")]
    UnverifiedAssumption(Triple),
    #[error("composite claims are not derivable from the presented credentials")]
    CannotProve,
    #[error("rule variable `{0}` appears in the head but not in the body")]
    UnboundRuleVariable(String),
    #[error("credential contains no issuer")]
    MissingIssuer,
    #[error("credential issuer must be an IRI")]
    InvalidIssuer,
    #[error("malformed presentation: {0}")]
    MalformedPresentation(String),
    #[error("attached logic proof must be a JSON literal")]
    MalformedProof,
    #[error(transparent)]
    TtlParse(#[from] oxttl::TurtleParseError),
    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),
}
