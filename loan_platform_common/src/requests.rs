use crate::constants::{DEMO_CLIENT_NAME, DEMO_OPENING_BALANCE};
use crate::types::Risk;
use serde::{Deserialize, Serialize};

/// **A bank account, as stored by the bank-accounts service**
///
/// Sent as the JSON body of `PUT /` to add or update an account.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BankAccount {
    pub montant: u64,
    pub nom: String,
    pub prenom: String,
    pub risk: Risk,
}

impl BankAccount {
    pub fn new(nom: &str, prenom: &str, montant: u64, risk: Risk) -> Self {
        Self {
            montant,
            nom: nom.to_string(),
            prenom: prenom.to_string(),
            risk,
        }
    }

    /// The low-risk test client the demo script registers.
    pub fn demo() -> Self {
        Self::new(
            DEMO_CLIENT_NAME,
            DEMO_CLIENT_NAME,
            DEMO_OPENING_BALANCE,
            Risk::Low,
        )
    }
}

/// **Query of the loan-approval service**
///
/// GET /?nom=Test&montant=8000
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LoanApprovalRequest {
    pub nom: String,
    pub montant: u64,
}

impl LoanApprovalRequest {
    pub fn new(nom: &str, montant: u64) -> Self {
        Self {
            nom: nom.to_string(),
            montant,
        }
    }
}

/// A single decision recorded by the approvals service.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Approval {
    pub nom: String,
    pub reponse_manuelle: String,
}

/// The listing returned by `GET /` on the approvals service.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Approvals {
    #[serde(rename = "Approvals")]
    pub approvals: Vec<Approval>,
}
