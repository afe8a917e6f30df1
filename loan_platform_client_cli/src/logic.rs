use crate::config::Endpoints;
use crate::errors::{ScriptError, ScriptResult};
use loan_platform_common::constants::{DEMO_CLIENT_NAME, DEMO_LARGE_LOAN, DEMO_SMALL_LOAN};
use loan_platform_common::{BankAccount, LoanApprovalRequest};
use reqwest::{header, Client, Method, RequestBuilder, Url};
use std::io::Write;

/// Labels printed in front of each response body

pub const BANK_ACCOUNTS_LABEL: &str = "Bank accounts : \n";
pub const ADDING_ACCOUNT_LABEL: &str = "\n Adding a bank account \n";
pub const NEW_LIST_LABEL: &str = "\n New list :\n";
pub const SMALL_LOAN_LABEL: &str = "\n Sending a loan of 8000€ for the test client\n";
pub const LISTING_ACCOUNTS_LABEL: &str = "\n listing Accounts: \n";
pub const LISTING_APPROVALS_LABEL: &str = "\n listing Approvals : \n";
pub const LARGE_LOAN_LABEL: &str = "\n Sending a loan of 12000€ for the test client \n";
pub const RELISTING_APPROVALS_LABEL: &str = "\n Listing Approvals : \n";

/// **A single request against one of the remote services**
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// GET / on the bank-accounts service
    ListBankAccounts,

    /// PUT / on the bank-accounts service
    AddBankAccount(BankAccount),

    /// GET /?nom=..&montant=.. on the loan-approval service
    RequestLoan(LoanApprovalRequest),

    /// GET / on the approvals service
    ListApprovals,
}

impl Action {
    pub fn method(&self) -> Method {
        match self {
            Action::AddBankAccount(_) => Method::PUT,
            _ => Method::GET,
        }
    }

    /// The account registration is fire-and-forget; every other response is printed.
    pub fn prints_response(&self) -> bool {
        !matches!(self, Action::AddBankAccount(_))
    }

    /// The base URL of the service this action targets.
    pub fn endpoint<'a>(&self, endpoints: &'a Endpoints) -> &'a Url {
        match self {
            Action::ListBankAccounts | Action::AddBankAccount(_) => &endpoints.bank_accounts,
            Action::RequestLoan(_) => &endpoints.loan_approval,
            Action::ListApprovals => &endpoints.approvals,
        }
    }

    /// Builds the request, without sending it.
    pub fn request(&self, client: &Client, endpoints: &Endpoints) -> RequestBuilder {
        let builder = client.request(self.method(), self.endpoint(endpoints).clone());

        match self {
            Action::AddBankAccount(account) => builder.json(account),
            Action::RequestLoan(query) => builder.query(query),
            Action::ListBankAccounts | Action::ListApprovals => builder,
        }
    }
}

/// **A scripted step: a label to print, and the request that follows it**
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub label: &'static str,
    pub action: Action,
}

impl Step {
    pub fn new(label: &'static str, action: Action) -> Self {
        Self { label, action }
    }
}

/// **The demo script**
///
/// Registers the test client, then requests a small and a large loan,
/// listing the accounts and the approvals in between.
pub fn demo_script() -> Vec<Step> {
    vec![
        Step::new(BANK_ACCOUNTS_LABEL, Action::ListBankAccounts),
        Step::new(
            ADDING_ACCOUNT_LABEL,
            Action::AddBankAccount(BankAccount::demo()),
        ),
        Step::new(NEW_LIST_LABEL, Action::ListBankAccounts),
        Step::new(
            SMALL_LOAN_LABEL,
            Action::RequestLoan(LoanApprovalRequest::new(DEMO_CLIENT_NAME, DEMO_SMALL_LOAN)),
        ),
        Step::new(LISTING_ACCOUNTS_LABEL, Action::ListBankAccounts),
        Step::new(LISTING_APPROVALS_LABEL, Action::ListApprovals),
        Step::new(
            LARGE_LOAN_LABEL,
            Action::RequestLoan(LoanApprovalRequest::new(DEMO_CLIENT_NAME, DEMO_LARGE_LOAN)),
        ),
        Step::new(RELISTING_APPROVALS_LABEL, Action::ListApprovals),
    ]
}

/// **HTTP client shared by every step**
///
/// Every request carries `Accept: application/json`
/// and `Content-Type: application/json`.
pub struct ScriptClient {
    client: Client,
    endpoints: Endpoints,
}

impl ScriptClient {
    pub fn new(endpoints: Endpoints) -> ScriptResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, endpoints })
    }

    /// **Sends a single request and returns the raw response body**
    ///
    /// # Errors
    /// - Network-level failure, `ScriptError::Http`;
    /// - Any status outside of 2xx, `ScriptError::UnexpectedStatus`.
    pub async fn execute(&self, action: &Action) -> ScriptResult<String> {
        let request = action.request(&self.client, &self.endpoints).build()?;
        log::debug!("{} {}", request.method(), request.url());

        let response = self.client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScriptError::UnexpectedStatus {
                url: response.url().clone(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

/// **Runs the steps in order, writing labels and response bodies to `out`**
///
/// Each label is written before its request is sent.
///
/// The first failing step aborts the run; the steps after it are never sent.
pub async fn run_script<W: Write>(
    client: &ScriptClient,
    steps: &[Step],
    out: &mut W,
) -> ScriptResult<()> {
    log::info!("Running {} steps", steps.len());

    for step in steps {
        write!(out, "{}", step.label)?;

        let body = client.execute(&step.action).await?;

        if step.action.prints_response() {
            write!(out, "{}", body)?;
        } else {
            log::debug!("Discarded response: {}", body);
        }
    }

    out.flush()?;
    log::info!("All steps completed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{demo_script, Action};
    use crate::config::Endpoints;
    use loan_platform_common::BankAccount;
    use reqwest::{Client, Method};

    fn endpoints() -> Endpoints {
        Endpoints::from_lookup(|_| None).unwrap()
    }

    #[test]
    fn test_script_order() {
        let actions = demo_script()
            .into_iter()
            .map(|step| step.action)
            .collect::<Vec<_>>();

        assert_eq!(actions.len(), 8);
        assert_eq!(actions[0], Action::ListBankAccounts);
        assert_eq!(actions[1], Action::AddBankAccount(BankAccount::demo()));
        assert_eq!(actions[2], Action::ListBankAccounts);
        assert!(matches!(actions[3], Action::RequestLoan(_)));
        assert_eq!(actions[4], Action::ListBankAccounts);
        assert_eq!(actions[5], Action::ListApprovals);
        assert!(matches!(actions[6], Action::RequestLoan(_)));
        assert_eq!(actions[7], Action::ListApprovals);
    }

    #[test]
    fn test_script_methods() {
        let script = demo_script();
        let gets = script
            .iter()
            .filter(|step| step.action.method() == Method::GET)
            .count();
        let puts = script
            .iter()
            .filter(|step| step.action.method() == Method::PUT)
            .count();

        assert_eq!(gets, 7);
        assert_eq!(puts, 1);
    }

    #[test]
    fn test_only_the_put_response_is_discarded() {
        let discarded = demo_script()
            .into_iter()
            .filter(|step| !step.action.prints_response())
            .collect::<Vec<_>>();

        assert_eq!(discarded.len(), 1);
        assert_eq!(discarded[0].action.method(), Method::PUT);
    }

    #[test]
    fn test_loan_queries() {
        let client = Client::new();
        let endpoints = endpoints();

        let queries = demo_script()
            .iter()
            .filter(|step| matches!(step.action, Action::RequestLoan(_)))
            .map(|step| {
                let request = step.action.request(&client, &endpoints).build().unwrap();
                assert_eq!(request.url().host_str(), endpoints.loan_approval.host_str());
                request.url().query().map(str::to_string)
            })
            .collect::<Vec<_>>();

        assert_eq!(
            queries,
            vec![
                Some("nom=Test&montant=8000".to_string()),
                Some("nom=Test&montant=12000".to_string()),
            ]
        );
    }

    #[test]
    fn test_add_account_request_carries_payload() {
        let client = Client::new();
        let endpoints = endpoints();

        let request = Action::AddBankAccount(BankAccount::demo())
            .request(&client, &endpoints)
            .build()
            .unwrap();
        let body = request.body().and_then(|body| body.as_bytes()).unwrap();
        let payload: serde_json::Value = serde_json::from_slice(body).unwrap();

        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.url(), &endpoints.bank_accounts);
        assert_eq!(
            payload,
            serde_json::json!({"montant": 250000, "nom": "Test", "prenom": "Test", "risk": "low"})
        );
    }
}
