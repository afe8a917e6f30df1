/// Default service endpoints

pub const DEFAULT_BANK_ACCOUNTS_URL: &str = "https://lpcloud-project-1.ew.r.appspot.com/";
pub const DEFAULT_LOAN_APPROVAL_URL: &str = "https://lpro-cloud-loan-approval-1.herokuapp.com/";
pub const DEFAULT_APPROVALS_URL: &str = "https://lp-cloud-app-manager-1.ew.r.appspot.com/";

/// Environment variables that override the default endpoints

pub const BANK_ACCOUNTS_URL_VAR: &str = "BANK_ACCOUNTS_URL";
pub const LOAN_APPROVAL_URL_VAR: &str = "LOAN_APPROVAL_URL";
pub const APPROVALS_URL_VAR: &str = "APPROVALS_URL";

/// Demo client values

pub const DEMO_CLIENT_NAME: &str = "Test";
pub const DEMO_OPENING_BALANCE: u64 = 250_000;
pub const DEMO_SMALL_LOAN: u64 = 8_000;
pub const DEMO_LARGE_LOAN: u64 = 12_000;
