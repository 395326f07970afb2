use serde::{Deserialize, Serialize};

/// A normalized credit report: the flat record handed to storage and
/// display layers once extraction has run.
///
/// Every leaf field is always present and always a string. A value the
/// source document omits comes through as `""`, never as a null or a
/// missing key, so consumers can address any field without presence
/// checks. Semantically numeric values (score, counts, amounts) stay
/// verbatim text; converting them is the consumer's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditReport {
    /// Borrower identity.
    pub identity: Identity,
    /// Aggregate account and balance summary.
    pub summary: ReportSummary,
    /// One record per account in the source document, source order
    /// preserved. May be empty, never absent.
    pub accounts: Vec<AccountRecord>,
}

/// Borrower identity, drawn from the applicant subtree and the first
/// account's holder subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// First and last name joined with a single space, then trimmed.
    pub name: String,
    pub mobile_number: String,
    /// Income tax PAN as reported; no format validation is applied here.
    pub pan: String,
    /// Bureau score, verbatim.
    pub credit_score: String,
}

/// Aggregate summary: account counts, outstanding balances, and recent
/// enquiry activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_accounts: String,
    pub active_accounts: String,
    pub closed_accounts: String,
    pub current_balance_amount: String,
    pub secured_accounts_amount: String,
    pub unsecured_accounts_amount: String,
    pub last7_days_credit_enquiries: String,
}

/// A single credit account, loan, or card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    /// Issuer and account identification.
    pub credit_card: CreditCardInfo,
    pub open_date: String,
    pub closed_date: String,
    pub credit_limit: String,
    pub highest_credit: String,
    pub current_balance: String,
    pub amount_overdue: String,
    pub account_status: String,
    pub date_reported: String,
    /// Primary holder address on record for this account.
    pub address: AccountAddress,
}

/// Issuer and account identification for one account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardInfo {
    pub bank_name: String,
    pub account_number: String,
    pub account_type: String,
    pub portfolio_type: String,
}

/// Postal address of an account holder, non-normalized as reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAddress {
    pub line1: String,
    pub line2: String,
    pub line3: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}
