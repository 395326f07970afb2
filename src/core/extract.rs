use std::collections::BTreeMap;

use super::error::ReportError;
use super::resolve::resolve;
use super::tree::TreeNode;
use super::types::{
    AccountAddress, AccountRecord, CreditCardInfo, CreditReport, Identity, ReportSummary,
};

/// The single top-level key wrapping an entire bureau response.
const ENVELOPE: &str = "INProfileResponse";

/// Stand-in for absent subtrees, so extraction degrades to empty fields
/// instead of branching at every lookup.
static EMPTY: TreeNode = TreeNode::Map(BTreeMap::new());

/// Normalize a parsed bureau response into a [`CreditReport`].
///
/// The three sections are extracted independently: a subtree missing from
/// one never disturbs the others, and within the account list a malformed
/// element never disturbs its siblings. Account order mirrors source
/// order exactly.
///
/// Total function: a root that is not a mapping, or one without the
/// response envelope, produces a fully empty but well-shaped report.
/// Callers that want that case surfaced use [`try_normalize`] instead.
pub fn normalize(root: &TreeNode) -> CreditReport {
    let envelope = root.get(ENVELOPE).unwrap_or(&EMPTY);
    CreditReport {
        identity: identity(envelope),
        summary: summary(envelope),
        accounts: accounts(envelope),
    }
}

/// Like [`normalize`], but rejects a document with no recognizable
/// envelope instead of masking it as an all-empty report.
pub fn try_normalize(root: &TreeNode) -> Result<CreditReport, ReportError> {
    if root.get(ENVELOPE).is_none() {
        return Err(ReportError::MissingEnvelope);
    }
    Ok(normalize(root))
}

/// Descend one named child, then unwrap the singleton sequence around it.
fn step<'a>(node: &'a TreeNode, key: &str) -> Option<&'a TreeNode> {
    node.get(key)?.first()
}

/// Walk a chain of singleton-wrapped children, falling back to an empty
/// mapping as soon as a link is missing.
fn descend<'a>(node: &'a TreeNode, keys: &[&str]) -> &'a TreeNode {
    let mut current = node;
    for key in keys {
        match step(current, key) {
            Some(child) => current = child,
            None => return &EMPTY,
        }
    }
    current
}

fn identity(envelope: &TreeNode) -> Identity {
    let applicant = descend(
        envelope,
        &[
            "Current_Application",
            "Current_Application_Details",
            "Current_Applicant_Details",
        ],
    );
    let holder = descend(
        envelope,
        &["CAIS_Account", "CAIS_Account_DETAILS", "CAIS_Holder_Details"],
    );
    let score = descend(envelope, &["SCORE"]);

    let first_name = resolve(applicant, "First_Name");
    let last_name = resolve(applicant, "Last_Name");

    Identity {
        name: format!("{first_name} {last_name}").trim().to_string(),
        mobile_number: resolve(applicant, "MobilePhoneNumber"),
        pan: resolve(holder, "Income_TAX_PAN"),
        credit_score: resolve(score, "BureauScore"),
    }
}

fn summary(envelope: &TreeNode) -> ReportSummary {
    let cais_summary = descend(envelope, &["CAIS_Account", "CAIS_Summary"]);
    let credit_account = descend(cais_summary, &["Credit_Account"]);
    let outstanding = descend(cais_summary, &["Total_Outstanding_Balance"]);
    // Sibling of the account collection, not nested under it.
    let caps_summary = descend(envelope, &["TotalCAPS_Summary"]);

    ReportSummary {
        total_accounts: resolve(credit_account, "CreditAccountTotal"),
        active_accounts: resolve(credit_account, "CreditAccountActive"),
        closed_accounts: resolve(credit_account, "CreditAccountClosed"),
        current_balance_amount: resolve(outstanding, "Outstanding_Balance_All"),
        secured_accounts_amount: resolve(outstanding, "Outstanding_Balance_Secured"),
        unsecured_accounts_amount: resolve(outstanding, "Outstanding_Balance_UnSecured"),
        last7_days_credit_enquiries: resolve(caps_summary, "TotalCAPSLast7Days"),
    }
}

fn accounts(envelope: &TreeNode) -> Vec<AccountRecord> {
    let details = step(envelope, "CAIS_Account")
        .and_then(|collection| collection.get("CAIS_Account_DETAILS"));
    let Some(TreeNode::Seq(items)) = details else {
        return Vec::new();
    };
    items.iter().map(account).collect()
}

fn account(detail: &TreeNode) -> AccountRecord {
    // An account may list several historical addresses; only the primary
    // entry is surfaced.
    let address = descend(detail, &["CAIS_Holder_Address_Details"]);

    AccountRecord {
        credit_card: CreditCardInfo {
            bank_name: resolve(detail, "Subscriber_Name"),
            account_number: resolve(detail, "Account_Number"),
            account_type: resolve(detail, "Account_Type"),
            portfolio_type: resolve(detail, "Portfolio_Type"),
        },
        open_date: resolve(detail, "Open_Date"),
        closed_date: resolve(detail, "Date_Closed"),
        credit_limit: resolve(detail, "Credit_Limit_Amount"),
        highest_credit: resolve(detail, "Highest_Credit_or_Original_Loan_Amount"),
        current_balance: resolve(detail, "Current_Balance"),
        amount_overdue: resolve(detail, "Amount_Past_Due"),
        account_status: resolve(detail, "Account_Status"),
        date_reported: resolve(detail, "Date_Reported"),
        address: AccountAddress {
            line1: resolve(address, "First_Line_Of_Address_non_normalized"),
            line2: resolve(address, "Second_Line_Of_Address_non_normalized"),
            line3: resolve(address, "Third_Line_Of_Address_non_normalized"),
            city: resolve(address, "City_non_normalized"),
            state: resolve(address, "State_non_normalized"),
            pincode: resolve(address, "ZIP_Postal_Code_non_normalized"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descend_falls_back_to_empty_mapping() {
        let node = TreeNode::map([(
            "A",
            TreeNode::seq([TreeNode::map([("B", TreeNode::seq([TreeNode::text("x")]))])]),
        )]);
        assert_eq!(descend(&node, &["A", "B"]), &TreeNode::text("x"));
        assert_eq!(descend(&node, &["A", "missing"]), &EMPTY);
        assert_eq!(descend(&node, &["missing"]), &EMPTY);
    }

    #[test]
    fn step_requires_the_sequence_wrapper() {
        // A child that is not sequence-wrapped does not satisfy the
        // source convention and is treated as absent.
        let node = TreeNode::map([("A", TreeNode::text("bare"))]);
        assert!(step(&node, "A").is_none());
    }
}
