//! Hostile-shape tests: missing envelopes, malformed subtrees, and
//! degenerate documents must degrade to empty fields, never fail.

use inprofile::core::{
    CreditReport, ReportError, TreeNode, normalize, resolve, try_normalize,
};

fn one(node: TreeNode) -> TreeNode {
    TreeNode::seq([node])
}

fn leaf(value: &str) -> TreeNode {
    one(TreeNode::text(value))
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

#[test]
fn non_mapping_root_yields_empty_report() {
    assert_eq!(normalize(&TreeNode::text("junk")), CreditReport::default());
    assert_eq!(normalize(&TreeNode::Seq(vec![])), CreditReport::default());
    assert_eq!(
        normalize(&TreeNode::wrapped("junk", [("a", "b")])),
        CreditReport::default()
    );
}

#[test]
fn unrecognized_envelope_yields_empty_report() {
    let root = TreeNode::map([("SomeOtherDocument", TreeNode::text("x"))]);
    let report = normalize(&root);
    assert_eq!(report, CreditReport::default());
    assert!(report.accounts.is_empty());
    assert_eq!(report.identity.name, "");
    assert_eq!(report.summary.total_accounts, "");
}

#[test]
fn try_normalize_rejects_unrecognized_envelopes() {
    assert!(matches!(
        try_normalize(&TreeNode::text("junk")),
        Err(ReportError::MissingEnvelope)
    ));
    let root = TreeNode::map([("SomeOtherDocument", TreeNode::text("x"))]);
    assert!(matches!(
        try_normalize(&root),
        Err(ReportError::MissingEnvelope)
    ));
}

// ---------------------------------------------------------------------------
// Malformed subtrees
// ---------------------------------------------------------------------------

#[test]
fn wrong_shaped_subtrees_degrade_to_empty_fields() {
    let root = TreeNode::map([(
        "INProfileResponse",
        TreeNode::map([
            // Not sequence-wrapped, so the chain cannot be entered.
            ("Current_Application", TreeNode::text("bare")),
            // A mapping where a sequence is expected.
            ("SCORE", TreeNode::map([("BureauScore", leaf("772"))])),
            // A sequence of garbage.
            ("CAIS_Account", TreeNode::seq([TreeNode::text("noise")])),
        ]),
    )]);

    let report = normalize(&root);
    assert_eq!(report.identity.name, "");
    assert_eq!(report.identity.credit_score, "");
    assert_eq!(report.summary.total_accounts, "");
    assert!(report.accounts.is_empty());
}

#[test]
fn non_sequence_account_details_yield_no_accounts() {
    let root = TreeNode::map([(
        "INProfileResponse",
        TreeNode::map([(
            "CAIS_Account",
            one(TreeNode::map([(
                "CAIS_Account_DETAILS",
                TreeNode::map([("Account_Number", leaf("111"))]),
            )])),
        )]),
    )]);
    assert!(normalize(&root).accounts.is_empty());
}

#[test]
fn empty_account_details_yield_no_accounts() {
    let root = TreeNode::map([(
        "INProfileResponse",
        TreeNode::map([(
            "CAIS_Account",
            one(TreeNode::map([("CAIS_Account_DETAILS", TreeNode::Seq(vec![]))])),
        )]),
    )]);
    assert!(normalize(&root).accounts.is_empty());
}

#[test]
fn malformed_account_does_not_disturb_siblings() {
    let details = TreeNode::seq([
        TreeNode::map([("Account_Number", leaf("111"))]),
        TreeNode::text("garbage"),
        TreeNode::map([("Account_Number", leaf("333"))]),
    ]);
    let root = TreeNode::map([(
        "INProfileResponse",
        TreeNode::map([(
            "CAIS_Account",
            one(TreeNode::map([("CAIS_Account_DETAILS", details)])),
        )]),
    )]);

    let report = normalize(&root);
    assert_eq!(report.accounts.len(), 3);
    assert_eq!(report.accounts[0].credit_card.account_number, "111");
    assert_eq!(report.accounts[1].credit_card.account_number, "");
    assert_eq!(report.accounts[1].credit_card.bank_name, "");
    assert_eq!(report.accounts[2].credit_card.account_number, "333");
}

// ---------------------------------------------------------------------------
// Resolver edges
// ---------------------------------------------------------------------------

#[test]
fn resolution_stops_at_leaves_mid_path() {
    let node = TreeNode::map([("a", TreeNode::wrapped("leaf", [("x", "y")]))]);
    assert_eq!(resolve(&node, "a.b"), "");
    assert_eq!(resolve(&node, "a"), "leaf");
}

#[test]
fn empty_sequence_at_target_resolves_empty() {
    let node = TreeNode::map([("a", TreeNode::Seq(vec![]))]);
    assert_eq!(resolve(&node, "a"), "");
}

#[test]
fn present_but_empty_leaf_resolves_empty() {
    let node = TreeNode::map([("a", leaf(""))]);
    assert_eq!(resolve(&node, "a"), "");
}
