//! Walk dotted paths over a hand-built document tree.
//!
//! Run with: `cargo run --example resolve_paths`

use inprofile::core::{TreeNode, resolve};

fn main() {
    // The shapes a markup parser hands over: singleton sequences around
    // leaves, a text-wrapper where an element carried attributes, and
    // nested mappings for structured regions.
    let account = TreeNode::map([
        (
            "Subscriber_Name",
            TreeNode::seq([TreeNode::text("HDFC BANK LTD")]),
        ),
        (
            "Account_Status",
            TreeNode::seq([TreeNode::wrapped("Active", [("code", "11")])]),
        ),
        (
            "Holder",
            TreeNode::map([(
                "Income_TAX_PAN",
                TreeNode::seq([TreeNode::text("ABCPV1234D")]),
            )]),
        ),
    ]);

    for path in [
        "Subscriber_Name",
        "Account_Status",
        "Holder.Income_TAX_PAN",
        "Date_Reported",
        "Holder.Missing.Deeper",
    ] {
        let value = resolve(&account, path);
        if value.is_empty() {
            println!("{path:25} -> (absent)");
        } else {
            println!("{path:25} -> {value}");
        }
    }
}
