//! Parse an inline bureau response and print the normalized report.
//!
//! Run with: `cargo run --example extract_report --features "xml json"`

use inprofile::core::normalize;
use inprofile::json::to_value;
use inprofile::xml::parse_str;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<INProfileResponse>
  <Current_Application>
    <Current_Application_Details>
      <Current_Applicant_Details>
        <First_Name>Asha</First_Name>
        <Last_Name>Verma</Last_Name>
        <MobilePhoneNumber>9876543210</MobilePhoneNumber>
      </Current_Applicant_Details>
    </Current_Application_Details>
  </Current_Application>
  <SCORE>
    <BureauScore>772</BureauScore>
  </SCORE>
  <TotalCAPS_Summary>
    <TotalCAPSLast7Days>2</TotalCAPSLast7Days>
  </TotalCAPS_Summary>
  <CAIS_Account>
    <CAIS_Summary>
      <Credit_Account>
        <CreditAccountTotal>2</CreditAccountTotal>
        <CreditAccountActive>2</CreditAccountActive>
        <CreditAccountClosed>0</CreditAccountClosed>
      </Credit_Account>
      <Total_Outstanding_Balance>
        <Outstanding_Balance_All>245000</Outstanding_Balance_All>
        <Outstanding_Balance_Secured>200000</Outstanding_Balance_Secured>
        <Outstanding_Balance_UnSecured>45000</Outstanding_Balance_UnSecured>
      </Total_Outstanding_Balance>
    </CAIS_Summary>
    <CAIS_Account_DETAILS>
      <Subscriber_Name>HDFC BANK LTD</Subscriber_Name>
      <Account_Number>XXXX5678</Account_Number>
      <Account_Type>10</Account_Type>
      <Portfolio_Type>I</Portfolio_Type>
      <Open_Date>20190412</Open_Date>
      <Current_Balance>200000</Current_Balance>
      <CAIS_Holder_Details>
        <Income_TAX_PAN>ABCPV1234D</Income_TAX_PAN>
      </CAIS_Holder_Details>
      <CAIS_Holder_Address_Details>
        <First_Line_Of_Address_non_normalized>12 MG Road</First_Line_Of_Address_non_normalized>
        <City_non_normalized>Bengaluru</City_non_normalized>
        <State_non_normalized>KA</State_non_normalized>
        <ZIP_Postal_Code_non_normalized>560001</ZIP_Postal_Code_non_normalized>
      </CAIS_Holder_Address_Details>
    </CAIS_Account_DETAILS>
    <CAIS_Account_DETAILS>
      <Subscriber_Name>SBI CARD</Subscriber_Name>
      <Account_Number>XXXX9012</Account_Number>
      <Account_Type>23</Account_Type>
      <Portfolio_Type>R</Portfolio_Type>
      <Current_Balance>45000</Current_Balance>
    </CAIS_Account_DETAILS>
  </CAIS_Account>
</INProfileResponse>
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tree = parse_str(SAMPLE)?;

    println!("=== Document tree (xml2js shape) ===");
    println!("{}", serde_json::to_string_pretty(&to_value(&tree))?);

    let report = normalize(&tree);
    println!();
    println!("=== Normalized report ===");
    println!("{}", serde_json::to_string_pretty(&report)?);

    println!();
    println!(
        "{} scored {} with {} account(s) on file",
        report.identity.name,
        report.identity.credit_score,
        report.accounts.len()
    );

    Ok(())
}
