/*
[INPUT]:  Document objects returned by the Increase API
[OUTPUT]: Document entity and category enum
[POS]:    Data layer - generated statements and tax forms
[UPDATE]: When document categories change
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wire::{Extras, ObjectType};

wire_enum! {
    pub enum DocumentCategory {
        Form1099Int = "form_1099_int",
        Form1099Misc = "form_1099_misc",
        ProofOfAuthorization = "proof_of_authorization",
        CompanyInformation = "company_information",
        AccountVerificationLetter = "account_verification_letter",
        FundingInstructions = "funding_instructions",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub category: DocumentCategory,
    pub created_at: DateTime<Utc>,
    pub entity_id: Option<String>,
    /// File holding the rendered document
    pub file_id: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    #[serde(flatten)]
    pub extra: Extras,
}

impl_extensible!(Document);
