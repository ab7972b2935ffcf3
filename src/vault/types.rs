use serde::{Deserialize, Serialize};

use crate::account::{AccountInfo, AccountType};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    #[serde(default)]
    pub document_id: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    #[serde(rename = "EQ")]
    Eq,
}

#[derive(Serialize, Debug)]
pub struct FieldComparison {
    pub field: String,
    pub operator: ComparisonOperator,
    pub value: serde_json::Value,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Expression {
    pub field_comparisons: Vec<FieldComparison>,
}

#[derive(Serialize, Debug)]
pub struct OrderBy {
    pub desc: bool,
    pub field: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub expressions: Vec<Expression>,
    pub limit: u32,
    pub order_by: Vec<OrderBy>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
    pub page: u32,
    pub per_page: u32,
}

impl SearchRequest {
    pub fn page(page: u32, per_page: u32) -> Self {
        SearchRequest {
            query: None,
            page,
            per_page,
        }
    }

    /// Newest-first lookup of a single document by its `id` field.
    pub fn by_id(id: u64) -> Self {
        SearchRequest {
            query: Some(Query {
                expressions: vec![Expression {
                    field_comparisons: vec![FieldComparison {
                        field: "id".to_string(),
                        operator: ComparisonOperator::Eq,
                        value: id.into(),
                    }],
                }],
                limit: 0,
                order_by: vec![OrderBy {
                    desc: true,
                    field: "id".to_string(),
                }],
            }),
            page: 1,
            per_page: 1,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub revisions: Option<Vec<Revision>>,
    #[serde(default)]
    pub search_id: String,
}

/// Documents stay untyped here so a single bad entry does not fail the page.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    pub document: serde_json::Value,
    #[serde(default)]
    pub revision: String,
    #[serde(default)]
    pub transaction_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VaultMetadata {
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub ts: i64,
}

/// An account as stored by the vault, store metadata included.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VaultDocument {
    #[serde(alias = "Id")]
    pub id: u64,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(rename = "Iban", alias = "iban")]
    pub iban: String,
    #[serde(rename = "Address", alias = "address", default)]
    pub address: Option<String>,
    #[serde(rename = "Amount", alias = "amount", default)]
    pub amount: f64,
    #[serde(rename = "Type", alias = "type", default)]
    pub account_type: Option<AccountType>,
    #[serde(rename = "_id", default, skip_serializing)]
    pub document_id: Option<String>,
    #[serde(rename = "_vault_md", default, skip_serializing)]
    pub metadata: Option<VaultMetadata>,
}

impl From<&AccountInfo> for VaultDocument {
    fn from(info: &AccountInfo) -> Self {
        VaultDocument {
            id: info.id,
            name: info.name.clone(),
            iban: info.iban.clone(),
            address: info.address.clone(),
            amount: info.amount,
            account_type: info.account_type,
            document_id: None,
            metadata: None,
        }
    }
}

impl From<VaultDocument> for AccountInfo {
    fn from(doc: VaultDocument) -> Self {
        AccountInfo {
            id: doc.id,
            name: doc.name,
            iban: doc.iban,
            address: doc.address,
            amount: doc.amount,
            account_type: doc.account_type,
        }
    }
}
