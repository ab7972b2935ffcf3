use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum AccountType {
    Sending = 1,
    Receiving = 2,
}

impl TryFrom<u8> for AccountType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(AccountType::Sending),
            2 => Ok(AccountType::Receiving),
            other => Err(format!("unknown account type: {}", other)),
        }
    }
}

impl From<AccountType> for u8 {
    fn from(val: AccountType) -> Self {
        val as u8
    }
}

/// A single account record. `id == 0` means the record has not been stored yet.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AccountInfo {
    pub id: u64,
    pub name: String,
    pub iban: String,
    // free text for now, no structured address
    pub address: Option<String>,
    pub amount: f64,
    pub account_type: Option<AccountType>,
}
