use serde::{Deserialize, Serialize};

use crate::account::{AccountInfo, AccountType};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 100;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub data: Option<T>,
    pub error_message: Option<String>,
}

impl<T> Response<T> {
    pub fn ok(data: T) -> Self {
        Response {
            data: Some(data),
            error_message: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AccountInfoDto {
    #[serde(default)]
    pub account_number: u64,
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub iban: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "type", default)]
    pub account_type: Option<AccountType>,
}

impl From<AccountInfo> for AccountInfoDto {
    fn from(info: AccountInfo) -> Self {
        AccountInfoDto {
            account_number: info.id,
            account_name: info.name,
            iban: info.iban,
            address: info.address,
            amount: info.amount,
            account_type: info.account_type,
        }
    }
}

impl From<AccountInfoDto> for AccountInfo {
    fn from(dto: AccountInfoDto) -> Self {
        AccountInfo {
            id: dto.account_number,
            name: dto.account_name,
            iban: dto.iban,
            address: dto.address,
            amount: dto.amount,
            account_type: dto.account_type,
        }
    }
}

/// Query string of the list endpoint. Values that are absent or do not parse
/// as non-negative integers fall back to the defaults.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PageRequest {
    pub fn page(&self) -> u32 {
        parse_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    pub fn page_size(&self) -> u32 {
        parse_or(self.page_size.as_deref(), DEFAULT_PAGE_SIZE)
    }
}

fn parse_or(value: Option<&str>, default: u32) -> u32 {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[derive(Serialize)]
pub struct GreetingResponse {
    pub message: String,
}
