use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BankAccountDto {
    pub id: i32,
    pub bank: String,
    pub agency: String,
    pub account: String,
    /// `checking` or `savings`
    pub account_type: String,
    pub balance: f64,
    pub holder_document: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBankAccountDto {
    pub bank: String,
    pub agency: String,
    pub account: String,
    pub account_type: String,
    #[serde(default)]
    pub balance: Option<f64>,
    /// CPF or CNPJ, punctuation allowed
    #[serde(default)]
    pub holder_document: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBankAccountDto {
    #[serde(default)]
    pub bank: Option<String>,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub holder_document: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}
