//! # Account Subcommand
//!
//! Validates bank account numbers. The bank type is taken from the
//! clearing number unless `--bank` names it explicitly.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use stb_banking::{AccountRules, BankAccount, BankType};

use crate::output::{emit, field, ErrorReport, TextReport};
use crate::{exit_code, RunContext};

/// Arguments for the `stb account` subcommand.
#[derive(Args, Debug)]
pub struct AccountArgs {
    /// Account numbers, e.g. `5000,1234560` or `8327-9,1234567897`.
    #[arg(value_name = "ACCOUNT", required = true)]
    pub accounts: Vec<String>,

    /// Validate as this bank type (e.g. `handelsbanken`, `nordea_typ1b`)
    /// instead of dispatching on the clearing number.
    #[arg(long, value_name = "TYPE")]
    pub bank: Option<BankType>,
}

/// Validation result for one account.
#[derive(Debug, Clone, Serialize)]
pub struct AccountReport {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_type: Option<BankType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl AccountReport {
    fn valid(input: &str, account: &BankAccount) -> Self {
        let clearing = match account.clearing_check_digit() {
            Some(check) => format!("{}-{check}", account.clearing()),
            None => account.clearing().to_string(),
        };
        Self {
            input: input.to_string(),
            valid: true,
            bank_type: Some(account.bank_type()),
            bank_name: Some(account.bank_type().bank_name()),
            clearing: Some(clearing),
            number: Some(account.number().to_string()),
            formatted: Some(account.describe()),
            error: None,
        }
    }

    fn invalid(input: &str, error: ErrorReport) -> Self {
        Self {
            input: input.to_string(),
            valid: false,
            bank_type: None,
            bank_name: None,
            clearing: None,
            number: None,
            formatted: None,
            error: Some(error),
        }
    }
}

impl TextReport for AccountReport {
    fn render_text(&self) -> String {
        if let Some(error) = &self.error {
            return format!("{}: {error}\n", self.input);
        }
        let mut out = match self.bank_name {
            Some(name) => format!("{}: {name}\n", self.input),
            None => format!("{}\n", self.input),
        };
        if let Some(bank_type) = self.bank_type {
            out.push_str(&field("type", bank_type.slug()));
        }
        if let Some(clearing) = &self.clearing {
            out.push_str(&field("clearing", clearing));
        }
        if let Some(number) = &self.number {
            out.push_str(&field("number", number));
        }
        if let Some(formatted) = &self.formatted {
            out.push_str(&field("formatted", formatted));
        }
        out
    }
}

/// Validate `raw`, optionally as an explicit bank type.
pub fn check_one(raw: &str, bank: Option<BankType>) -> AccountReport {
    let result = match bank {
        Some(bank_type) => BankAccount::parse_as(bank_type, raw),
        None => BankAccount::parse(raw),
    };
    match result {
        Ok(account) => {
            tracing::info!(input = raw, bank = account.bank_type().slug(), "valid account");
            AccountReport::valid(raw, &account)
        }
        Err(e) => {
            tracing::info!(input = raw, error_kind = %e.kind(), "rejected account");
            AccountReport::invalid(raw, ErrorReport::from(&e))
        }
    }
}

/// Execute the account subcommand.
///
/// Returns exit code: 0 if every account is valid, 1 otherwise.
pub fn run_account(args: &AccountArgs, ctx: &RunContext) -> Result<u8> {
    let reports: Vec<AccountReport> = args
        .accounts
        .iter()
        .map(|raw| check_one(raw, args.bank))
        .collect();
    emit(ctx.format, &reports)?;
    Ok(exit_code(reports.iter().all(|r| r.valid)))
}
