//! # Id Subcommand
//!
//! Classifies each argument with the identifier builder and reports its
//! kind, canonical forms and derived fields.
//!
//! Precedence is fixed (organization, personal, coordination); the
//! `--no-personal` and `--no-coordination` flags disable kinds.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use stb_id::{
    BirthCounty, BuilderConfig, IdKind, Identifier, IdentifierBuilder, NationalId,
    OrganizationGroup, Sex,
};

use crate::output::{emit, field, ErrorReport, TextReport};
use crate::{exit_code, RunContext};

/// Arguments for the `stb id` subcommand.
#[derive(Args, Debug)]
pub struct IdArgs {
    /// Identifiers to classify.
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,

    /// Do not accept personal identity numbers.
    #[arg(long)]
    pub no_personal: bool,

    /// Do not accept coordination numbers.
    #[arg(long)]
    pub no_coordination: bool,
}

impl IdArgs {
    /// Builder configuration selected by the flags.
    pub fn config(&self) -> BuilderConfig {
        BuilderConfig::all()
            .with_personal(!self.no_personal)
            .with_coordination(!self.no_coordination)
    }
}

/// Classification result for one input.
#[derive(Debug, Clone, Serialize)]
pub struct IdReport {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<IdKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_group: Option<OrganizationGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl IdReport {
    /// Report for a successfully classified identifier.
    pub fn valid(input: &str, id: &Identifier) -> Self {
        let county = id.birth_county();
        let organization_group = match id {
            Identifier::Organization(org) => Some(org.group()),
            _ => None,
        };
        Self {
            input: input.to_string(),
            valid: true,
            kind: Some(id.kind()),
            id: Some(id.to_string()),
            long_form: Some(id.long_form()),
            birth_date: id.birth_date(),
            sex: (id.sex() != Sex::Other).then(|| id.sex()),
            birth_county: (county != BirthCounty::Undefined).then(|| county.to_string()),
            organization_group,
            error: None,
        }
    }

    /// Report for a rejected input.
    pub fn invalid(input: &str, error: ErrorReport) -> Self {
        Self {
            input: input.to_string(),
            valid: false,
            kind: None,
            id: None,
            long_form: None,
            birth_date: None,
            sex: None,
            birth_county: None,
            organization_group: None,
            error: Some(error),
        }
    }
}

impl TextReport for IdReport {
    fn render_text(&self) -> String {
        if let Some(error) = &self.error {
            return format!("{}: {error}\n", self.input);
        }
        let mut out = match self.kind {
            Some(kind) => format!("{}: {kind}\n", self.input),
            None => format!("{}\n", self.input),
        };
        if let Some(id) = &self.id {
            out.push_str(&field("canonical", id));
        }
        if let Some(long_form) = &self.long_form {
            out.push_str(&field("long form", long_form));
        }
        if let Some(date) = self.birth_date {
            out.push_str(&field("birth date", date));
        }
        if let Some(sex) = self.sex {
            out.push_str(&field("sex", sex));
        }
        if let Some(county) = &self.birth_county {
            out.push_str(&field("birth county", county));
        }
        if let Some(group) = self.organization_group {
            out.push_str(&field("group", group));
        }
        out
    }
}

/// Classify `raw` with `builder`.
pub fn classify_one(builder: &IdentifierBuilder, raw: &str) -> IdReport {
    tracing::debug!(input = %raw, "classifying identifier");
    match builder.build(raw) {
        Ok(id) => {
            tracing::info!(input = %raw, kind = %id.kind(), "classified identifier");
            IdReport::valid(raw, &id)
        }
        Err(e) => {
            tracing::info!(input = %raw, error_kind = %e.kind(), "rejected identifier");
            IdReport::invalid(raw, ErrorReport::from(&e))
        }
    }
}

/// Execute the id subcommand.
///
/// Returns exit code: 0 if every identifier is valid, 1 otherwise.
pub fn run_id(args: &IdArgs, ctx: &RunContext) -> Result<u8> {
    let config = args.config();
    tracing::debug!(
        allow_personal = config.allow_personal,
        allow_coordination = config.allow_coordination,
        reference = %ctx.reference,
        "identifier builder configured"
    );
    let builder = IdentifierBuilder::at(config, ctx.reference);

    let reports: Vec<IdReport> = args
        .ids
        .iter()
        .map(|raw| classify_one(&builder, raw))
        .collect();
    emit(ctx.format, &reports)?;

    Ok(exit_code(reports.iter().all(|r| r.valid)))
}
