//! Console text report over a member survey

use std::fmt::Write;

use contracts::shared::metadata::DeveloperInfo;
use thiserror::Error;

use super::entity_builder::{MemberSurvey, SurveyedMember};

const WIDTH: usize = 70;
const BOX_INNER: usize = WIDTH - 1;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("entity `{0}` is not registered")]
    UnknownEntity(String),

    #[error("failed to format report: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Render the developer annotation report of one entity
pub fn render_text_report(survey: &MemberSurvey) -> Result<String, ReportError> {
    let mut out = String::new();
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);

    writeln!(out)?;
    writeln!(out, "{}", heavy)?;
    writeln!(out, "{:^WIDTH$}", "ATTRIBUTE REPORT")?;
    writeln!(out, "{}", heavy)?;

    writeln!(out)?;
    writeln!(out, "Type Name: {}", survey.entity_name)?;
    writeln!(out, "Full Name: {}", survey.full_name)?;
    writeln!(out, "Namespace: {}", or_dash(&survey.namespace))?;
    writeln!(out, "Origin: {}", survey.origin)?;

    if let Some(info) = &survey.developer_info {
        write_type_box(&mut out, info)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", light)?;
    writeln!(out, "{:^WIDTH$}", "MEMBER ANNOTATIONS")?;
    writeln!(out, "{}", light)?;

    let mut annotated = 0;
    for (member, info) in survey.annotated() {
        annotated += 1;
        write_member(&mut out, annotated, member, info)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", heavy)?;
    writeln!(
        out,
        "SUMMARY: {} members scanned, {} annotated.",
        survey.scanned(),
        annotated
    )?;
    writeln!(out, "{}", heavy)?;

    Ok(out)
}

fn write_type_box(out: &mut String, info: &DeveloperInfo) -> std::fmt::Result {
    let border = format!("+{}+", "-".repeat(BOX_INNER));

    writeln!(out)?;
    writeln!(out, "{}", border)?;
    writeln!(out, "|{:^BOX_INNER$}|", "TYPE ANNOTATION")?;
    writeln!(out, "{}", border)?;
    for (label, value) in [
        ("Author", info.author),
        ("Version", info.version),
        ("Description", info.description),
        ("Last Modified", info.last_modified),
    ] {
        writeln!(out, "|  {:<14}: {:<50} |", label, or_dash(value))?;
    }
    writeln!(out, "{}", border)
}

fn write_member(
    out: &mut String,
    index: usize,
    member: &SurveyedMember,
    info: &DeveloperInfo,
) -> std::fmt::Result {
    let parameters = if member.parameters.is_empty() {
        "(none)".to_string()
    } else {
        member
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.type_name, p.name))
            .collect::<Vec<_>>()
            .join(", ")
    };

    writeln!(out)?;
    writeln!(out, "> Member #{}: {}", index, member.name)?;
    writeln!(out, "   -> Return Type  : {}", member.return_type)?;
    writeln!(out, "   -> Parameters   : {}", parameters)?;
    writeln!(out, "   -> Author       : {}", or_dash(info.author))?;
    writeln!(out, "   -> Version      : {}", or_dash(info.version))?;
    writeln!(out, "   -> Description  : {}", or_dash(info.description))?;
    writeln!(out, "   -> Last Modified: {}", or_dash(info.last_modified))
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}
