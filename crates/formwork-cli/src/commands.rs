use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment};
use tracing::info_span;

use formwork_cli::definition::FIELD_KINDS;
use formwork_cli::pipeline;
use formwork_core::ValidationReport;
use formwork_html::elements::KINDS;
use formwork_model::ElementKind;

use crate::cli::{RenderArgs, ValidateArgs};
use crate::summary::{align_column, dim_cell, new_table};

/// Outcome of the `validate` command.
pub struct ValidateResult {
    pub report: ValidationReport,
    pub unknown_names: Vec<String>,
}

pub fn run_render(args: &RenderArgs) -> Result<String> {
    let span = info_span!("render", form = %args.form.display());
    let _guard = span.enter();

    let mut loaded = pipeline::load(&args.form, args.locale.as_deref())?;
    if let Some(path) = &args.data {
        let data = pipeline::read_data(path)?;
        pipeline::populate(&mut loaded.form, &data)?;
    }
    if args.validate {
        pipeline::validate(&loaded.form)?;
    }
    loaded.form.render_html().context("render form")
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let span = info_span!("validate", form = %args.form.display());
    let _guard = span.enter();

    let mut loaded = pipeline::load(&args.form, args.locale.as_deref())?;
    let data = pipeline::read_data(&args.data)?;
    let unknown_names = pipeline::populate(&mut loaded.form, &data)?;
    let report = pipeline::validate(&loaded.form)?;
    Ok(ValidateResult {
        report,
        unknown_names,
    })
}

pub fn run_kinds() {
    let mut table = new_table(&["Kind", "Lineage", "Field", "Default decorators"], false);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for kind in KINDS {
        let lineage: Vec<&str> = kind.lineage().skip(1).map(ElementKind::name).collect();
        let lineage = if lineage.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(lineage.join(" > "))
        };
        let field = if FIELD_KINDS.contains(&kind.name()) {
            Cell::new("yes")
        } else {
            dim_cell("abstract")
        };
        let decorators = if kind.ignores_default_decorators() {
            dim_cell("ignored")
        } else {
            Cell::new("applied")
        };
        table.add_row(vec![Cell::new(kind.name()), lineage, field, decorators]);
    }
    println!("{table}");
}
