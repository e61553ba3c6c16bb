//! Bell command implementations
//!
//! `bell-set` writes a single parameter; `bell-drag` applies a handle drag.
//! Both print the re-clamped record, or its four handle points.

use std::io::Write;
use std::path::Path;

use curve_core::bell::{BellHandle, BellParameter, BellParameters};
use tracing::info;

use crate::config::OutputFormat;
use crate::input::load_bell;
use crate::output::{write_bell, write_points};
use crate::Result;

fn emit(
    params: &BellParameters,
    as_points: bool,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    if as_points {
        write_points(out, &params.to_points(), format)
    } else {
        write_bell(out, params, format)
    }
}

/// Run the bell-set command
pub fn set(
    bell: Option<&Path>,
    param: &str,
    value: f64,
    as_points: bool,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let param: BellParameter = param.parse()?;
    let before = load_bell(bell)?;
    let after = before.set_parameter(param, value);

    info!(
        parameter = %param,
        requested = value,
        applied = after.get(param),
        "Bell parameter set"
    );
    emit(&after, as_points, format, out)
}

/// Run the bell-drag command
pub fn drag(
    bell: Option<&Path>,
    handle: &str,
    x: f64,
    y: f64,
    as_points: bool,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let handle: BellHandle = handle.parse()?;
    let after = load_bell(bell)?.update_from_handle(handle, x, y);

    info!(handle = %handle, x, y, "Bell handle dragged");
    emit(&after, as_points, format, out)
}
