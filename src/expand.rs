//! `%{Name}` macro expansion over a [`VariableRegistry`].

use crate::context::PositionContext;
use crate::variables::{VariableError, VariableRegistry};

/// Replace every `%{Name}` in `template` with the current value of `Name`.
///
/// Integers expand in decimal. An unterminated `%{` is copied through as-is.
/// A reference to an unregistered name fails the whole expansion.
pub fn expand(
    registry: &VariableRegistry,
    ctx: &dyn PositionContext,
    template: &str,
) -> Result<String, VariableError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("%{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find('}') else {
            out.push_str(&rest[open..]);
            return Ok(out);
        };
        let name = &after_open[..close];
        let value = registry.resolve(name, ctx)?;
        out.push_str(&value.to_string());
        rest = &after_open[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
