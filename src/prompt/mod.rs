//! Interactive prompt module
//!
//! Collects a field value by asking the user, offering a fixed list of
//! choices, or capturing the output of another sub-command.

mod dialog;
mod field;
mod invoker;

pub use dialog::{DialogPrompter, Prompter};
pub use field::{Field, FieldKind};
pub use invoker::{Invoker, ProcessInvoker};

use regex::Regex;

use crate::error::{CommandError, Result};

/// Collect a value for the field labelled `label`.
///
/// When the field already has a value the user is asked whether to change
/// it first; declining returns the current value untouched. `invoker` is
/// only consulted for [`FieldKind::Invoke`] fields.
pub fn form(
    label: &str,
    field: &Field,
    prompter: &mut dyn Prompter,
    invoker: Option<&mut dyn Invoker>,
) -> Result<String> {
    if let Some(value) = &field.value {
        let question = format!(
            "The field {} has the value: {}, do you wish to change it?",
            label, value
        );
        if !prompter.confirm(&question)? {
            return Ok(value.clone());
        }
    }

    match &field.kind {
        FieldKind::Text => prompter.ask(label),
        FieldKind::Secret => prompter.secret(label),
        FieldKind::Choice(choices) => prompter.choice(label, choices),
        FieldKind::Invoke { command, pattern } => {
            let invoker = invoker.ok_or_else(|| {
                CommandError::Invoke(format!("No invoker available to run '{}'", command))
            })?;
            let output = invoker.call(command)?;
            let result = match pattern {
                Some(pattern) => extract(pattern, &output),
                None => output.as_str(),
            };
            Ok(strip_control(result))
        }
    }
}

/// First capture group of the first match, the whole output when nothing matches
fn extract<'a>(pattern: &Regex, output: &'a str) -> &'a str {
    match pattern.captures(output) {
        Some(caps) => caps
            .get(1)
            .or_else(|| caps.get(0))
            .map_or(output, |m| m.as_str()),
        None => output,
    }
}

fn strip_control(text: &str) -> String {
    text.replace(['\r', '\n', '\t'], "")
}
