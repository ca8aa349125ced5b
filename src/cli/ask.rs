use clap::ValueEnum;
use std::path::PathBuf;
use stylecmd::prompt::Field;
use stylecmd::{CommandError, CommonArgs, Result};

/// How `ask` collects its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldType {
    Text,
    Secret,
    Choice,
    Invoke,
}

/// Ask for a field value and print it
pub fn run(
    common: CommonArgs,
    config_path: Option<PathBuf>,
    label: String,
    kind: FieldType,
    options: Option<String>,
    pattern: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let mut field = build_field(kind, options, pattern)?;
    field.value = value;

    let mut command = super::command("ask", common, config_path)?;
    let answer = command.form(&label, &field)?;
    println!("{}", answer);

    Ok(())
}

fn build_field(kind: FieldType, options: Option<String>, pattern: Option<String>) -> Result<Field> {
    let field = match kind {
        FieldType::Text => Field::text(),
        FieldType::Secret => Field::secret(),
        FieldType::Choice => Field::choice(&required(options, "choice")?),
        FieldType::Invoke => {
            let command = required(options, "invoke")?;
            match pattern {
                Some(pattern) => Field::invoke_matching(command, &pattern)?,
                None => Field::invoke(command),
            }
        }
    };
    Ok(field)
}

fn required(options: Option<String>, kind: &str) -> Result<String> {
    options.ok_or_else(|| {
        CommandError::Prompt(format!("--options is required for {} fields", kind))
    })
}
