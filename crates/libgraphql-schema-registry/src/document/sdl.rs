//! Shared pieces of SDL printing used by the `Display` impls of document
//! nodes.

use crate::document::DirectiveAnnotation;
use crate::document::FieldDefinition;
use crate::document::InputValueDefinition;
use crate::document::value::write_quoted_string;
use std::fmt::Formatter;
use std::fmt::Result;

pub(crate) const INDENT: &str = "  ";

pub(crate) fn write_description(
    f: &mut Formatter<'_>,
    description: Option<&str>,
    indent: &str,
) -> Result {
    let Some(description) = description else {
        return Ok(());
    };
    if !prints_as_block_string(description) {
        write!(f, "{indent}")?;
        write_quoted_string(f, description)?;
        return writeln!(f);
    }
    writeln!(f, "{indent}\"\"\"")?;
    for line in description.split('\n') {
        if line.is_empty() {
            writeln!(f)?;
        } else {
            writeln!(f, "{indent}{line}")?;
        }
    }
    writeln!(f, "{indent}\"\"\"")
}

/// Block strings strip common indentation along with leading and trailing
/// blank lines when parsed, so only text none of that touches can be printed
/// as one.
fn prints_as_block_string(description: &str) -> bool {
    if description.contains('\r') || description.contains("\"\"\"") {
        return false;
    }
    let lines: Vec<&str> = description.split('\n').collect();
    let edges_are_blank = lines.first().is_none_or(|line| line.is_empty())
        || lines.last().is_none_or(|line| line.is_empty());
    !edges_are_blank && lines.iter().all(|line| {
        line.is_empty() || !line.starts_with(char::is_whitespace)
    })
}

pub(crate) fn write_directives(
    f: &mut Formatter<'_>,
    directives: &[DirectiveAnnotation],
) -> Result {
    for directive in directives {
        write!(f, " {directive}")?;
    }
    Ok(())
}

pub(crate) fn write_arguments(
    f: &mut Formatter<'_>,
    arguments: &[InputValueDefinition],
) -> Result {
    if arguments.is_empty() {
        return Ok(());
    }
    write!(f, "(")?;
    for (idx, argument) in arguments.iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{argument}")?;
    }
    write!(f, ")")
}

pub(crate) fn write_implements(
    f: &mut Formatter<'_>,
    interfaces: &[String],
) -> Result {
    if !interfaces.is_empty() {
        write!(f, " implements {}", interfaces.join(" & "))?;
    }
    Ok(())
}

pub(crate) fn write_fields_block(
    f: &mut Formatter<'_>,
    fields: &[FieldDefinition],
) -> Result {
    if fields.is_empty() {
        return Ok(());
    }
    writeln!(f, " {{")?;
    for field in fields {
        write_description(f, field.description(), INDENT)?;
        writeln!(f, "{INDENT}{field}")?;
    }
    write!(f, "}}")
}

pub(crate) fn write_input_fields_block(
    f: &mut Formatter<'_>,
    fields: &[InputValueDefinition],
) -> Result {
    if fields.is_empty() {
        return Ok(());
    }
    writeln!(f, " {{")?;
    for field in fields {
        writeln!(f, "{INDENT}{field}")?;
    }
    write!(f, "}}")
}
