use crate::shared::{OperationDeclaration, OperationKind};

/// Extracts the operations a schema declares: every field with an
/// argument list on a root operation type (`Query` or `Mutation`).
///
/// The scan is line oriented and tracks brace depth, so a field-shaped
/// line after its type block has closed is dropped rather than
/// misattributed to the previous type. Fields without an argument list
/// are silently excluded. Malformed input degrades to a partial or empty
/// result; absence of operations is a valid state, not an error.
///
/// Output preserves declaration order, but consumers compare it as a set.
pub fn parse(sdl: &str) -> Vec<OperationDeclaration> {
    let mut declarations = Vec::new();
    let mut current_kind: Option<OperationKind> = None;
    let mut depth: usize = 0;

    for raw_line in sdl.lines() {
        let line = raw_line.trim();

        if depth == 0 {
            current_kind = match type_declaration_name(line) {
                Some(name) => OperationKind::from_type_name(name),
                None => None,
            };
        } else if let Some(kind) = current_kind {
            if let Some(field_name) = field_with_arguments(line) {
                declarations.push(OperationDeclaration::new(kind.as_str(), field_name));
            }
        }

        let opens = line.matches('{').count();
        let closes = line.matches('}').count();
        depth = (depth + opens).saturating_sub(closes);
        if depth == 0 {
            current_kind = None;
        }
    }

    declarations
}

/// The `<Name>` of a `type <Name> {`-shaped line, if this is one.
fn type_declaration_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("type ")?;
    let name = rest
        .split_whitespace()
        .next()
        .map(|token| token.trim_end_matches('{'))?;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// The field name of a `name(args): Type`-shaped line. Lines without an
/// opening parenthesis never qualify, even when syntactically valid SDL.
fn field_with_arguments(line: &str) -> Option<&str> {
    let (candidate, _) = line.split_once('(')?;
    let name = candidate.trim();
    let identifier = !name.is_empty()
        && name.chars().all(|c| c.is_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit());
    if identifier {
        Some(name)
    } else {
        None
    }
}
