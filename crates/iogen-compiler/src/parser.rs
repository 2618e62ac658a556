//! Turns `<letter> <- <instruction>` source lines into a register list.
//!
//! Each line names its own register for readability only; the parser
//! verifies that the letters are assigned in strict `a, b, c, ...` order so
//! that a letter appearing as an argument can be resolved as a plain
//! register index (`ord(letter) - ord('a')`).

use crate::error::CompileError;
use crate::program::Register;
use iogen_core::Type;
use iogen_dsl::DslRegistry;

pub fn parse_source(
    registry: &DslRegistry,
    source: &str,
) -> Result<(Vec<Register>, usize), CompileError> {
    let mut registers = Vec::new();
    let mut input_length = 0usize;
    let mut seen_call = false;

    for (idx, raw_line) in source.lines().enumerate() {
        let line = idx + 1;
        let line_text = raw_line.trim();
        let (letter_part, instruction) = line_text
            .split_once(" <- ")
            .ok_or_else(|| CompileError::MalformedLine {
                line,
                text: line_text.to_string(),
            })?;
        let found = letter_part
            .chars()
            .next()
            .filter(|_| letter_part.chars().count() == 1)
            .ok_or_else(|| CompileError::MalformedLine {
                line,
                text: line_text.to_string(),
            })?;
        let expected = (b'a' + registers.len() as u8) as char;
        if found != expected {
            return Err(CompileError::OutOfOrderRegister { line, expected, found });
        }

        match instruction {
            "int" => {
                if seen_call {
                    return Err(CompileError::MalformedLine {
                        line,
                        text: "input registers must all precede computed registers".into(),
                    });
                }
                registers.push(Register::Input(Type::TInt));
                input_length += 1;
            }
            "[int]" => {
                if seen_call {
                    return Err(CompileError::MalformedLine {
                        line,
                        text: "input registers must all precede computed registers".into(),
                    });
                }
                registers.push(Register::Input(Type::TSeq));
                input_length += 1;
            }
            _ => {
                seen_call = true;
                let tokens: Vec<&str> = instruction.split(' ').collect();
                if tokens.is_empty() {
                    return Err(CompileError::MalformedLine {
                        line,
                        text: line_text.to_string(),
                    });
                }
                let (name, arg_tokens) = split_command(&tokens);
                let function = registry.get(&name).ok_or_else(|| CompileError::UnknownOperation {
                    line,
                    name: name.clone(),
                })?;
                if function.arity() != arg_tokens.len() {
                    return Err(CompileError::ArityMismatch {
                        line,
                        operation: name,
                        expected: function.arity(),
                        found: arg_tokens.len(),
                    });
                }
                let mut args = Vec::with_capacity(arg_tokens.len());
                for tok in arg_tokens {
                    let letter = tok
                        .chars()
                        .next()
                        .filter(|_| tok.chars().count() == 1)
                        .ok_or_else(|| CompileError::MalformedLine {
                            line,
                            text: line_text.to_string(),
                        })?;
                    let index = (letter as u8).wrapping_sub(b'a') as usize;
                    if !letter.is_ascii_lowercase() || index >= registers.len() {
                        return Err(CompileError::UnknownRegister { line, letter });
                    }
                    args.push(index);
                }
                for (a, &p) in args.iter().enumerate() {
                    let expected_ty = function.param_types()[a];
                    let found_ty = registers[p].result_type();
                    if expected_ty != found_ty {
                        return Err(CompileError::TypeMismatch {
                            line,
                            operation: name.clone(),
                            position: a,
                            expected: expected_ty,
                            found: found_ty,
                        });
                    }
                }
                registers.push(Register::Call {
                    function: function.clone(),
                    args,
                });
            }
        }
    }

    Ok((registers, input_length))
}

/// Single-token commands (`head`, `+`) versus two-token higher-order forms
/// (`map +`, `FILTER isEVEN`): a second token is part of the command name,
/// rather than its first argument, whenever it isn't itself a bare register
/// letter.
fn split_command<'a>(tokens: &[&'a str]) -> (String, Vec<&'a str>) {
    if tokens.len() > 1 {
        let second = tokens[1];
        let is_register_letter =
            second.chars().count() == 1 && second.chars().next().is_some_and(|c| c.is_ascii_lowercase());
        if !is_register_letter {
            return (format!("{} {}", tokens[0], second), tokens[2..].to_vec());
        }
    }
    (tokens[0].to_string(), tokens[1..].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use iogen_dsl::Language;

    #[test]
    fn parses_inputs_and_a_simple_call() {
        let registry = DslRegistry::build(Language::Simple, 10);
        let (registers, input_length) =
            parse_source(&registry, "a <- [int]\nb <- head a").unwrap();
        assert_eq!(input_length, 1);
        assert_eq!(registers.len(), 2);
    }

    #[test]
    fn parses_higher_order_two_token_command() {
        let registry = DslRegistry::build(Language::Linq, 10);
        let (registers, input_length) =
            parse_source(&registry, "a <- [int]\nb <- MAP INC a").unwrap();
        assert_eq!(input_length, 1);
        assert_eq!(registers.len(), 2);
    }

    #[test]
    fn rejects_argument_type_mismatch() {
        let registry = DslRegistry::build(Language::Simple, 10);
        let err = parse_source(&registry, "a <- int\nb <- head a").unwrap_err();
        assert!(matches!(err, CompileError::TypeMismatch { .. }));
    }

    #[test]
    fn rejects_unknown_operation() {
        let registry = DslRegistry::build(Language::Simple, 10);
        let err = parse_source(&registry, "a <- [int]\nb <- bogus a").unwrap_err();
        assert!(matches!(err, CompileError::UnknownOperation { .. }));
    }

    #[test]
    fn rejects_arity_mismatch() {
        let registry = DslRegistry::build(Language::Simple, 10);
        let err = parse_source(&registry, "a <- [int]\nb <- int\nc <- head a b").unwrap_err();
        assert!(matches!(err, CompileError::ArityMismatch { .. }));
    }

    #[test]
    fn rejects_out_of_order_register_letters() {
        let registry = DslRegistry::build(Language::Simple, 10);
        let err = parse_source(&registry, "b <- [int]").unwrap_err();
        assert!(matches!(err, CompileError::OutOfOrderRegister { .. }));
    }
}
