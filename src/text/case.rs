//! camelCase / PascalCase to snake_case conversion.

/// Convert a camel or Pascal cased identifier to snake case.
///
/// Every uppercase character becomes `_` followed by its lowercase form, then
/// leading and trailing underscores are stripped. Characters that are already
/// lowercase, digits and existing underscores are kept as they are.
pub fn to_snake_case(input: &str) -> String {
    let mut snake = String::with_capacity(input.len() + 4);
    for c in input.chars() {
        if c.is_uppercase() {
            snake.push('_');
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(to_snake_case("aLongAndComplexString"), "a_long_and_complex_string");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_snake_case("IAmAPascalCasedString"), "i_am_a_pascal_cased_string");
    }

    #[test]
    fn test_already_snake() {
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_strips_dangling_underscores() {
        assert_eq!(to_snake_case("_Private_"), "private");
    }
}
