//! Documentation rule grammar.
//!
//! Field documentation doubles as a tiny validation language. It is split on
//! whitespace and each token is read as
//!
//! ```text
//! token := keyword | key ':' value (',' value)*
//! ```
//!
//! Keywords and keys are looked up in [`KEYWORD_RULES`] and [`PARAM_RULES`];
//! anything else is free text and ignored. Adding a rule is a table entry.

use thiserror::Error;

/// How a parametrized rule reads its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleArity {
    /// The whole value is one parameter.
    Single,
    /// The value is a comma-separated parameter list.
    List,
}

/// A bare keyword enabling a parameterless rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    /// Token that enables the rule.
    pub keyword: &'static str,
    /// Annotation emitted for it.
    pub annotation: &'static str,
}

/// A `key:value` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamRule {
    /// Key before the colon.
    pub key: &'static str,
    /// Annotation emitted for it.
    pub annotation: &'static str,
    /// How the value is split into parameters.
    pub arity: RuleArity,
}

const fn keyword(keyword: &'static str, annotation: &'static str) -> KeywordRule {
    KeywordRule {
        keyword,
        annotation,
    }
}

const fn param(key: &'static str, annotation: &'static str, arity: RuleArity) -> ParamRule {
    ParamRule {
        key,
        annotation,
        arity,
    }
}

/// Keyword rules.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    keyword("isEmail", "IsEmail"),
    keyword("isUrl", "IsUrl"),
    keyword("isAlpha", "IsAlpha"),
    keyword("isAlphanumeric", "IsAlphanumeric"),
    keyword("isAscii", "IsAscii"),
    keyword("isBase64", "IsBase64"),
    keyword("isCreditCard", "IsCreditCard"),
    keyword("isCurrency", "IsCurrency"),
    keyword("isDecimal", "IsDecimal"),
    keyword("isFQDN", "IsFQDN"),
    keyword("isHash", "IsHash"),
    keyword("isHexColor", "IsHexColor"),
    keyword("isHexadecimal", "IsHexadecimal"),
    keyword("isIP", "IsIP"),
    keyword("isISBN", "IsISBN"),
    keyword("isISIN", "IsISIN"),
    keyword("isISO8601", "IsISO8601"),
    keyword("isJWT", "IsJWT"),
    keyword("isLatLong", "IsLatLong"),
];

/// Parametrized rules.
pub const PARAM_RULES: &[ParamRule] = &[
    param("minLength", "MinLength", RuleArity::Single),
    param("maxLength", "MaxLength", RuleArity::Single),
    param("min", "Min", RuleArity::Single),
    param("max", "Max", RuleArity::Single),
    param("in", "IsIn", RuleArity::List),
    param("isDivisibleBy", "IsDivisibleBy", RuleArity::Single),
];

/// A rule matched in documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRule {
    /// Annotation to emit.
    pub annotation: &'static str,
    /// Literal parameters.
    pub params: Vec<String>,
}

/// A `key:` token with nothing usable after the colon.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("rule `{rule}:` is missing its value")]
pub struct MissingValue {
    /// Key of the offending rule.
    pub rule: &'static str,
}

/// Split documentation into tokens; absent documentation has none.
pub fn tokenize(documentation: Option<&str>) -> Vec<&str> {
    documentation
        .map(|doc| doc.split_whitespace().collect())
        .unwrap_or_default()
}

fn find_keyword(token: &str) -> Option<&'static KeywordRule> {
    KEYWORD_RULES.iter().find(|rule| rule.keyword == token)
}

fn find_param(key: &str) -> Option<&'static ParamRule> {
    PARAM_RULES.iter().find(|rule| rule.key == key)
}

/// Read one token.
///
/// Returns `Ok(None)` for free text.
pub fn parse_token(token: &str) -> Result<Option<DocRule>, MissingValue> {
    let Some((key, value)) = token.split_once(':') else {
        return Ok(find_keyword(token).map(|rule| DocRule {
            annotation: rule.annotation,
            params: vec![],
        }));
    };

    let Some(rule) = find_param(key) else {
        return Ok(None);
    };

    if value.is_empty() {
        return Err(MissingValue { rule: rule.key });
    }

    let params = match rule.arity {
        RuleArity::Single => vec![value.to_string()],
        RuleArity::List => {
            let values: Vec<String> = value.split(',').map(str::to_string).collect();
            if values.iter().any(String::is_empty) {
                return Err(MissingValue { rule: rule.key });
            }
            values
        }
    };

    Ok(Some(DocRule {
        annotation: rule.annotation,
        params,
    }))
}

/// Read every token, in order.
///
/// A rule fires at most once, at the position of its first token.
pub fn parse_rules(tokens: &[&str]) -> Result<Vec<DocRule>, MissingValue> {
    let mut rules: Vec<DocRule> = Vec::new();

    for token in tokens {
        if let Some(rule) = parse_token(token)? {
            if rules.iter().all(|r| r.annotation != rule.annotation) {
                rules.push(rule);
            }
        }
    }

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rule(annotation: &'static str, params: &[&str]) -> DocRule {
        DocRule {
            annotation,
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_tokenize() {
        assert!(tokenize(None).is_empty());
        assert!(tokenize(Some("   ")).is_empty());
        assert_eq!(tokenize(Some("isEmail  min:3\tmax:4")), vec!["isEmail", "min:3", "max:4"]);
    }

    #[test]
    fn test_every_keyword_parses() {
        for entry in KEYWORD_RULES {
            assert_eq!(
                parse_token(entry.keyword).unwrap(),
                Some(rule(entry.annotation, &[]))
            );
        }
    }

    #[test]
    fn test_length_rules_in_token_order() {
        let rules = parse_rules(&["minLength:3", "maxLength:10"]).unwrap();
        assert_eq!(
            rules,
            vec![rule("MinLength", &["3"]), rule("MaxLength", &["10"])]
        );

        let rules = parse_rules(&["maxLength:10", "minLength:3"]).unwrap();
        assert_eq!(
            rules,
            vec![rule("MaxLength", &["10"]), rule("MinLength", &["3"])]
        );
    }

    #[test]
    fn test_min_is_not_confused_with_min_length() {
        let rules = parse_rules(&["minLength:2", "min:5"]).unwrap();
        assert_eq!(rules, vec![rule("MinLength", &["2"]), rule("Min", &["5"])]);
    }

    #[test]
    fn test_in_rule_splits_values() {
        assert_eq!(
            parse_token("in:draft,published,archived").unwrap(),
            Some(rule("IsIn", &["draft", "published", "archived"]))
        );
    }

    #[test]
    fn test_single_value_keeps_commas_and_colons() {
        assert_eq!(
            parse_token("max:1,5").unwrap(),
            Some(rule("Max", &["1,5"]))
        );
        assert_eq!(
            parse_token("isDivisibleBy:2:3").unwrap(),
            Some(rule("IsDivisibleBy", &["2:3"]))
        );
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse_token("minLength:").unwrap_err(),
            MissingValue { rule: "minLength" }
        );
        assert_eq!(parse_token("in:").unwrap_err(), MissingValue { rule: "in" });
        assert_eq!(parse_token("in:a,,b").unwrap_err(), MissingValue { rule: "in" });
        assert!(parse_rules(&["isEmail", "max:"]).is_err());
    }

    #[test]
    fn test_free_text_is_ignored() {
        assert_eq!(parse_token("the").unwrap(), None);
        assert_eq!(parse_token("https://example.com").unwrap(), None);
        assert_eq!(parse_token("note:").unwrap(), None);
        assert_eq!(parse_token("IsEmail").unwrap(), None);
    }

    #[test]
    fn test_repeated_rules_fire_once() {
        let rules = parse_rules(&["isEmail", "min:1", "isEmail", "min:2"]).unwrap();
        assert_eq!(rules, vec![rule("IsEmail", &[]), rule("Min", &["1"])]);
    }
}
