//! Compiles filter expressions into WHERE-clause fragments.

use crate::{
    error::FilterError,
    expr::{Filter, FilterExpr},
    ops::{OpClass, Operator, is_operator},
};

/// Builds the WHERE-clause text for a filter.
///
/// Raw conditions pass through byte-identical; structured expressions are
/// compiled. The result is a bare condition fragment without the `WHERE`
/// keyword, empty for an empty expression.
pub fn build_where_clause(filter: &Filter) -> Result<String, FilterError> {
    match filter {
        Filter::Raw(text) => Ok(text.clone()),
        Filter::Expr(expr) => compile_expr(expr, None),
    }
}

/// Recursively compiles one expression node.
///
/// `enclosing` carries the operator symbol the node appears under, so that
/// scalars and arrays render with the right token and field keys inherit the
/// operator of their context (defaulting to `$eq`).
pub fn compile_expr(expr: &FilterExpr, enclosing: Option<&str>) -> Result<String, FilterError> {
    match expr {
        FilterExpr::Literal(lit) => match enclosing {
            None => Ok(lit.to_bare()),
            Some(symbol) => {
                let op = Operator::lookup(symbol)?;
                Ok(format!("{} {}", op.token, lit.to_sql()))
            }
        },
        FilterExpr::Array(items) => {
            let Some(symbol) = enclosing else {
                return Err(FilterError::UnsupportedExpression(
                    "array value with no enclosing operator".to_string(),
                ));
            };
            let op = Operator::lookup(symbol)?;
            let rendered = items
                .iter()
                .map(|item| match item {
                    FilterExpr::Literal(lit) => Ok(lit.to_sql()),
                    other => Err(FilterError::UnsupportedExpression(format!(
                        "non-scalar item in {symbol} list: {other:?}"
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("{} [{}]", op.token, rendered.join(" , ")))
        }
        FilterExpr::Map(pairs) => compile_map(pairs, enclosing),
    }
}

fn compile_map(
    pairs: &[(String, FilterExpr)],
    enclosing: Option<&str>,
) -> Result<String, FilterError> {
    let mut out = String::new();
    for (key, value) in pairs {
        if is_operator(key) {
            let op = Operator::lookup(key)?;
            match (op.class, value) {
                (OpClass::Logical, FilterExpr::Array(items)) => {
                    let parts = items
                        .iter()
                        .map(|item| compile_expr(item, Some(key)))
                        .collect::<Result<Vec<_>, _>>()?;
                    let joined = parts.join(&format!(" {} ", op.token));
                    let group = match op.negation_prefix {
                        // The prefix applies only when this group opens the
                        // current level, matching upstream behavior.
                        Some(prefix) if out.is_empty() => {
                            format!("{} ({joined})", Operator::lookup(prefix)?.token)
                        }
                        _ => format!("({joined})"),
                    };
                    push_fragment(&mut out, " AND ", &group);
                }
                // Comparison/Unary operators, and logical operators over a
                // non-array value, render themselves with no field prefix.
                _ => {
                    let fragment = compile_expr(value, Some(key))?;
                    push_fragment(&mut out, " ", &fragment);
                }
            }
        } else {
            let effective = Operator::lookup(enclosing.unwrap_or("$eq"))?;
            match effective.class {
                OpClass::Comparison => {
                    let fragment = match value {
                        FilterExpr::Map(_) => {
                            format!("{key} {}", compile_expr(value, None)?)
                        }
                        FilterExpr::Literal(lit) => {
                            format!("{key} {} {}", effective.token, lit.to_sql())
                        }
                        FilterExpr::Array(_) => {
                            return Err(FilterError::UnsupportedExpression(format!(
                                "array value for field '{key}' without an enclosing operator"
                            )));
                        }
                    };
                    push_fragment(&mut out, " AND ", &fragment);
                }
                // Field keys inside a logical group join with the group's
                // own token rather than AND.
                OpClass::Logical => {
                    let single = FilterExpr::Map(vec![(key.clone(), value.clone())]);
                    let fragment = compile_expr(&single, None)?;
                    push_fragment(&mut out, &format!(" {} ", effective.token), &fragment);
                }
                OpClass::Unary => {
                    let single = FilterExpr::Map(vec![(key.clone(), value.clone())]);
                    let fragment = format!("{} {}", effective.token, compile_expr(&single, None)?);
                    push_fragment(&mut out, " ", &fragment);
                }
            }
        }
    }
    Ok(out)
}

fn push_fragment(out: &mut String, separator: &str, fragment: &str) {
    if !out.is_empty() {
        out.push_str(separator);
    }
    out.push_str(fragment);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::FilterExpr as E;

    fn compile(expr: E) -> String {
        build_where_clause(&Filter::Expr(expr)).unwrap()
    }

    fn compile_json(json: &str) -> String {
        let filter: Filter = serde_json::from_str(json).unwrap();
        build_where_clause(&filter).unwrap()
    }

    #[test]
    fn test_numeric_equality() {
        assert_eq!(compile(E::field("age", 18)), "age = 18");
    }

    #[test]
    fn test_string_equality_is_quoted() {
        assert_eq!(compile(E::field("firstname", "saeed")), "firstname = 'saeed'");
    }

    #[test]
    fn test_comparison_operator() {
        assert_eq!(compile(E::field("age", E::field("$gt", 18))), "age > 18");
    }

    #[test]
    fn test_in_list() {
        assert_eq!(
            compile(E::field("age", E::field("$in", E::array([18, 25])))),
            "age IN [18 , 25]"
        );
    }

    #[test]
    fn test_string_in_list() {
        assert_eq!(
            compile_json(r#"{"firstname": {"$in": ["saeed", "sara"]}}"#),
            "firstname IN ['saeed' , 'sara']"
        );
    }

    #[test]
    fn test_or_group() {
        assert_eq!(
            compile_json(r#"{"$or": [{"a": 1}, {"b": 2}]}"#),
            "(a = 1 OR b = 2)"
        );
    }

    #[test]
    fn test_and_group() {
        assert_eq!(
            compile_json(r#"{"$and": [{"a": 1}, {"b": 2}]}"#),
            "(a = 1 AND b = 2)"
        );
    }

    // Against records {saeed/18, sara/15, majid/25} this condition selects
    // exactly those with (firstname=saeed AND age>18) OR age<=18, i.e. sara
    // plus any saeed older than 18.
    #[test]
    fn test_nested_or_of_and_group_and_comparison() {
        assert_eq!(
            compile_json(
                r#"{"$or": [
                    {"$and": [{"firstname": "saeed"}, {"age": {"$gt": 18}}]},
                    {"age": {"$lte": 18}}
                ]}"#
            ),
            "((firstname = 'saeed' AND age > 18) OR age <= 18)"
        );
    }

    #[test]
    fn test_multiple_fields_join_with_and() {
        assert_eq!(
            compile_json(r#"{"age": 18, "firstname": "saeed"}"#),
            "age = 18 AND firstname = 'saeed'"
        );
    }

    #[test]
    fn test_key_order_determines_fragment_order() {
        assert_eq!(compile_json(r#"{"b": 2, "a": 1}"#), "b = 2 AND a = 1");
    }

    #[test]
    fn test_not_prefixes_condition() {
        assert_eq!(
            compile_json(r#"{"$not": {"age": 18}}"#),
            "NOT age = 18"
        );
    }

    #[test]
    fn test_nor_group_prefixed_when_first() {
        assert_eq!(
            compile_json(r#"{"$nor": [{"a": 1}, {"b": 2}]}"#),
            "NOT (a = 1 OR b = 2)"
        );
    }

    // Upstream applies the NOT prefix only to a group that opens its level;
    // a later $nor renders as a plain OR group.
    #[test]
    fn test_nor_group_unprefixed_when_not_first() {
        assert_eq!(
            compile_json(r#"{"a": 1, "$nor": [{"b": 2}, {"c": 3}]}"#),
            "a = 1 AND (b = 2 OR c = 3)"
        );
    }

    #[test]
    fn test_nin_list() {
        assert_eq!(
            compile_json(r#"{"age": {"$nin": [18, 25]}}"#),
            "age NOT IN [18 , 25]"
        );
    }

    #[test]
    fn test_like_and_text_operators() {
        assert_eq!(
            compile_json(r#"{"firstname": {"$like": "sa%"}}"#),
            "firstname LIKE 'sa%'"
        );
        assert_eq!(
            compile_json(r#"{"bio": {"$text": "rust"}}"#),
            "bio CONTAINSTEXT 'rust'"
        );
        assert_eq!(
            compile_json(r#"{"firstname": {"$regex": "^sa"}}"#),
            "firstname MATCHES '^sa'"
        );
    }

    #[test]
    fn test_multi_field_item_inside_or_joins_with_or() {
        assert_eq!(
            compile_json(r#"{"$or": [{"a": 1, "b": 2}]}"#),
            "(a = 1 OR b = 2)"
        );
    }

    #[test]
    fn test_raw_passthrough_identity() {
        let raw = Filter::Raw("age > 18 AND city = 'tehran'".to_string());
        assert_eq!(
            build_where_clause(&raw).unwrap(),
            "age > 18 AND city = 'tehran'"
        );
    }

    #[test]
    fn test_compile_is_deterministic() {
        let filter: Filter =
            serde_json::from_str(r#"{"$or": [{"a": 1}, {"b": {"$gte": 2}}]}"#).unwrap();
        let first = build_where_clause(&filter).unwrap();
        let second = build_where_clause(&filter).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_expression_compiles_to_empty_string() {
        assert_eq!(compile(E::Map(vec![])), "");
    }

    #[test]
    fn test_unknown_operator_is_rejected() {
        let filter: Filter = serde_json::from_str(r#"{"age": {"$bogus": 1}}"#).unwrap();
        assert_eq!(
            build_where_clause(&filter),
            Err(FilterError::InvalidOperator("$bogus".to_string()))
        );
    }

    #[test]
    fn test_array_without_operator_is_rejected() {
        let filter: Filter = serde_json::from_str(r#"{"tags": [1, 2]}"#).unwrap();
        assert!(matches!(
            build_where_clause(&filter),
            Err(FilterError::UnsupportedExpression(_))
        ));
    }

    #[test]
    fn test_embedded_quote_is_doubled() {
        assert_eq!(
            compile(E::field("lastname", "O'Brien")),
            "lastname = 'O''Brien'"
        );
    }

    #[test]
    fn test_boolean_and_float_literals() {
        assert_eq!(compile(E::field("active", true)), "active = true");
        assert_eq!(
            compile(E::field("score", E::field("$gte", 2.5))),
            "score >= 2.5"
        );
    }
}
