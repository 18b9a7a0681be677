//! The signature model and parameter classifier behind `curried!`.
//!
//! The macro consumes function definitions in a lightly extended Rust
//! grammar: a parameter may carry a default marker (`name: Type = expr`)
//! and the last parameter may be a variadic collector (`...name: Type`).
//! This module parses that grammar into a structured signature and decides,
//! per function, which parameters are curried one at a time (the chain) and
//! which are supplied together with the final call (the pass-through set).

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Block, Expr, Generics, Ident, ReturnType, Token, Type, Visibility};

/// Reserved name of a trailing variadic parameter that belongs to the
/// pass-through set. Any other variadic name stays in the chain.
pub const PASS_THROUGH_VARIADIC: &str = "optional_args";

/// Function names that are never transformed, so the machinery implementing
/// currying is not itself curry-transformed. Kept as an explicit list
/// rather than inferred structurally.
pub const EXCLUDED_NAMES: [&str; 2] = ["curry", "auto_curry"];

/// One declared parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    /// The parameter name, preserved verbatim into generated code.
    pub name: Ident,
    /// The declared type. For a variadic parameter this is the collector
    /// type the body sees (for example `Vec<i32>`).
    pub ty: Type,
    /// The default expression, if any. A default is a classification
    /// marker: generated code still takes the argument explicitly.
    pub default: Option<Expr>,
    /// Whether the parameter was declared with a `...` prefix.
    pub variadic: bool,
}

impl Parse for Parameter {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let variadic = if input.peek(Token![...]) {
            input.parse::<Token![...]>()?;
            true
        } else {
            false
        };
        let name: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let ty: Type = input.parse()?;
        let default = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(input.parse::<Expr>()?)
        } else {
            None
        };
        Ok(Self {
            name,
            ty,
            default,
            variadic,
        })
    }
}

/// A parsed function definition: the structured shape the synthesizer
/// consumes and re-emits. The body is carried as an opaque block and is
/// never rewritten.
#[derive(Debug, Clone)]
pub struct FunctionDefinition {
    /// Outer attributes, re-emitted on the generated definition.
    pub attributes: Vec<Attribute>,
    /// The declared visibility.
    pub visibility: Visibility,
    /// The function name.
    pub name: Ident,
    /// Generics, including any trailing where-clause.
    pub generics: Generics,
    /// The declared parameters, in order.
    pub parameters: Vec<Parameter>,
    /// The declared return type.
    pub output: ReturnType,
    /// The function body, copied verbatim into the innermost level.
    pub body: Block,
}

impl Parse for FunctionDefinition {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attributes = input.call(Attribute::parse_outer)?;
        let visibility: Visibility = input.parse()?;
        input.parse::<Token![fn]>()?;
        let name: Ident = input.parse()?;
        let mut generics: Generics = input.parse()?;

        let content;
        syn::parenthesized!(content in input);
        let parameters: Punctuated<Parameter, Token![,]> =
            content.parse_terminated(Parameter::parse, Token![,])?;
        let parameters: Vec<Parameter> = parameters.into_iter().collect();
        validate_parameters(&parameters)?;

        let output: ReturnType = input.parse()?;
        if input.peek(Token![where]) {
            generics.where_clause = Some(input.parse()?);
        }
        let body: Block = input.parse()?;

        Ok(Self {
            attributes,
            visibility,
            name,
            generics,
            parameters,
            output,
            body,
        })
    }
}

/// A batch of function definitions, transformed independently.
#[derive(Debug, Clone)]
pub struct FunctionBatch {
    /// The definitions, in source order.
    pub functions: Vec<FunctionDefinition>,
}

impl Parse for FunctionBatch {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut functions = Vec::new();
        while !input.is_empty() {
            functions.push(input.parse()?);
        }
        Ok(Self { functions })
    }
}

fn validate_parameters(parameters: &[Parameter]) -> syn::Result<()> {
    for (index, parameter) in parameters.iter().enumerate() {
        if parameter.variadic && index != parameters.len() - 1 {
            return Err(syn::Error::new(
                parameter.name.span(),
                "variadic parameter must be the last parameter",
            ));
        }
    }
    Ok(())
}

/// A signature partitioned into curried and pass-through parameters, both
/// in declared order.
#[derive(Debug, Clone)]
pub struct ClassifiedSignature {
    /// Parameters curried one at a time.
    pub chain: Vec<Parameter>,
    /// Parameters supplied together with the final chain argument.
    pub pass_through: Vec<Parameter>,
}

/// Partitions a parameter list.
///
/// A parameter is pass-through when it has a default, or when it is the
/// variadic collector named [`PASS_THROUGH_VARIADIC`]; everything else,
/// including a variadic collector under any other name, is chained.
pub fn classify(parameters: &[Parameter]) -> ClassifiedSignature {
    let (pass_through, chain): (Vec<Parameter>, Vec<Parameter>) = parameters
        .iter()
        .cloned()
        .partition(|parameter| is_pass_through(parameter));
    ClassifiedSignature {
        chain,
        pass_through,
    }
}

fn is_pass_through(parameter: &Parameter) -> bool {
    parameter.default.is_some()
        || (parameter.variadic && parameter.name == PASS_THROUGH_VARIADIC)
}

/// Decides whether a function is eligible for curry transformation.
///
/// True when more than one parameter is chained, or exactly one is chained
/// alongside at least one pass-through parameter. Functions on
/// [`EXCLUDED_NAMES`] are never eligible. A signature whose chain is empty
/// is not eligible either; such definitions are re-emitted untransformed,
/// never rejected.
pub fn is_curryable(name: &Ident, parameters: &[Parameter]) -> bool {
    let name = name.to_string();
    if EXCLUDED_NAMES.contains(&name.as_str()) {
        return false;
    }
    let classified = classify(parameters);
    classified.chain.len() > 1
        || (classified.chain.len() == 1 && !classified.pass_through.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse_function(source: &str) -> FunctionDefinition {
        syn::parse_str(source).expect("source should parse")
    }

    #[rstest]
    #[case::two_required("fn f(first: i32, second: i32) -> i32 { first + second }", true)]
    #[case::one_required("fn f(value: i32) -> i32 { value }", false)]
    #[case::one_required_one_default("fn f(value: i32, other: i32 = 0) -> i32 { value + other }", true)]
    #[case::no_parameters("fn f() -> i32 { 0 }", false)]
    #[case::only_defaults("fn f(first: i32 = 1, second: i32 = 2) -> i32 { first + second }", false)]
    #[case::required_plus_marker_variadic(
        "fn f(value: i32, ...optional_args: Vec<i32>) -> i32 { value }",
        true
    )]
    #[case::only_marker_variadic("fn f(...optional_args: Vec<i32>) -> usize { optional_args.len() }", false)]
    #[case::required_plus_other_variadic(
        "fn f(value: i32, ...rest: Vec<i32>) -> i32 { value }",
        true
    )]
    #[case::excluded_curry("fn curry(first: i32, second: i32) -> i32 { first + second }", false)]
    #[case::excluded_auto_curry("fn auto_curry(first: i32, second: i32) -> i32 { first }", false)]
    fn test_curryable_verdict(#[case] source: &str, #[case] expected: bool) {
        let function = parse_function(source);
        assert_eq!(
            is_curryable(&function.name, &function.parameters),
            expected
        );
    }

    #[test]
    fn test_classification_preserves_declared_order() {
        let function = parse_function(
            "fn f(first: i32, second: i32 = 0, third: i32, fourth: i32 = 1) -> i32 { first }",
        );
        let classified = classify(&function.parameters);
        let chain: Vec<String> = classified
            .chain
            .iter()
            .map(|parameter| parameter.name.to_string())
            .collect();
        let pass_through: Vec<String> = classified
            .pass_through
            .iter()
            .map(|parameter| parameter.name.to_string())
            .collect();
        assert_eq!(chain, ["first", "third"]);
        assert_eq!(pass_through, ["second", "fourth"]);
    }

    #[test]
    fn test_marker_variadic_moves_to_pass_through() {
        let function =
            parse_function("fn f(value: i32, ...optional_args: Vec<i32>) -> i32 { value }");
        let classified = classify(&function.parameters);
        assert_eq!(classified.chain.len(), 1);
        assert_eq!(classified.pass_through.len(), 1);
        assert_eq!(classified.pass_through[0].name, PASS_THROUGH_VARIADIC);
    }

    #[test]
    fn test_other_variadic_names_stay_in_the_chain() {
        let function = parse_function("fn f(value: i32, ...rest: Vec<i32>) -> i32 { value }");
        let classified = classify(&function.parameters);
        assert_eq!(classified.chain.len(), 2);
        assert!(classified.pass_through.is_empty());
        assert!(classified.chain[1].variadic);
    }

    #[test]
    fn test_default_expression_is_recorded() {
        let function = parse_function("fn f(value: i32, scale: i32 = 10) -> i32 { value * scale }");
        assert!(function.parameters[0].default.is_none());
        assert!(function.parameters[1].default.is_some());
    }

    #[test]
    fn test_variadic_must_be_last() {
        let parsed =
            syn::parse_str::<FunctionDefinition>("fn f(...rest: Vec<i32>, value: i32) -> i32 { value }");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_at_most_one_variadic() {
        let parsed = syn::parse_str::<FunctionDefinition>(
            "fn f(...rest: Vec<i32>, ...optional_args: Vec<i32>) -> i32 { 0 }",
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_where_clause_is_attached_to_generics() {
        let function = parse_function(
            "fn f<A>(first: A, second: A) -> A where A: Clone { first }",
        );
        assert!(function.generics.where_clause.is_some());
    }
}
