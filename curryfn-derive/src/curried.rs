//! Implementation of the `curried!` procedural macro.
//!
//! The macro takes a batch of function definitions and rewrites each
//! eligible one into a chain of single-argument levels: the function itself
//! accepts the first chain parameter, every nested closure accepts the
//! next, and the innermost level accepts the last chain parameter together
//! with all pass-through parameters and contains the original body
//! unchanged. Definitions that are not eligible are re-emitted as plain
//! functions.
//!
//! # Generated Code Structure
//!
//! For `fn volume(width: f64, height: f64, depth: f64) -> f64 { ... }` the
//! macro generates:
//!
//! ```text
//! fn volume(width: f64) -> impl Fn(f64) -> impl Fn(f64) -> f64 {
//!     let width = Rc::new(width);
//!     move |height: f64| {
//!         let width = Rc::clone(&width);
//!         let height = Rc::new(height);
//!         move |depth: f64| {
//!             let width = Rc::unwrap_or_clone(Rc::clone(&width));
//!             let height = Rc::unwrap_or_clone(Rc::clone(&height));
//!             { ... }
//!         }
//!     }
//! }
//! ```
//!
//! Accumulated chain arguments travel between levels in `Rc` and are
//! re-cloned inside each level's call, so every level is a reusable `Fn`
//! and non-`Copy` argument types work; the declared names are rebound to
//! plain values immediately before the body. Pass-through parameters (a
//! default marker or the `optional_args` variadic collector) appear once,
//! on the innermost level:
//!
//! ```text
//! fn slice(start: usize, items: Vec<i32>, count: usize = usize::MAX)
//! // becomes
//! fn slice(start: usize) -> impl Fn(Vec<i32>, usize) -> ...
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::ReturnType;

use crate::signature::{
    ClassifiedSignature, FunctionBatch, FunctionDefinition, Parameter, classify, is_curryable,
};

pub fn curried_impl(input: TokenStream) -> TokenStream {
    let expanded = match syn::parse::<FunctionBatch>(input) {
        Ok(batch) => expand_batch(&batch),
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

/// Expands every definition in the batch, in source order.
pub fn expand_batch(batch: &FunctionBatch) -> TokenStream2 {
    batch.functions.iter().map(expand_function).collect()
}

/// Expands one definition: curried if eligible, untransformed otherwise.
pub fn expand_function(function: &FunctionDefinition) -> TokenStream2 {
    if is_curryable(&function.name, &function.parameters) {
        emit_curried(function, &classify(&function.parameters))
    } else {
        emit_untransformed(function)
    }
}

/// Re-emits a definition as a plain function, extended markers stripped.
fn emit_untransformed(function: &FunctionDefinition) -> TokenStream2 {
    let FunctionDefinition {
        attributes,
        visibility,
        name,
        generics,
        parameters,
        output,
        body,
    } = function;
    let where_clause = &generics.where_clause;
    let parameters = parameters.iter().map(|parameter| {
        let name = &parameter.name;
        let ty = &parameter.ty;
        quote! { #name: #ty }
    });

    quote! {
        #(#attributes)*
        #visibility fn #name #generics (#(#parameters),*) #output #where_clause #body
    }
}

/// Emits the curried form of an eligible definition.
fn emit_curried(function: &FunctionDefinition, classified: &ClassifiedSignature) -> TokenStream2 {
    let FunctionDefinition {
        attributes,
        visibility,
        name,
        generics,
        output,
        body,
        ..
    } = function;
    let where_clause = &generics.where_clause;

    let first = &classified.chain[0];
    let first_name = &first.name;
    let first_type = &first.ty;

    let return_type = nested_return_type(&classified.chain[1..], &classified.pass_through, output);
    let closure_chain = build_closure_chain(&classified.chain, &classified.pass_through, body);

    quote! {
        #(#attributes)*
        #visibility fn #name #generics (#first_name: #first_type) -> #return_type #where_clause {
            let #first_name = ::std::rc::Rc::new(#first_name);
            #closure_chain
        }
    }
}

/// Builds the nested `impl Fn` return type, one level per remaining chain
/// parameter, with the pass-through types on the innermost level.
fn nested_return_type(
    rest: &[Parameter],
    pass_through: &[Parameter],
    output: &ReturnType,
) -> TokenStream2 {
    let result = match output {
        ReturnType::Default => quote! { () },
        ReturnType::Type(_, ty) => ty.to_token_stream(),
    };
    let pass_types: Vec<TokenStream2> = pass_through
        .iter()
        .map(|parameter| parameter.ty.to_token_stream())
        .collect();

    match rest.split_last() {
        None => quote! { impl Fn(#(#pass_types),*) -> #result },
        Some((last, middle)) => {
            let last_type = &last.ty;
            let mut current = quote! { impl Fn(#last_type #(, #pass_types)*) -> #result };
            for parameter in middle.iter().rev() {
                let ty = &parameter.ty;
                current = quote! { impl Fn(#ty) -> #current };
            }
            current
        }
    }
}

/// Builds the closure levels from the innermost out.
///
/// Chain parameters that cross a level boundary are held in `Rc`: created
/// on entry to their level, re-cloned inside each inner level's call, and
/// rebound to plain values (under their declared names) immediately before
/// the body.
fn build_closure_chain(
    chain: &[Parameter],
    pass_through: &[Parameter],
    body: &syn::Block,
) -> TokenStream2 {
    let count = chain.len();
    // The sole chain parameter of a single-link chain is captured across
    // the pass-through level, so it needs the same Rc treatment as the
    // leading parameters of a longer chain.
    let captured = if count == 1 { chain } else { &chain[..count - 1] };

    let unwraps = captured.iter().map(|parameter| {
        let name = &parameter.name;
        quote! {
            let #name = ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#name));
        }
    });
    let innermost_parameters = chain[captured.len()..]
        .iter()
        .chain(pass_through)
        .map(|parameter| {
            let name = &parameter.name;
            let ty = &parameter.ty;
            quote! { #name: #ty }
        });

    let mut current = quote! {
        move |#(#innermost_parameters),*| {
            #(#unwraps)*
            #body
        }
    };

    for index in (1..count.saturating_sub(1)).rev() {
        let parameter = &chain[index];
        let name = &parameter.name;
        let ty = &parameter.ty;
        let clones_before = chain[..index].iter().map(|previous| {
            let previous_name = &previous.name;
            quote! {
                let #previous_name = ::std::rc::Rc::clone(&#previous_name);
            }
        });

        current = quote! {
            move |#name: #ty| {
                #(#clones_before)*
                let #name = ::std::rc::Rc::new(#name);
                #current
            }
        };
    }

    current
}
