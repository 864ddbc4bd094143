//! Functions and structs shared by wasmlib procedural macros.

mod emitter;

pub use emitter::Emitter;

/// Parse a single helper attribute of the form `#[attr_name]` or
/// `#[attr_name(...)]` with darling.
///
/// The bare form is parsed as an empty list, so every field of `Body` takes
/// its default. Returns `Ok(None)` if there is no attribute with such name.
///
/// # Errors
///
/// - If the attribute is given more than once
/// - If the attribute has the `#[attr_name = ...]` form
/// - If `Body` fails to parse the attribute arguments
pub fn parse_single_attr_opt<Body: darling::FromMeta>(
    attr_name: &str,
    attrs: &[syn::Attribute],
) -> darling::Result<Option<Body>> {
    let mut accumulator = darling::error::Accumulator::default();

    let mut matching = attrs.iter().filter(|attr| attr.path().is_ident(attr_name));
    let Some(attr) = matching.next() else {
        return accumulator.finish_with(None);
    };
    for duplicate in matching {
        // keep parsing the first one to collect more errors
        accumulator.push(
            darling::Error::custom(format!("Only one #[{attr_name}] attribute is allowed"))
                .with_span(duplicate),
        );
    }

    let body = match &attr.meta {
        syn::Meta::Path(_) => accumulator.handle(Body::from_list(&[])),
        syn::Meta::List(_) => accumulator.handle(Body::from_meta(&attr.meta)),
        syn::Meta::NameValue(_) => {
            accumulator.push(
                darling::Error::custom(format!(
                    "Expected #[{attr_name}] or #[{attr_name}(...)] attribute"
                ))
                .with_span(attr),
            );
            None
        }
    };

    accumulator.finish_with(body)
}

/// Remove every attribute named `attr_name` from `attrs`.
pub fn strip_attr(attr_name: &str, attrs: &mut Vec<syn::Attribute>) {
    attrs.retain(|attr| !attr.path().is_ident(attr_name));
}
