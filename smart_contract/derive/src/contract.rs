//! [`contract`](super::contract) macro implementation

use darling::{ast::NestedMeta, FromMeta};
use manyhow::emit;
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use wasmlib_macro_utils::{parse_single_attr_opt, strip_attr, Emitter};
use wasmlib_primitives::{Name, MAX_ACTION_ARITY};

const ACTION_ATTR: &str = "action";

/// Arguments of `#[contract(...)]`.
#[derive(Debug, Default, FromMeta)]
pub struct ContractArgs {
    /// Dispatch actions originated by any code, not only by the receiver.
    #[darling(default)]
    any: bool,
}

impl ContractArgs {
    pub fn parse(attr: TokenStream) -> darling::Result<Self> {
        let items = NestedMeta::parse_meta_list(attr)?;
        Self::from_list(&items)
    }
}

/// Arguments of `#[action(...)]`.
#[derive(Debug, Default, FromMeta)]
struct ActionArgs {
    /// Selector name when it differs from the method name.
    #[darling(default)]
    name: Option<String>,
}

enum Returns {
    Nothing,
    Value,
}

struct Action {
    method: syn::Ident,
    name: String,
    selector: Name,
    arg_types: Vec<syn::Type>,
    returns: Returns,
    span: Span,
}

pub fn impl_contract(
    emitter: &mut Emitter,
    args: &ContractArgs,
    mut item: syn::ItemImpl,
) -> TokenStream {
    if let Some((_, path, _)) = &item.trait_ {
        emit!(
            emitter,
            path,
            "`#[contract]` must be placed on an inherent `impl` block"
        );
    }
    if !item.generics.params.is_empty() {
        emit!(emitter, item.generics, "Generic contracts are not supported");
    }

    let mut actions = Vec::new();
    for impl_item in &mut item.items {
        let syn::ImplItem::Fn(method) = impl_item else {
            continue;
        };

        let parsed =
            emitter.handle(parse_single_attr_opt::<ActionArgs>(ACTION_ATTR, &method.attrs));
        strip_attr(ACTION_ATTR, &mut method.attrs);

        if let Some(Some(action_args)) = parsed {
            if let Some(action) = parse_action(emitter, method, action_args) {
                actions.push(action);
            }
        }
    }

    if actions.is_empty() {
        emit!(
            emitter,
            item.self_ty,
            "`#[contract]` impl block must declare at least one `#[action]` method"
        );
    }
    dedup_selectors(emitter, &mut actions);

    let self_ty = &item.self_ty;
    let mode = if args.any {
        quote!(Any)
    } else {
        quote!(Standard)
    };

    let entries = actions.iter().map(|action| {
        let Action {
            method,
            name,
            arg_types,
            returns,
            ..
        } = action;

        match returns {
            Returns::Nothing => quote! {
                ::wasmlib_contract::ActionEntry::void(
                    ::wasmlib_contract::Name::new(#name),
                    |context, payload| {
                        ::wasmlib_contract::execute_action::<#self_ty, (#(#arg_types,)*), _>(
                            context,
                            payload,
                            <#self_ty>::#method,
                        )
                    },
                )
            },
            Returns::Value => quote! {
                ::wasmlib_contract::ActionEntry::with_return(
                    ::wasmlib_contract::Name::new(#name),
                    |context, payload| {
                        ::wasmlib_contract::execute_action_with_return::<#self_ty, (#(#arg_types,)*), _>(
                            context,
                            payload,
                            <#self_ty>::#method,
                        )
                    },
                )
            },
        }
    });

    let call_exports = actions
        .iter()
        .filter(|action| matches!(action.returns, Returns::Value))
        .map(|action| {
            let name = &action.name;
            let export_name = format!("call_{name}");
            let fn_name = format_ident!("__wasmlib_call_{}", action.method.unraw());

            quote! {
                #[export_name = #export_name]
                extern "C" fn #fn_name() -> i64 {
                    ::wasmlib_contract::call_entrypoint::<#self_ty>(
                        ::wasmlib_contract::Name::new(#name),
                    )
                }
            }
        });

    quote! {
        #item

        impl ::wasmlib_contract::Dispatch for #self_ty {
            const MODE: ::wasmlib_contract::DispatchMode =
                ::wasmlib_contract::DispatchMode::#mode;

            const ACTIONS: ::wasmlib_contract::SelectorTable = {
                const ENTRIES: &[::wasmlib_contract::ActionEntry] = &[#(#entries),*];
                ::wasmlib_contract::SelectorTable::new(ENTRIES)
            };
        }

        #[cfg(target_arch = "wasm32")]
        #[allow(unsafe_code)]
        const _: () = {
            #[no_mangle]
            extern "C" fn apply(receiver: u64, code: u64, action: u64) {
                ::wasmlib_contract::entrypoint::<#self_ty>(receiver, code, action)
            }

            #(#call_exports)*
        };
    }
}

fn parse_action(
    emitter: &mut Emitter,
    method: &syn::ImplItemFn,
    args: ActionArgs,
) -> Option<Action> {
    let sig = &method.sig;
    let mut valid = true;

    if !sig.generics.params.is_empty() {
        emit!(emitter, sig.generics, "Action methods can't be generic");
        valid = false;
    }
    if sig.asyncness.is_some() {
        emit!(emitter, sig.fn_token, "Action methods can't be `async`");
        valid = false;
    }

    let mut inputs = sig.inputs.iter();
    match inputs.next() {
        Some(syn::FnArg::Receiver(receiver))
            if receiver.reference.is_some() && receiver.mutability.is_some() => {}
        Some(arg) => {
            emit!(emitter, arg, "Action methods must take `&mut self`");
            valid = false;
        }
        None => {
            emit!(emitter, sig.ident, "Action methods must take `&mut self`");
            valid = false;
        }
    }

    let mut arg_types = Vec::new();
    for arg in inputs {
        let syn::FnArg::Typed(pat_type) = arg else {
            continue;
        };
        let ty = &*pat_type.ty;
        if matches!(ty, syn::Type::Reference(_) | syn::Type::ImplTrait(_)) {
            emit!(
                emitter,
                ty,
                "Action arguments must be owned types decodable from the payload"
            );
            valid = false;
        }
        arg_types.push(ty.clone());
    }
    if let Some(extra) = arg_types.get(MAX_ACTION_ARITY) {
        emit!(
            emitter,
            extra,
            "Action methods take at most {} arguments besides `&mut self`",
            MAX_ACTION_ARITY
        );
        valid = false;
    }

    let returns = match &sig.output {
        syn::ReturnType::Default => Returns::Nothing,
        syn::ReturnType::Type(_, ty) if is_unit(ty) => Returns::Nothing,
        syn::ReturnType::Type(_, ty) if is_i64(ty) => Returns::Value,
        syn::ReturnType::Type(_, ty) => {
            emit!(emitter, ty, "Action methods must return `()` or `i64`");
            valid = false;
            Returns::Nothing
        }
    };

    let name = args.name.unwrap_or_else(|| sig.ident.unraw().to_string());
    let selector = match Name::try_new(&name) {
        Ok(selector) => selector,
        Err(err) => {
            emitter.emit(syn::Error::new(
                sig.ident.span(),
                format!(
                    "`{name}` is not a valid action name: {err}; \
                     use `#[action(name = \"...\")]` to set the selector name"
                ),
            ));
            return None;
        }
    };

    valid.then(|| Action {
        method: sig.ident.clone(),
        name,
        selector,
        arg_types,
        returns,
        span: sig.ident.span(),
    })
}

/// Report actions sharing a selector with an earlier one and drop them from
/// the generated table.
fn dedup_selectors(emitter: &mut Emitter, actions: &mut Vec<Action>) {
    let mut seen: Vec<(Name, String)> = Vec::with_capacity(actions.len());
    actions.retain(|action| {
        let previous = seen.iter().find(|(selector, _)| *selector == action.selector);
        if let Some((_, previous)) = previous {
            emitter.emit(syn::Error::new(
                action.span,
                format!("Action `{}` has the same selector as `{previous}`", action.name),
            ));
            return false;
        }
        seen.push((action.selector, action.name.clone()));
        true
    });
}

fn is_unit(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Tuple(tuple) if tuple.elems.is_empty())
}

fn is_i64(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Path(path) if path.qself.is_none() && path.path.is_ident("i64"))
}
