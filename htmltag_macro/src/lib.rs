use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{parenthesized, Expr, Ident, Token};

/// The method name that writes its arguments instead of opening a tag.
const WRITE_METHOD: &str = "write";

/// Input format: `<writer>, <method>(<args>)`
struct DynamicCall {
    writer: Expr,
    method: Ident,
    args: Punctuated<Arg, Token![,]>,
}
impl Parse for DynamicCall {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let writer = input.parse::<Expr>()?;
        input.parse::<Token![,]>()?;
        let method = input.call(Ident::parse_any)?;
        let content;
        parenthesized!(content in input);
        let args = content.parse_terminated(Arg::parse, Token![,])?;
        // Allow a trailing comma after the call.
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        Ok(DynamicCall {
            writer,
            method,
            args,
        })
    }
}

enum Arg {
    /// `name = value`
    Named { name: Ident, value: Expr },
    /// `value`
    Positional(Expr),
}
impl Parse for Arg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Ident::peek_any) && input.peek2(Token![=]) && !input.peek2(Token![==]) {
            let name = input.call(Ident::parse_any)?;
            input.parse::<Token![=]>()?;
            let value = input.parse::<Expr>()?;
            Ok(Arg::Named { name, value })
        } else {
            Ok(Arg::Positional(input.parse::<Expr>()?))
        }
    }
}
impl Arg {
    fn value(&self) -> &Expr {
        match self {
            Arg::Named { value, .. } | Arg::Positional(value) => value,
        }
    }
}

fn expand(call: DynamicCall) -> syn::Result<TokenStream2> {
    let DynamicCall {
        writer,
        method,
        args,
    } = call;
    let method_name = method.unraw().to_string();

    if method_name.eq_ignore_ascii_case(WRITE_METHOD) {
        if let Some(Arg::Named { name, .. }) = args.iter().find(|a| matches!(a, Arg::Named { .. })) {
            return Err(syn::Error::new(
                name.span(),
                "`write` takes positional arguments only",
            ));
        }
        let values = args.iter().map(Arg::value);
        return Ok(quote! {
            (#writer).write_args(&[#(::htmltag::Value::from(#values)),*])
        });
    }

    let mut names = Vec::with_capacity(args.len());
    let mut values = Vec::with_capacity(args.len());
    for arg in &args {
        match arg {
            Arg::Named { name, value } => {
                names.push(name.unraw().to_string());
                values.push(value);
            }
            Arg::Positional(value) => {
                return Err(syn::Error::new_spanned(
                    value.to_token_stream(),
                    "tag attributes must be named, e.g. `href = \"/\"`",
                ));
            }
        }
    }
    let count = names.len();

    Ok(quote! {
        (#writer).invoke(#method_name, {
            let __args: [(&'static str, ::htmltag::Value); #count] =
                [#((#names, ::htmltag::Value::from(#values))),*];
            __args
        })
    })
}

#[proc_macro]
/// Calls an [`HtmlWriter`](../htmltag/struct.HtmlWriter.html) with dynamic
/// call syntax: the method name is the tag and the named arguments are its
/// attributes.
///
/// # Syntax
///
/// ```ignore
/// dynamic!(<writer>, <tag>(<attr> = <value>, ...))
/// dynamic!(<writer>, write(<value>, ...))
/// ```
///
/// The writer can be an `HtmlWriter` or an open `HtmlTag`. The tag name is
/// lowercased and underscores in attribute names become dashes; raw
/// identifiers such as `r#type` lose their prefix. Tag calls expand to
/// `HtmlWriter::invoke` and return `Result<Option<HtmlTag>>`; `write` calls
/// expand to `HtmlWriter::write_args` and return `Result<()>`.
///
/// Tag attributes must be named and `write` arguments must be positional;
/// anything else is a compile error.
///
/// # Example
///
/// ```ignore
/// use htmltag::{dynamic, HtmlWriter};
///
/// let mut w = HtmlWriter::buffer();
/// dynamic!(w, input(r#type = "checkbox", data_role = "toggle"))?;
/// dynamic!(w, write("{0} items", 3))?;
/// ```
pub fn dynamic(input: TokenStream) -> TokenStream {
    let call = syn::parse_macro_input!(input as DynamicCall);
    expand(call)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
