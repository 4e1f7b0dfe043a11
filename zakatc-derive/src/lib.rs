use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, token, Data, DeriveInput, Fields, Ident, Lit, LitStr, Meta, Token};

/// Derive macro that generates the declared field table from struct fields.
///
/// Every field must carry a `#[field(...)]` attribute:
///
/// ```ignore
/// /// Amount you have in cash
/// #[field(category = "Cash", label = "Cash at hand", label_ur = "نقدی")]
/// pub cash_at_hand: Decimal,
/// ```
///
/// For each field, extracts:
/// - Field name (respects #[serde(rename = "...")])
/// - Category (must name a `Category` variant in scope)
/// - English and Urdu labels
/// - Hint (from doc comments)
///
/// Generates `declaration_schema() -> &'static [DeclarationField]` and
/// `field_values(&self) -> [T; N]`, both in declaration order. All fields
/// must share the type `T` of the first field.
#[proc_macro_derive(DeclarationSchema, attributes(field, serde))]
pub fn derive_declaration_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct FieldAttrs {
    category: Option<LitStr>,
    label: Option<LitStr>,
    label_ur: Option<LitStr>,
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "DeclarationSchema only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "DeclarationSchema only supports structs",
            ))
        }
    };

    let value_ty = match fields.first() {
        Some(field) => &field.ty,
        None => {
            return Err(syn::Error::new_spanned(
                name,
                "DeclarationSchema needs at least one field",
            ))
        }
    };
    let count = fields.len();

    let mut entries = Vec::with_capacity(count);
    let mut idents = Vec::with_capacity(count);

    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let key = get_serde_rename(&field.attrs).unwrap_or_else(|| ident.to_string());
        let attrs = parse_field_attrs(field)?;

        let category = attrs
            .category
            .ok_or_else(|| syn::Error::new_spanned(ident, "missing `category` in #[field]"))?;
        let category = Ident::new(&category.value(), category.span());
        let label = attrs
            .label
            .ok_or_else(|| syn::Error::new_spanned(ident, "missing `label` in #[field]"))?;
        let label_ur = attrs
            .label_ur
            .unwrap_or_else(|| LitStr::new("", Span::call_site()));
        let hint = get_doc_comment(&field.attrs);

        entries.push(quote! {
            DeclarationField {
                key: #key,
                category: Category::#category,
                label: #label,
                label_ur: #label_ur,
                hint: #hint,
            }
        });
        idents.push(ident);
    }

    Ok(quote! {
        impl #name {
            pub fn declaration_schema() -> &'static [DeclarationField] {
                static SCHEMA: &[DeclarationField] = &[
                    #(#entries),*
                ];
                SCHEMA
            }

            pub fn field_values(&self) -> [#value_ty; #count] {
                [#(self.#idents),*]
            }
        }
    })
}

fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut attrs = FieldAttrs {
        category: None,
        label: None,
        label_ur: None,
    };
    let mut found = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("field") {
            continue;
        }
        found = true;
        attr.parse_nested_meta(|meta| {
            let value: LitStr = meta.value()?.parse()?;
            if meta.path.is_ident("category") {
                attrs.category = Some(value);
            } else if meta.path.is_ident("label") {
                attrs.label = Some(value);
            } else if meta.path.is_ident("label_ur") {
                attrs.label_ur = Some(value);
            } else {
                return Err(meta.error("expected `category`, `label` or `label_ur`"));
            }
            Ok(())
        })?;
    }

    if !found {
        return Err(syn::Error::new_spanned(field, "missing #[field(...)] attribute"));
    }
    Ok(attrs)
}

fn get_serde_rename(attrs: &[syn::Attribute]) -> Option<String> {
    let mut rename = None;
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }

        // Malformed serde attributes are reported by serde's own derive.
        let _ = attr.parse_nested_meta(|meta| {
            if meta.input.peek(Token![=]) {
                let value = meta.value()?;
                if meta.path.is_ident("rename") {
                    let lit: LitStr = value.parse()?;
                    rename = Some(lit.value());
                } else {
                    value.parse::<syn::Expr>()?;
                }
            } else if meta.input.peek(token::Paren) {
                // rename(serialize = "..", deserialize = "..") and similar lists
                meta.parse_nested_meta(|nested| {
                    if nested.path.is_ident("deserialize") && meta.path.is_ident("rename") {
                        let lit: LitStr = nested.value()?.parse()?;
                        rename = Some(lit.value());
                    } else if nested.input.peek(Token![=]) {
                        nested.value()?.parse::<syn::Expr>()?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        });
    }
    rename
}

fn get_doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(meta) = &attr.meta {
                if let syn::Expr::Lit(expr_lit) = &meta.value {
                    if let Lit::Str(lit_str) = &expr_lit.lit {
                        return Some(lit_str.value().trim().to_string());
                    }
                }
            }
            None
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn serde_rename_is_read() {
        let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[serde(default, rename = "cash")])];
        assert_eq!(get_serde_rename(&attrs).as_deref(), Some("cash"));
    }

    #[test]
    fn serde_rename_list_uses_deserialize_name() {
        let attrs: Vec<syn::Attribute> =
            vec![parse_quote!(#[serde(rename(serialize = "out", deserialize = "in"))])];
        assert_eq!(get_serde_rename(&attrs).as_deref(), Some("in"));
    }

    #[test]
    fn similar_serde_keys_are_not_renames() {
        let attrs: Vec<syn::Attribute> = vec![
            parse_quote!(#[serde(rename_all = "camelCase")]),
            parse_quote!(#[serde(deserialize_with = "rename::parse")]),
            parse_quote!(#[doc = " rename = \"nope\""]),
        ];
        assert_eq!(get_serde_rename(&attrs), None);
    }

    #[test]
    fn doc_comments_become_hint() {
        let attrs: Vec<syn::Attribute> = vec![
            parse_quote!(#[doc = " Money in bank"]),
            parse_quote!(#[doc = " accounts"]),
        ];
        assert_eq!(get_doc_comment(&attrs), "Money in bank accounts");
    }
}
