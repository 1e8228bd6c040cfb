//! Attribute parsing helpers for Config derive macro.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Lit, Meta};

/// Get section name from #[config(section = "xxx")].
pub fn get_section(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "config", "section")
}

/// Get custom field name from #[config(name = "xxx")] or #[serde(rename = "xxx")].
pub fn get_custom_name(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "config", "name").or_else(|| get_string_attr(attrs, "serde", "rename"))
}

/// Get the container naming rule from #[serde(rename_all = "xxx")].
pub fn get_rename_all(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "serde", "rename_all")
}

/// Get inline comment from #[config(inline_doc = "xxx")] or the bare
/// #[config(inline_doc)] flag (first doc line).
pub fn get_inline_doc(attrs: &[Attribute]) -> Option<String> {
    if let Some(text) = get_string_attr(attrs, "config", "inline_doc") {
        return Some(text);
    }
    if has_attr(attrs, "inline_doc") {
        return extract_doc_comment(attrs)
            .and_then(|doc| doc.lines().next().map(|l| l.trim().to_string()));
    }
    None
}

/// Get string value from #[ns(key = "value")].
fn get_string_attr(attrs: &[Attribute], ns: &str, key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident(ns) {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) && meta.input.peek(syn::Token![=]) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
                return Ok(());
            }
            skip_value(&meta)
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

/// Check if attribute has a flag like #[config(skip)].
pub fn has_attr(attrs: &[Attribute], key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            skip_value(&meta)
        });
        if found {
            return true;
        }
    }
    false
}

/// Consume `= value` or `(...)` so the next nested item can be parsed.
fn skip_value(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let value = meta.value()?;
        // Accept both literals (`default = "x"`) and paths (`with = module`)
        if value.parse::<Lit>().is_err() {
            let _: syn::Path = value.parse()?;
        }
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|inner| skip_value(&inner))?;
    }
    Ok(())
}

/// Extract doc comment from #[doc = "..."] attributes.
pub fn extract_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(nv) = &attr.meta
                && let syn::Expr::Lit(expr_lit) = &nv.value
                && let Lit::Str(s) = &expr_lit.lit
            {
                return Some(s.value());
            }
            None
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n").trim().to_string())
    }
}
