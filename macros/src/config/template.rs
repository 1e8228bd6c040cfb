//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;

/// Generate template code (TokenStream) for fields.
///
/// Scalar keys come first and nested sections last, since TOML assigns
/// every key after a `[table]` header to that table.
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let scalars = fields
        .iter()
        .filter(|f| !f.sub)
        .map(|f| generate_field_template_code(f));
    let subs = fields
        .iter()
        .filter(|f| f.sub)
        .map(|f| generate_sub_template_code(f));

    quote! {
        #(#scalars)*
        #(#subs)*
    }
}

fn doc_code(info: &FieldInfo) -> TokenStream {
    match (&info.doc, &info.inline_doc) {
        (Some(doc), None) => {
            let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            quote! { out.push_str(#doc_str); }
        }
        _ => quote! {},
    }
}

/// Nested section: emit the sub config's own template with header.
fn generate_sub_template_code(info: &FieldInfo) -> TokenStream {
    let field_ty = &info.ty;
    quote! {
        out.push('\n');
        out.push_str(&<#field_ty>::template_with_header());
    }
}

/// Generate TOML template code for a single key.
///
/// Values come from `Default::default()` at runtime. Values TOML cannot
/// represent (`None`) are written as a commented-out placeholder.
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;
    let doc_code = doc_code(info);

    let inline = match &info.inline_doc {
        Some(comment) => {
            let comment = format!("  # {comment}");
            quote! { out.push_str(#comment); }
        }
        None => quote! {},
    };

    quote! {
        #doc_code
        match toml::Value::try_from(&default.#field_name) {
            Ok(value) => {
                out.push_str(#toml_name);
                out.push_str(" = ");
                out.push_str(&value.to_string());
            }
            Err(_) => {
                out.push_str("# ");
                out.push_str(#toml_name);
                out.push_str(" = \"\"");
            }
        }
        #inline
        out.push('\n');
    }
}
