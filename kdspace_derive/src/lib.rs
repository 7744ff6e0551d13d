mod position;

/// Derive macro generating an implementation of the trait `Position`.
///
/// The coordinates are read from the field named `position`, or from the field annotated with
/// `#[position]`. The type of that field must itself implement `Position`.
#[proc_macro_derive(Position, attributes(position))]
pub fn derive_position(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    position::impl_position(syn::parse(input))
        .unwrap_or_else(|e| syn::Error::to_compile_error(&e).into())
}

fn get_attribute<'a>(name: &str, attrs: &'a [syn::Attribute]) -> Option<&'a syn::Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(name))
}

fn find_field<'a>(
    name: &str,
    data_struct: &'a syn::DataStruct,
) -> Option<(syn::Member, &'a syn::Type)> {
    let members = data_struct.fields.iter().enumerate().map(|(i, field)| {
        let member = match &field.ident {
            Some(ident) => syn::Member::Named(ident.clone()),
            None => syn::Member::Unnamed(syn::Index::from(i)),
        };
        (member, field)
    });

    let mut tagged = None;
    let mut named = None;
    for (member, field) in members {
        if get_attribute(name, &field.attrs).is_some() {
            tagged.get_or_insert((member, &field.ty));
        } else if field.ident.as_ref().is_some_and(|ident| ident == name) {
            named.get_or_insert((member, &field.ty));
        }
    }

    tagged.or(named)
}
